//! Route labels for spans and metrics.

/// Top-level collections whose second segment is a client-chosen name.
const NAMED_COLLECTIONS: &[&str] = &["cart"];

/// Fixed sub-routes that sit beside a `{name}` segment.
const STATIC_SEGMENTS: &[&str] = &["clear", "receipt"];

/// Collapse item names in `path` so every item shares one route label.
pub(super) fn route_label(path: &str) -> String {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => "/".to_owned(),
        [collection, name]
            if NAMED_COLLECTIONS.contains(collection) && !STATIC_SEGMENTS.contains(name) =>
        {
            format!("/{collection}/{{name}}")
        }
        _ => format!("/{}", segments.join("/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_names_collapse_to_placeholder() {
        assert_eq!(route_label("/cart/apple"), "/cart/{name}");
        assert_eq!(route_label("/cart/Green%20Pear/"), "/cart/{name}");
    }

    #[test]
    fn static_routes_are_kept() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/cart"), "/cart");
        assert_eq!(route_label("/cart/clear"), "/cart/clear");
        assert_eq!(route_label("/cart/receipt"), "/cart/receipt");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
    }
}
