//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use shop_app::domain::carts::CartsServiceError;

use crate::{
    carts::{
        errors::{ErrorDocument, into_status_error},
        models::{CartItemRequest, CartResponse},
    },
    extensions::*,
    state::State,
};

/// Add Cart Item Handler
///
/// Adds an item to the session's cart. Names are unique ignoring case, so a
/// clashing name is rejected with an error document and the cart is left as
/// it was.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added", body = CartResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Item already in cart", body = ErrorDocument),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.add",
    skip(json, req, depot, res),
    fields(
        session_id = tracing::field::Empty,
        item = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CartItemRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();
    let item = json.into_inner();

    if item.name.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Item name must not be blank"));
    }

    let span = tracing::Span::current();

    if let Some(session) = session {
        span.record("session_id", tracing::field::display(session));
    }

    span.record("item", item.name.as_str());

    match state.app.carts.add_item(session, item.into()).await {
        Ok(cart) => {
            res.render(Json(CartResponse::from(cart)));

            Ok(StatusCode::CREATED)
        }
        Err(conflict @ CartsServiceError::Conflict { .. }) => {
            res.render(Json(ErrorDocument::new(
                conflict.to_string(),
                req.uri().to_string(),
            )));

            Ok(StatusCode::BAD_REQUEST)
        }
        Err(error) => Err(into_status_error(error)),
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shop_app::domain::carts::{MockCartsService, models::CartItem};

    use crate::test_helpers::{TEST_SESSION_ID, carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").put(handler))
    }

    #[tokio::test]
    async fn test_add_item_returns_201_with_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|session, item| {
                *session == Some(TEST_SESSION_ID) && *item == CartItem::new("apple", 2, 150)
            })
            .return_once(|_, _| Ok(make_cart(&[("apple", 2)])));

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({ "name": "apple", "quantity": 2, "price": 150 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.items.first().map(|item| item.name.as_str()), Some("apple"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_keeps_large_quantity_exact() -> TestResult {
        const QUANTITY: &str = "100000000000000000000000";

        let expected: BigUint = QUANTITY.parse()?;
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(move |_, item| item.name == "apple" && item.quantity == expected)
            .return_once(|_, item| Ok(std::iter::once(item).collect()));

        let mut res = TestClient::put("http://example.com/cart")
            .raw_json(format!(r#"{{ "name": "apple", "quantity": {QUANTITY} }}"#))
            .send(&make_service(carts))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(
            body.contains(&format!(r#""quantity":{QUANTITY}"#)),
            "expected exact quantity in {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_duplicate_returns_400_error_document() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().once().return_once(|_, _| {
            Err(CartsServiceError::Conflict {
                name: "Apple".to_string(),
            })
        });

        let mut res = TestClient::put("http://example.com/cart")
            .json(&json!({ "name": "Apple", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        let body: ErrorDocument = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Item 'Apple' already exists in cart.");
        assert!(
            body.links.this.href.ends_with("/cart"),
            "expected self link to the request, got {}",
            body.links.this.href
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_blank_name_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::put("http://example.com/cart")
            .json(&json!({ "name": "  ", "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_malformed_body_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_item().never();

        let res = TestClient::put("http://example.com/cart")
            .json(&json!({ "name": "apple", "quantity": -1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
