//! Errors

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use tracing::error;

use shop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        conflict @ CartsServiceError::Conflict { .. } => {
            StatusError::bad_request().brief(conflict.to_string())
        }
        CartsServiceError::Session(source) => {
            error!("failed to access cart session: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Checkout(source) => {
            error!("failed to price cart: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Error document returned when a request clashes with the cart's contents.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorDocument {
    /// What went wrong
    pub message: String,

    /// Links relating to the failed request
    #[serde(rename = "_links")]
    pub links: ErrorLinks,
}

/// Error document links.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorLinks {
    /// The request that failed
    #[serde(rename = "self")]
    pub this: Link,
}

/// Hypermedia link.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Link {
    pub href: String,
}

impl ErrorDocument {
    pub(crate) fn new(message: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            links: ErrorLinks {
                this: Link { href: href.into() },
            },
        }
    }
}
