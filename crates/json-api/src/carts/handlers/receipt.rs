//! Cart Receipt Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::ReceiptResponse},
    extensions::*,
    state::State,
};

/// Cart Receipt Handler
///
/// Prices the session's cart, including any bulk discount.
#[endpoint(
    tags("carts"),
    summary = "Cart Receipt",
    responses(
        (status_code = StatusCode::OK, description = "Priced receipt"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.receipt",
    skip(depot),
    fields(session_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReceiptResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();

    if let Some(session) = session {
        tracing::Span::current().record("session_id", tracing::field::display(session));
    }

    let receipt = state
        .app
        .carts
        .receipt(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(receipt.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop_app::{
        checkout::{CheckoutError, Receipt},
        domain::carts::{CartsServiceError, MockCartsService},
    };

    use crate::test_helpers::{TEST_SESSION_ID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/receipt").get(handler))
    }

    fn make_receipt(total: u64) -> Receipt {
        Receipt {
            currency: "GBP".to_string(),
            lines: Vec::new(),
            subtotal: total,
            discount: 0,
            total,
            formatted_subtotal: "£3.00".to_string(),
            formatted_discount: "£0.00".to_string(),
            formatted_total: "£3.00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_receipt_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_receipt()
            .once()
            .withf(|session| *session == Some(TEST_SESSION_ID))
            .return_once(|_| Ok(make_receipt(300)));

        let mut res = TestClient::get("http://example.com/cart/receipt")
            .send(&make_service(carts))
            .await;

        let body: ReceiptResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.total, 300);
        assert_eq!(body.formatted_total, "£3.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_receipt_overflow_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_receipt().once().return_once(|_| {
            Err(CartsServiceError::Checkout(CheckoutError::Overflow {
                item: "apple".to_string(),
            }))
        });

        let res = TestClient::get("http://example.com/cart/receipt")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
