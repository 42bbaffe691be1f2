//! Get Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shop_app::domain::carts::CartsServiceError;

use crate::{
    carts::{errors::into_status_error, models::CartItemResponse},
    extensions::*,
    state::State,
};

/// Get Cart Item Handler
///
/// Returns the item answering to `name`, ignoring case. A missing item is an
/// empty 404.
#[endpoint(
    tags("carts"),
    summary = "Get Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart item", body = CartItemResponse),
        (status_code = StatusCode::NOT_FOUND, description = "Item not in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.get",
    skip(name, depot, res),
    fields(
        session_id = tracing::field::Empty,
        item = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();
    let name = name.into_inner();

    let span = tracing::Span::current();

    if let Some(session) = session {
        span.record("session_id", tracing::field::display(session));
    }

    span.record("item", name.as_str());

    match state.app.carts.get_item(session, &name).await {
        Ok(item) => {
            res.render(Json(CartItemResponse::from(item)));

            Ok(StatusCode::OK)
        }
        Err(CartsServiceError::NotFound) => {
            res.body("");

            Ok(StatusCode::NOT_FOUND)
        }
        Err(error) => Err(into_status_error(error)),
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop_app::{
        checkout::CheckoutError,
        domain::carts::{MockCartsService, models::CartItem},
    };

    use crate::test_helpers::{TEST_SESSION_ID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{name}").get(handler))
    }

    #[tokio::test]
    async fn test_get_item_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_item()
            .once()
            .withf(|session, name| *session == Some(TEST_SESSION_ID) && name == "APPLE")
            .return_once(|_, _| Ok(CartItem::new("apple", 2, 150)));

        let mut res = TestClient::get("http://example.com/cart/APPLE")
            .send(&make_service(carts))
            .await;

        let body: CartItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "apple");
        assert_eq!(body.quantity, BigUint::from(2_u32));
        assert_eq!(body.price, 150);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_item_failure_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_item().once().return_once(|_, _| {
            Err(CartsServiceError::Checkout(CheckoutError::Overflow {
                item: "apple".to_string(),
            }))
        });

        let res = TestClient::get("http://example.com/cart/apple")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/cart/banana")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await?, "");

        Ok(())
    }
}
