//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes the item answering to `name`. Removing an item that is not in the
/// cart still succeeds.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Updated cart", body = CartResponse),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.remove",
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
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();
    let name = name.into_inner();

    let span = tracing::Span::current();

    if let Some(session) = session {
        span.record("session_id", tracing::field::display(session));
    }

    span.record("item", name.as_str());

    let cart = state
        .app
        .carts
        .remove_item(session, &name)
        .await
        .map_err(into_status_error)?;

    tracing::info!(item = %name, "removed cart item");

    res.status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop_app::domain::carts::MockCartsService;

    use crate::test_helpers::{TEST_SESSION_ID, carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{name}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_item_returns_201() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(|session, name| *session == Some(TEST_SESSION_ID) && name == "Apple")
            .return_once(|_, _| Ok(make_cart(&[("pear", 1)])));

        let mut res = TestClient::delete("http://example.com/cart/Apple")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_absent_item_still_returns_201() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Ok(make_cart(&[])));

        let res = TestClient::delete("http://example.com/cart/banana")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }
}
