//! View Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// View Cart Handler
///
/// Returns the session's cart, which is empty until an item is added.
#[endpoint(
    tags("carts"),
    summary = "View Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.view",
    skip(depot),
    fields(session_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();

    if let Some(session) = session {
        tracing::Span::current().record("session_id", tracing::field::display(session));
    }

    let cart = state
        .app
        .carts
        .view_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
