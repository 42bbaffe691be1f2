//! Update Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, UpdateQuantityRequest},
    },
    extensions::*,
    state::State,
};

/// Update Cart Item Quantity Handler
///
/// Sets an item's quantity; zero removes it. Unknown names and missing,
/// negative or non-integer quantities leave the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::CREATED, description = "Updated cart", body = CartResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.update",
    skip(name, json, depot, res),
    fields(
        session_id = tracing::field::Empty,
        item = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id();
    let name = name.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    if let Some(session) = session {
        span.record("session_id", tracing::field::display(session));
    }

    span.record("item", name.as_str());

    if let Some(quantity) = &quantity {
        span.record("quantity", tracing::field::display(quantity));
    }

    let cart = state
        .app
        .carts
        .update_quantity(session, &name, quantity)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
