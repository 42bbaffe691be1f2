//! App Router

use salvo::Router;

use crate::{carts, session};

/// Cart routes, behind the session middleware.
///
/// `clear` and `receipt` are pushed before `{name}` so they are never taken
/// for item names.
pub(crate) fn cart_router() -> Router {
    Router::with_path("cart")
        .hoop(session::handler)
        .get(carts::view::handler)
        .put(carts::add::handler)
        .push(Router::with_path("clear").post(carts::clear::handler))
        .push(Router::with_path("receipt").get(carts::receipt::handler))
        .push(
            Router::with_path("{name}")
                .get(carts::get::handler)
                .post(carts::update::handler)
                .delete(carts::remove::handler),
        )
}
