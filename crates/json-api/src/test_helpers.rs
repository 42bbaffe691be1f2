//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use shop_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, CartItem},
    },
    sessions::{MockSessionStore, SessionId},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SESSION_COOKIE: &str = "SESSION";

pub(crate) const TEST_SESSION_ID: SessionId = SessionId::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_id(TEST_SESSION_ID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_sessions_mock() -> MockSessionStore {
    let mut sessions = MockSessionStore::new();

    sessions.expect_get().never();
    sessions.expect_put().never();
    sessions.expect_remove().never();
    sessions.expect_purge_expired().never();

    sessions
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    let app = AppContext {
        carts: Arc::new(carts),
        sessions: Arc::new(strict_sessions_mock()),
    };

    State::from_app_context(app, TEST_SESSION_COOKIE)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_session)
            .push(route),
    )
}

pub(crate) fn make_cart(items: &[(&str, u64)]) -> Cart {
    items
        .iter()
        .map(|(name, quantity)| CartItem::new(*name, *quantity, 100))
        .collect()
}
