//! Session cookie middleware.

use std::sync::Arc;

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;

use shop_app::sessions::SessionId;

use crate::{extensions::*, state::State};

/// Resolve the caller's session from its cookie, minting a new one when the
/// cookie is missing or does not hold a session id.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let cookie_name = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.session_cookie.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let existing = req
        .cookie(&cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let session = match existing {
        Some(session) => session,
        None => {
            let session = SessionId::new();

            res.add_cookie(session_cookie(cookie_name, session));

            debug!(session_id = %session, "started session");

            session
        }
    };

    depot.insert_session_id(session);

    ctrl.call_next(req, depot, res).await;
}

fn session_cookie(name: String, session: SessionId) -> Cookie<'static> {
    Cookie::build((name, session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
