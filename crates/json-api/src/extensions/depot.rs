//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use shop_app::sessions::SessionId;

const SESSION_ID_DEPOT_KEY: &str = "session_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Access to the session resolved by the session middleware.
pub(crate) trait SessionDepotExt {
    fn insert_session_id(&mut self, session: SessionId);

    /// The request's session, or `None` outside the session middleware.
    fn session_id(&self) -> Option<SessionId>;
}

impl SessionDepotExt for Depot {
    fn insert_session_id(&mut self, session: SessionId) {
        self.insert(SESSION_ID_DEPOT_KEY, session);
    }

    fn session_id(&self) -> Option<SessionId> {
        self.get::<SessionId>(SESSION_ID_DEPOT_KEY).ok().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_through_depot() {
        let mut depot = Depot::new();
        let session = SessionId::new();

        assert_eq!(depot.session_id(), None);

        depot.insert_session_id(session);

        assert_eq!(depot.session_id(), Some(session));
    }

    #[test]
    fn missing_state_maps_to_500() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert!(
            matches!(result, Err(ref error) if error.code.as_u16() == 500),
            "expected internal server error"
        );
    }
}
