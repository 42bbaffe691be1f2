//! Cart Locator
//!
//! Resolves, stores and discards the cart held in a session.

use std::{fmt, sync::Arc};

use crate::{
    domain::carts::{errors::CartsServiceError, models::Cart},
    sessions::{SessionId, SessionStore, SessionStoreError},
};

/// Session attribute holding the serialized cart.
pub const CART_ATTRIBUTE: &str = "shop.cart";

#[derive(Clone)]
pub(crate) struct CartLocator {
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for CartLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLocator")
            .field("attribute", &CART_ATTRIBUTE)
            .finish_non_exhaustive()
    }
}

impl CartLocator {
    pub(crate) fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The session's cart, or a fresh empty one when there is no session or
    /// no cart yet. Never writes to the store.
    pub(crate) async fn locate(
        &self,
        session: Option<SessionId>,
    ) -> Result<Cart, CartsServiceError> {
        let Some(session) = session else {
            return Ok(Cart::new());
        };

        let Some(value) = self.store.get(session, CART_ATTRIBUTE).await? else {
            return Ok(Cart::new());
        };

        serde_json::from_value(value)
            .map_err(|source| SessionStoreError::Serialization {
                attribute: CART_ATTRIBUTE,
                source,
            })
            .map_err(CartsServiceError::from)
    }

    /// Replace the session's cart wholesale. Without a session there is
    /// nowhere to write and nothing happens.
    pub(crate) async fn save(
        &self,
        session: Option<SessionId>,
        cart: &Cart,
    ) -> Result<(), CartsServiceError> {
        let Some(session) = session else {
            return Ok(());
        };

        let value = serde_json::to_value(cart).map_err(|source| {
            SessionStoreError::Serialization {
                attribute: CART_ATTRIBUTE,
                source,
            }
        })?;

        self.store.put(session, CART_ATTRIBUTE, value).await?;

        Ok(())
    }

    /// Remove the cart attribute entirely.
    pub(crate) async fn clear(&self, session: Option<SessionId>) -> Result<(), CartsServiceError> {
        if let Some(session) = session {
            self.store.remove(session, CART_ATTRIBUTE).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{domain::carts::models::CartItem, sessions::MockSessionStore};

    use super::*;

    fn locator(store: MockSessionStore) -> CartLocator {
        CartLocator::new(Arc::new(store))
    }

    #[tokio::test]
    async fn locate_without_session_returns_empty_cart() -> TestResult {
        let mut store = MockSessionStore::new();

        store.expect_get().never();

        let cart = locator(store).locate(None).await?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn locate_without_attribute_returns_empty_cart_and_writes_nothing() -> TestResult {
        let session = SessionId::new();
        let mut store = MockSessionStore::new();

        store
            .expect_get()
            .once()
            .withf(move |s, attribute| *s == session && attribute == CART_ATTRIBUTE)
            .return_once(|_, _| Ok(None));

        store.expect_put().never();
        store.expect_remove().never();

        let cart = locator(store).locate(Some(session)).await?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn locate_decodes_stored_cart() -> TestResult {
        let mut store = MockSessionStore::new();

        store.expect_get().once().return_once(|_, _| {
            Ok(Some(json!({ "items": [{ "name": "apple", "quantity": [2], "price": 30 }] })))
        });

        let cart = locator(store).locate(Some(SessionId::new())).await?;

        assert_eq!(cart.items(), &[CartItem::new("apple", 2, 30)]);

        Ok(())
    }

    #[tokio::test]
    async fn locate_reports_undecodable_cart() {
        let mut store = MockSessionStore::new();

        store
            .expect_get()
            .once()
            .return_once(|_, _| Ok(Some(json!({ "items": "nope" }))));

        let result = locator(store).locate(Some(SessionId::new())).await;

        assert!(
            matches!(result, Err(CartsServiceError::Session(_))),
            "expected Session error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn save_without_session_is_noop() -> TestResult {
        let mut store = MockSessionStore::new();

        store.expect_put().never();

        locator(store).save(None, &Cart::new()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn clear_removes_cart_attribute() -> TestResult {
        let session = SessionId::new();
        let mut store = MockSessionStore::new();

        store
            .expect_remove()
            .once()
            .withf(move |s, attribute| *s == session && attribute == CART_ATTRIBUTE)
            .return_once(|_, _| Ok(()));

        locator(store).clear(Some(session)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn clear_without_session_is_noop() -> TestResult {
        let mut store = MockSessionStore::new();

        store.expect_remove().never();

        locator(store).clear(None).await?;

        Ok(())
    }
}
