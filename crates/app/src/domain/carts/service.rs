//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use num_bigint::BigInt;
use tracing::debug;

use crate::{
    checkout::{CheckoutService, Receipt},
    domain::carts::{
        errors::CartsServiceError,
        locator::CartLocator,
        models::{Cart, CartItem},
        mutator::{self, Change},
    },
    sessions::{SessionId, SessionStore},
};

/// Carts held in client sessions.
///
/// Each call locates the session's cart, applies one transition and writes
/// the result back. Concurrent calls on the same session are not serialized
/// here; the last write wins.
#[derive(Clone)]
pub struct SessionCartsService {
    locator: CartLocator,
    checkout: Arc<dyn CheckoutService>,
}

impl fmt::Debug for SessionCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCartsService")
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}

impl SessionCartsService {
    /// Carts kept in `store`, priced by `checkout`.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, checkout: Arc<dyn CheckoutService>) -> Self {
        Self {
            locator: CartLocator::new(store),
            checkout,
        }
    }

    async fn persist(
        &self,
        session: Option<SessionId>,
        cart: &Cart,
        change: Change,
    ) -> Result<(), CartsServiceError> {
        if change.is_modified() {
            self.locator.save(session, cart).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn view_cart(&self, session: Option<SessionId>) -> Result<Cart, CartsServiceError> {
        self.locator.locate(session).await
    }

    async fn add_item(
        &self,
        session: Option<SessionId>,
        item: CartItem,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.locator.locate(session).await?;

        let name = item.name.clone();
        let change = mutator::add_item(&mut cart, item)?;

        self.persist(session, &cart, change).await?;

        debug!(item = %name, items = cart.len(), "added cart item");

        Ok(cart)
    }

    async fn get_item(
        &self,
        session: Option<SessionId>,
        name: &str,
    ) -> Result<CartItem, CartsServiceError> {
        self.locator
            .locate(session)
            .await?
            .find_by_name(name)
            .cloned()
            .ok_or(CartsServiceError::NotFound)
    }

    async fn update_quantity(
        &self,
        session: Option<SessionId>,
        name: &str,
        quantity: Option<BigInt>,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.locator.locate(session).await?;

        debug!(item = %name, ?quantity, "updating cart item quantity");

        let change = mutator::update_quantity(&mut cart, name, quantity);

        self.persist(session, &cart, change).await?;

        debug!(item = %name, ?change, "updated cart item quantity");

        Ok(cart)
    }

    async fn remove_item(
        &self,
        session: Option<SessionId>,
        name: &str,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.locator.locate(session).await?;

        let change = mutator::remove_item(&mut cart, name);

        self.persist(session, &cart, change).await?;

        debug!(item = %name, ?change, "removed cart item");

        Ok(cart)
    }

    async fn clear_cart(&self, session: Option<SessionId>) -> Result<(), CartsServiceError> {
        self.locator.clear(session).await?;

        debug!("cleared cart");

        Ok(())
    }

    async fn receipt(&self, session: Option<SessionId>) -> Result<Receipt, CartsServiceError> {
        let cart = self.locator.locate(session).await?;

        Ok(self.checkout.checkout(&cart).await?)
    }
}

/// Cart operations for one client session.
///
/// A `None` session behaves as a session without a cart: reads see an empty
/// cart and nothing is persisted.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The session's current cart; empty if it has none.
    async fn view_cart(&self, session: Option<SessionId>) -> Result<Cart, CartsServiceError>;

    /// Add an item, failing with `Conflict` if its name is taken.
    async fn add_item(
        &self,
        session: Option<SessionId>,
        item: CartItem,
    ) -> Result<Cart, CartsServiceError>;

    /// Look up an item by name, ignoring case.
    async fn get_item(
        &self,
        session: Option<SessionId>,
        name: &str,
    ) -> Result<CartItem, CartsServiceError>;

    /// Set an item's quantity. Zero removes it; missing or negative
    /// quantities and unknown names are ignored.
    async fn update_quantity(
        &self,
        session: Option<SessionId>,
        name: &str,
        quantity: Option<BigInt>,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove every item answering to `name`. Removing an absent name is not
    /// an error.
    async fn remove_item(
        &self,
        session: Option<SessionId>,
        name: &str,
    ) -> Result<Cart, CartsServiceError>;

    /// Drop the session's cart entirely.
    async fn clear_cart(&self, session: Option<SessionId>) -> Result<(), CartsServiceError>;

    /// Price the session's cart.
    async fn receipt(&self, session: Option<SessionId>) -> Result<Receipt, CartsServiceError>;
}
