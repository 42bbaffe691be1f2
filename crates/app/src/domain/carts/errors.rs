//! Carts service errors.

use thiserror::Error;

use crate::{checkout::CheckoutError, sessions::SessionStoreError};

/// Carts service error variants.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// An item with the same name (ignoring case) is already in the cart.
    #[error("Item '{name}' already exists in cart.")]
    Conflict {
        /// Name as it was submitted.
        name: String,
    },

    /// No item in the cart answers to the requested name.
    #[error("cart item not found")]
    NotFound,

    /// The session store failed or held an undecodable cart.
    #[error("session storage error")]
    Session(#[from] SessionStoreError),

    /// Pricing the cart failed.
    #[error("checkout failed")]
    Checkout(#[from] CheckoutError),
}
