//! Checkout
//!
//! Turns a cart into a priced [`Receipt`]. The cart domain only depends on
//! the [`CheckoutService`] seam; [`StandardCheckout`] is the pricing used by
//! the server.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::carts::models::Cart;

pub mod errors;
pub mod models;
mod standard;

pub use errors::CheckoutError;
pub use models::{Receipt, ReceiptLine};
pub use standard::{BulkDiscount, StandardCheckout};

/// Prices carts.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Price the cart, applying any discounts.
    async fn checkout(&self, cart: &Cart) -> Result<Receipt, CheckoutError>;
}
