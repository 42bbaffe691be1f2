//! Checkout errors.

use thiserror::Error;

/// Checkout error variants.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A price, quantity or discount did not fit the amount range.
    #[error("amount overflowed while pricing `{item}`")]
    Overflow {
        /// Item, or `receipt total`, being priced.
        item: String,
    },
}
