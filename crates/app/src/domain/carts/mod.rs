//! Carts

pub mod errors;
mod locator;
pub mod models;
mod mutator;
pub mod service;

pub use errors::CartsServiceError;
pub use locator::CART_ATTRIBUTE;
pub use service::*;
