//! Session carts and checkout pricing.

pub mod checkout;
pub mod context;
pub mod domain;
pub mod sessions;

mod uuids;
