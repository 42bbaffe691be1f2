//! App Context

use std::sync::Arc;

use decimal_percentage::Percentage;
use jiff::SignedDuration;
use rust_decimal::Decimal;
use rusty_money::iso;
use thiserror::Error;

use crate::{
    checkout::{BulkDiscount, CheckoutService, StandardCheckout},
    domain::carts::{CartsService, SessionCartsService},
    sessions::{MemorySessionStore, SessionStore},
};

/// Errors building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The configured currency code is not an ISO 4217 currency.
    #[error("unknown checkout currency `{0}`")]
    UnknownCurrency(String),

    /// The bulk discount percent is above 100.
    #[error("bulk discount percent must be between 0 and 100, got {0}")]
    InvalidDiscountPercent(u32),
}

/// Checkout pricing settings.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    /// ISO 4217 currency code, e.g. `GBP`.
    pub currency: String,

    /// Minimum line quantity for the bulk discount; `None` disables it.
    pub bulk_discount_threshold: Option<u64>,

    /// Whole percent taken off qualifying lines.
    pub bulk_discount_percent: u32,
}

impl CheckoutSettings {
    /// Build the standard checkout these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown currency code or a percent above 100.
    pub fn standard_checkout(&self) -> Result<StandardCheckout, AppInitError> {
        let currency = iso::find(self.currency.trim())
            .ok_or_else(|| AppInitError::UnknownCurrency(self.currency.clone()))?;

        if self.bulk_discount_percent > 100 {
            return Err(AppInitError::InvalidDiscountPercent(
                self.bulk_discount_percent,
            ));
        }

        let checkout = StandardCheckout::new(currency);

        Ok(match self.bulk_discount_threshold {
            Some(threshold) if self.bulk_discount_percent > 0 => {
                let percent = Decimal::new(i64::from(self.bulk_discount_percent), 2);

                checkout
                    .with_bulk_discount(BulkDiscount::new(threshold, Percentage::from(percent)))
            }
            _ => checkout,
        })
    }
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Cart operations.
    pub carts: Arc<dyn CartsService>,

    /// The session store the carts live in.
    pub sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Build application context backed by an in-memory session store whose
    /// sessions expire after `session_ttl` of inactivity.
    ///
    /// # Errors
    ///
    /// Returns an error when the checkout settings are invalid.
    pub fn in_memory(
        session_ttl: SignedDuration,
        checkout: &CheckoutSettings,
    ) -> Result<Self, AppInitError> {
        Ok(Self::with_checkout(
            Arc::new(MemorySessionStore::new(session_ttl)),
            Arc::new(checkout.standard_checkout()?),
        ))
    }

    /// Build application context over an existing store and checkout.
    #[must_use]
    pub fn with_checkout(
        sessions: Arc<dyn SessionStore>,
        checkout: Arc<dyn CheckoutService>,
    ) -> Self {
        Self {
            carts: Arc::new(SessionCartsService::new(Arc::clone(&sessions), checkout)),
            sessions,
        }
    }
}
