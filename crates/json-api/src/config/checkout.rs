//! Checkout Config

use clap::Args;

use shop_app::context::CheckoutSettings;

/// Checkout pricing settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// ISO 4217 currency receipts are priced in.
    #[arg(long = "checkout-currency", env = "CHECKOUT_CURRENCY", default_value = "GBP")]
    pub currency: String,

    /// Line quantity from which the bulk discount applies.
    #[arg(long, env = "BULK_DISCOUNT_THRESHOLD")]
    pub bulk_discount_threshold: Option<u64>,

    /// Whole percent taken off lines at or above the threshold.
    #[arg(
        long,
        env = "BULK_DISCOUNT_PERCENT",
        default_value_t = 0_u32,
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    pub bulk_discount_percent: u32,
}

impl From<&CheckoutConfig> for CheckoutSettings {
    fn from(config: &CheckoutConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            bulk_discount_threshold: config.bulk_discount_threshold,
            bulk_discount_percent: config.bulk_discount_percent,
        }
    }
}
