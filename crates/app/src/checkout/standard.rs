//! Standard checkout pricing.

use async_trait::async_trait;
use decimal_percentage::Percentage;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::{
    checkout::{CheckoutError, CheckoutService, Receipt, ReceiptLine},
    domain::carts::models::{Cart, CartItem},
};

/// Percentage off any line bought in at least `threshold` units.
#[derive(Debug, Clone, Copy)]
pub struct BulkDiscount {
    threshold: u64,
    percent: Percentage,
}

impl BulkDiscount {
    /// `percent` is a fraction, so `Percentage::from(0.1)` is 10% off.
    pub fn new(threshold: u64, percent: Percentage) -> Self {
        Self { threshold, percent }
    }

    fn applies_to(&self, quantity: &BigUint) -> bool {
        !quantity.is_zero() && *quantity >= BigUint::from(self.threshold)
    }

    /// Discount on `minor`, rounded half away from zero and capped at `minor`.
    fn amount_off(&self, minor: u64) -> Option<u64> {
        (self.percent * Decimal::ONE)
            .checked_mul(Decimal::from(minor))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .map(|discount| discount.min(minor))
    }
}

/// Prices every line at `price * quantity`, less any bulk discount.
#[derive(Debug, Clone)]
pub struct StandardCheckout {
    currency: &'static Currency,
    bulk_discount: Option<BulkDiscount>,
}

impl StandardCheckout {
    /// Checkout pricing in `currency` with no discounts.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            bulk_discount: None,
        }
    }

    /// Apply `discount` to qualifying lines.
    #[must_use]
    pub fn with_bulk_discount(mut self, discount: BulkDiscount) -> Self {
        self.bulk_discount = Some(discount);
        self
    }

    fn price_line(&self, item: &CartItem) -> Result<ReceiptLine, CheckoutError> {
        let overflow = || CheckoutError::Overflow {
            item: item.name.clone(),
        };

        let subtotal = (&item.quantity * item.price)
            .to_u64()
            .ok_or_else(overflow)?;

        let discount = match self.bulk_discount {
            Some(bulk) if bulk.applies_to(&item.quantity) => {
                bulk.amount_off(subtotal).ok_or_else(overflow)?
            }
            _ => 0,
        };

        Ok(ReceiptLine {
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            unit_price: item.price,
            subtotal,
            discount,
            total: subtotal - discount,
        })
    }

    fn format(&self, minor: u64) -> Result<String, CheckoutError> {
        let minor = i64::try_from(minor).ok().ok_or(CheckoutError::Overflow {
            item: "receipt total".to_string(),
        })?;

        Ok(Money::from_minor(minor, self.currency).to_string())
    }
}

#[async_trait]
impl CheckoutService for StandardCheckout {
    async fn checkout(&self, cart: &Cart) -> Result<Receipt, CheckoutError> {
        let lines = cart
            .items()
            .iter()
            .map(|item| self.price_line(item))
            .collect::<Result<Vec<_>, _>>()?;

        let sum = |field: fn(&ReceiptLine) -> u64| {
            lines
                .iter()
                .try_fold(0_u64, |acc, line| acc.checked_add(field(line)))
                .ok_or(CheckoutError::Overflow {
                    item: "receipt total".to_string(),
                })
        };

        let subtotal = sum(|line| line.subtotal)?;
        let discount = sum(|line| line.discount)?;
        let total = subtotal - discount;

        Ok(Receipt {
            currency: self.currency.iso_alpha_code.to_string(),
            formatted_subtotal: self.format(subtotal)?,
            formatted_discount: self.format(discount)?,
            formatted_total: self.format(total)?,
            lines,
            subtotal,
            discount,
            total,
        })
    }
}
