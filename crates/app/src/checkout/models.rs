//! Receipt Models

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Receipt Model
///
/// Amounts are minor currency units; the `formatted_*` fields render them
/// in `currency` for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// ISO 4217 currency code.
    pub currency: String,

    /// One line per cart item.
    pub lines: Vec<ReceiptLine>,

    /// Sum of line subtotals.
    pub subtotal: u64,

    /// Sum of line discounts.
    pub discount: u64,

    /// Amount payable.
    pub total: u64,

    /// `subtotal` rendered in `currency`.
    pub formatted_subtotal: String,

    /// `discount` rendered in `currency`.
    pub formatted_discount: String,

    /// `total` rendered in `currency`.
    pub formatted_total: String,
}

/// Receipt Line Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Item name.
    pub name: String,

    /// Units bought.
    pub quantity: BigUint,

    /// Price of one unit.
    pub unit_price: u64,

    /// `unit_price * quantity`.
    pub subtotal: u64,

    /// Bulk discount taken off the line.
    pub discount: u64,

    /// `subtotal - discount`.
    pub total: u64,
}
