//! Cart Request & Response Models

use num_bigint::{BigInt, BigUint};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use shop_app::{
    checkout::{Receipt, ReceiptLine},
    domain::carts::models::{Cart, CartItem},
};

/// Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRequest {
    /// Item name, unique within the cart ignoring case
    pub name: String,

    /// Number of units, of any size
    #[serde(with = "natural")]
    #[salvo(schema(value_type = u64))]
    pub quantity: BigUint,

    /// Unit price in pence/cents
    #[serde(default)]
    pub price: u64,
}

impl From<CartItemRequest> for CartItem {
    fn from(request: CartItemRequest) -> Self {
        CartItem {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Update Quantity Request
///
/// A missing, negative or non-integer quantity leaves the item unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// New quantity; zero removes the item
    #[serde(default, deserialize_with = "integer_or_none")]
    #[salvo(schema(value_type = Option<i64>))]
    pub quantity: Option<BigInt>,
}

/// Any JSON integer, however large; anything else reads as `None`.
fn integer_or_none<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Box<RawValue>>::deserialize(deserializer)?
        .and_then(|raw| raw.get().trim().parse().ok()))
}

/// Unbounded non-negative JSON integers, read and written as raw number text
/// so no precision is lost.
mod natural {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
    use serde_json::value::RawValue;

    pub(super) fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawValue::from_string(value.to_string())
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;

        raw.get().trim().parse().map_err(|error| {
            <D::Error as de::Error>::custom(format!(
                "expected a non-negative integer, got {raw}: {error}"
            ))
        })
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// Item name
    pub name: String,

    /// Number of units
    #[serde(with = "natural")]
    #[salvo(schema(value_type = u64))]
    pub quantity: BigUint,

    /// Unit price in pence/cents
    pub price: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        CartItemResponse {
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Items in the cart
    pub items: Vec<CartItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            items: cart.into_items().into_iter().map(Into::into).collect(),
        }
    }
}

/// Receipt Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptLineResponse {
    pub name: String,
    #[serde(with = "natural")]
    #[salvo(schema(value_type = u64))]
    pub quantity: BigUint,
    pub unit_price: u64,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
}

impl From<ReceiptLine> for ReceiptLineResponse {
    fn from(line: ReceiptLine) -> Self {
        ReceiptLineResponse {
            name: line.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            subtotal: line.subtotal,
            discount: line.discount,
            total: line.total,
        }
    }
}

/// Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptResponse {
    /// ISO 4217 currency code
    pub currency: String,

    /// Priced cart lines
    pub lines: Vec<ReceiptLineResponse>,

    /// Sum of line subtotals in minor units
    pub subtotal: u64,

    /// Sum of line discounts in minor units
    pub discount: u64,

    /// Amount payable in minor units
    pub total: u64,

    /// Subtotal formatted for display
    pub formatted_subtotal: String,

    /// Discount formatted for display
    pub formatted_discount: String,

    /// Total formatted for display
    pub formatted_total: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        ReceiptResponse {
            currency: receipt.currency,
            lines: receipt.lines.into_iter().map(Into::into).collect(),
            subtotal: receipt.subtotal,
            discount: receipt.discount,
            total: receipt.total,
            formatted_subtotal: receipt.formatted_subtotal,
            formatted_discount: receipt.formatted_discount,
            formatted_total: receipt.formatted_total,
        }
    }
}
