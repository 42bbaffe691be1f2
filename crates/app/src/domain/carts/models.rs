//! Cart Models

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// CartItem Model
///
/// Items are identified by `name`, compared without regard to case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name, unique within a cart ignoring case.
    pub name: String,

    /// Units in the cart. Unbounded.
    pub quantity: BigUint,

    /// Unit price in minor currency units.
    #[serde(default)]
    pub price: u64,
}

impl CartItem {
    /// An item of `quantity` units at `price` minor units each.
    pub fn new(name: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            name: name.into(),
            quantity: BigUint::from(quantity),
            price,
        }
    }

    /// Whether this item answers to `name`, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Cart Model
///
/// No two items share a name under case-insensitive comparison. Item order
/// follows insertion but is not significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart, yielding its items.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the item answering to `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.has_name(name))
    }

    pub(crate) fn find_by_name_mut(&mut self, name: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.has_name(name))
    }

    /// Append an item. Callers check for a name clash first.
    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Drop every item answering to `name`, returning how many went.
    pub(crate) fn remove_named(&mut self, name: &str) -> usize {
        let before = self.items.len();

        self.items.retain(|item| !item.has_name(name));

        before - self.items.len()
    }
}

impl FromIterator<CartItem> for Cart {
    /// Items whose name clashes with an earlier one are dropped.
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut cart = Self::new();

        for item in iter {
            if cart.find_by_name(&item.name).is_none() {
                cart.push(item);
            }
        }

        cart
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
