//! Cart Mutator
//!
//! Pure state transitions over a located [`Cart`]. Persistence is left to
//! the caller, guided by the returned [`Change`].

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{Cart, CartItem},
};

/// Whether a transition altered the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) enum Change {
    Modified,
    Unchanged,
}

impl Change {
    pub(crate) fn is_modified(self) -> bool {
        self == Self::Modified
    }
}

/// Insert `item` unless its name is already taken.
pub(crate) fn add_item(cart: &mut Cart, item: CartItem) -> Result<Change, CartsServiceError> {
    if cart.find_by_name(&item.name).is_some() {
        return Err(CartsServiceError::Conflict { name: item.name });
    }

    cart.push(item);

    Ok(Change::Modified)
}

/// Apply a requested quantity to the item named `name`.
///
/// Zero removes the item. Missing or negative quantities, and names not in
/// the cart, leave it untouched.
pub(crate) fn update_quantity(cart: &mut Cart, name: &str, requested: Option<BigInt>) -> Change {
    let Some(quantity) = requested.and_then(|q| BigUint::try_from(q).ok()) else {
        return Change::Unchanged;
    };

    if quantity.is_zero() {
        return remove_item(cart, name);
    }

    match cart.find_by_name_mut(name) {
        None => Change::Unchanged,
        Some(item) => {
            item.quantity = quantity;

            Change::Modified
        }
    }
}

/// Drop every item answering to `name`.
pub(crate) fn remove_item(cart: &mut Cart, name: &str) -> Change {
    match cart.remove_named(name) {
        0 => Change::Unchanged,
        _ => Change::Modified,
    }
}
