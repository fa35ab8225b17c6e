//! Shopping Cart Domain Models
//!
//! This module contains the data structures representing a single product
//! line in the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// Represents one named product line in the shopping cart.
///
/// `name` and `price` are fixed at construction; `quantity` changes only
/// through [`Item::update_quantity`]. The cart owning the item is the key
/// holder: `name` doubles as the cart's map key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Name of the product, also the cart's key for this line
    pub name: String,

    /// Price per unit
    pub price: Decimal,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Total price of all units at construction time, rounded to 2 decimals.
    ///
    /// This is a convenience snapshot only: it is NOT refreshed when the
    /// quantity later changes. Aggregation always uses [`Item::line_total`],
    /// which computes from the live quantity.
    pub total_item_price: Decimal,
}

impl Item {
    /// Creates a new item line.
    ///
    /// No validation is performed on negative prices or zero quantities;
    /// the cart's operations are the gatekeepers for those.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        let total_item_price = (price * Decimal::from(quantity)).round_dp(2);
        Self {
            name: name.into(),
            price,
            quantity,
            total_item_price,
        }
    }

    /// Live `price × quantity` for this line, rounded to 2 decimal places.
    pub fn line_total(&self) -> Decimal {
        (self.price * Decimal::from(self.quantity)).round_dp(2)
    }

    /// Updates the quantity by `delta`, adding and/or removing.
    ///
    /// The flags are independent: both false is a no-op, and both true nets
    /// to no change (the addition is applied first, then the removal). No
    /// bounds checking happens here and `total_item_price` is not
    /// recomputed; [`super::state::ShoppingCart::delete_item`] is the only
    /// internal caller and pre-checks that a removal cannot underflow.
    pub fn update_quantity(&mut self, delta: u32, add: bool, remove: bool) {
        if add {
            self.quantity += delta;
        }
        if remove {
            self.quantity -= delta;
        }
    }
}
