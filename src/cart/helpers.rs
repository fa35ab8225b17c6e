//! Shopping Cart Helpers
//!
//! Small pure functions shared across the cart module: price formatting,
//! item summaries and cart-id generation. Keeping them separated from the
//! data models makes them easy to test in isolation.

use super::models::Item;
use super::state::ShoppingCart;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Formats an amount as a fixed two-decimal string, e.g. `"41.00"`.
///
/// The amount is rounded to two decimals first (banker's rounding, the
/// crate-wide policy), so the precision specifier below only pads zeros.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary of a cart's items.
///
/// Example output: `"2x Apple, 1x Banana"`. Line order follows map order and
/// is not significant.
pub fn format_item_summary(cart: &ShoppingCart) -> String {
    cart.items()
        .map(|Item { quantity, name, .. }| format!("{quantity}x {name}"))
        .collect::<Vec<_>>()
        .join(", ")
}
