//! Shopping Cart Library
//!
//! This library provides the core state-management logic for an in-memory
//! shopping cart: named line items with a per-unit price and quantity,
//! supporting insertion, removal, lookup and aggregate price computation.
//!
//! It is an embeddable domain component. There is no networking, persistence
//! or presentation layer here; an enclosing application invokes the cart's
//! operations directly.

// Domain module
pub mod cart;

// Re-export the types most callers need
pub use cart::error::{CartError, CartResult};
pub use cart::models::Item;
pub use cart::state::{CartStore, SharedStore, ShoppingCart};
