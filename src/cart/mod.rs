//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Item)
//! - Cart state management (ShoppingCart, CartStore)
//! - Error taxonomy (CartError)
//! - Formatting and id helpers

pub mod error;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{CartError, CartResult};
pub use models::Item;
pub use state::{CartStore, SharedStore, ShoppingCart};
