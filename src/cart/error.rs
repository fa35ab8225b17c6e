//! Cart error taxonomy.
//!
//! Only deletion can fail; lookups of missing items are a routine outcome
//! and are reported as `None` / `0`, never as an error.

use thiserror::Error;

/// Result type used across the cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Errors raised by cart mutations.
///
/// Both kinds leave the cart unchanged: a failed delete performs no partial
/// mutation and the cart remains usable afterwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The named item is not in the cart.
    #[error("item {name:?} is not in the cart, delete aborted")]
    NotFound { name: String },

    /// The requested delete amount exceeds the quantity currently held.
    #[error("only {available} of {name:?} in cart, attempted deleting {requested}")]
    InsufficientQuantity {
        name: String,
        available: u32,
        requested: u32,
    },
}

impl CartError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn insufficient(name: impl Into<String>, available: u32, requested: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            available,
            requested,
        }
    }
}
