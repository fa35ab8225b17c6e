//! Shopping Cart State Management
//!
//! This module holds the cart itself — the name → [`Item`] mapping and the
//! operations that enforce its quantity invariants — plus [`CartStore`], a
//! shared concurrent store of carts for embedding applications with more
//! than one caller.

use super::error::{CartError, CartResult};
use super::helpers::{format_item_summary, format_price, get_or_create_cart_id};
use super::models::Item;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, warn};

// =============================================================================
// ShoppingCart
// =============================================================================

/// The item collection for one shopping session.
///
/// Invariant: every stored item has `quantity > 0`. A delete that brings an
/// item's quantity to zero removes the entry entirely, so enumeration never
/// yields an empty line.
///
/// The cart is a plain in-memory structure with no locking of its own; for
/// concurrent callers, wrap it in a [`CartStore`], which runs each
/// read-modify-write sequence under a per-cart guard.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: HashMap<String, Item>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an immutable view of the named item, or `None` if absent.
    ///
    /// A miss is a routine outcome, not an error. The reference is
    /// read-only: all mutation goes through [`ShoppingCart::insert_item`]
    /// and [`ShoppingCart::delete_item`].
    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Returns the quantity currently held for `name`, or `0` if absent.
    /// Never fails and never mutates the cart.
    pub fn get_item_count(&self, name: &str) -> u32 {
        self.items.get(name).map_or(0, |item| item.quantity)
    }

    /// Returns the total price of the cart as a fixed two-decimal string
    /// (e.g. `"41.00"`).
    ///
    /// Each line contributes its live `price × quantity` rounded to two
    /// decimals; the per-item `total_item_price` snapshot is deliberately
    /// not consulted, so a stale snapshot can never skew the total.
    pub fn get_total_price(&self) -> String {
        let total: Decimal = self.items.values().map(Item::line_total).sum();
        format_price(total)
    }

    /// Inserts `quantity` units of `name` at `price_per_unit` each.
    ///
    /// If the item is already in the cart its quantity is increased and the
    /// stored price is retained: a differing `price_per_unit` on a repeat
    /// insert is silently ignored (first price wins). This mirrors the
    /// reference behavior and is covered by tests; callers that want price
    /// updates must delete and re-insert.
    ///
    /// No validation of price or quantity happens at this layer.
    pub fn insert_item(&mut self, name: &str, price_per_unit: Decimal, quantity: u32) {
        if let Some(item) = self.items.get_mut(name) {
            item.update_quantity(quantity, true, false);
        } else {
            self.items
                .insert(name.to_string(), Item::new(name, price_per_unit, quantity));
        }
    }

    /// Deletes `quantity` units of `name` from the cart.
    ///
    /// - absent name: [`CartError::NotFound`], cart unchanged;
    /// - held quantity greater than `quantity`: decrement, entry stays;
    /// - held quantity equal to `quantity`: entry removed entirely;
    /// - held quantity less than `quantity`:
    ///   [`CartError::InsufficientQuantity`], cart unchanged.
    pub fn delete_item(&mut self, name: &str, quantity: u32) -> CartResult<()> {
        let Some(item) = self.items.get_mut(name) else {
            return Err(CartError::not_found(name));
        };

        if item.quantity > quantity {
            item.update_quantity(quantity, false, true);
        } else if item.quantity == quantity {
            self.items.remove(name);
        } else {
            return Err(CartError::insufficient(name, item.quantity, quantity));
        }
        Ok(())
    }

    /// Number of distinct item lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the item lines. Order is not significant.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

// =============================================================================
// CartStore
// =============================================================================

/// Shared store handle that can be safely passed between threads
pub type SharedStore = Arc<CartStore>;

/// Concurrent store of carts, keyed by cart id.
///
/// Each cart operation takes the DashMap entry guard for the whole
/// read-modify-write sequence, so `insert_item` and `delete_item` are atomic
/// per cart even under concurrent callers. A single-threaded embedder can
/// ignore this type and own a [`ShoppingCart`] directly.
#[derive(Debug, Default)]
pub struct CartStore {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    carts: DashMap<String, ShoppingCart>,
}

impl CartStore {
    /// Creates a store with no carts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `cart_id` unchanged, or a freshly generated id when `None`.
    pub fn open_cart(&self, cart_id: Option<String>) -> String {
        get_or_create_cart_id(cart_id)
    }

    /// Inserts items into the identified cart, creating the cart on first
    /// use. Same accumulation and first-price-wins semantics as
    /// [`ShoppingCart::insert_item`].
    pub fn insert_item(&self, cart_id: &str, name: &str, price_per_unit: Decimal, quantity: u32) {
        let mut cart = self.carts.entry(cart_id.to_string()).or_default();
        cart.insert_item(name, price_per_unit, quantity);
        debug!(cart_id, name, quantity, "inserted into cart");
    }

    /// Deletes items from the identified cart. A missing cart behaves like
    /// an empty one: the item is reported as not found.
    pub fn delete_item(&self, cart_id: &str, name: &str, quantity: u32) -> CartResult<()> {
        let Some(mut cart) = self.carts.get_mut(cart_id) else {
            warn!(cart_id, name, "delete aborted, no such cart");
            return Err(CartError::not_found(name));
        };

        match cart.delete_item(name, quantity) {
            Ok(()) => {
                debug!(cart_id, name, quantity, "deleted from cart");
                Ok(())
            }
            Err(err) => {
                warn!(cart_id, name, quantity, %err, "delete rejected");
                Err(err)
            }
        }
    }

    /// Quantity held for `name` in the identified cart; `0` when either the
    /// cart or the item is absent.
    pub fn item_count(&self, cart_id: &str, name: &str) -> u32 {
        self.carts
            .get(cart_id)
            .map_or(0, |cart| cart.get_item_count(name))
    }

    /// Total price string for the identified cart; `"0.00"` when the cart
    /// is absent.
    pub fn total_price(&self, cart_id: &str) -> String {
        self.carts
            .get(cart_id)
            .map_or_else(|| format_price(Decimal::ZERO), |cart| cart.get_total_price())
    }

    /// Number of live carts in the store.
    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }

    /// Removes the identified cart from the store and returns it, or `None`
    /// if there is no such cart.
    pub fn checkout(&self, cart_id: &str) -> Option<ShoppingCart> {
        let (_, cart) = self.carts.remove(cart_id)?;
        info!(
            cart_id,
            total = %cart.get_total_price(),
            items = %format_item_summary(&cart),
            "checked out"
        );
        Some(cart)
    }
}
