//! In-memory carts, one per session.
//!
//! A [`Cart`] is an ordered sequence of pizza selections; the [`CartStore`]
//! holds every live cart keyed by a session-scoped cart id and serializes
//! access behind a mutex. Handlers receive the store via
//! [`AppState`](crate::state::AppState) - there is no global cart.
//!
//! The total price is recomputed from the contained items on every read, so
//! it can never go stale.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pizzeria_core::{PizzaId, Price};

use crate::models::Pizza;

/// An ordered collection of pizza selections.
///
/// Insertion order is preserved for deterministic listing and removal.
/// Choosing the same pizza twice produces two entries.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Pizza>,
}

impl Cart {
    /// Append a pizza to the cart.
    pub fn add(&mut self, pizza: Pizza) {
        self.items.push(pizza);
    }

    /// Remove the first entry with the given id, returning it.
    ///
    /// Returns `None` and leaves the cart untouched if no entry matches.
    pub fn remove(&mut self, pizza_id: PizzaId) -> Option<Pizza> {
        let pos = self.items.iter().position(|p| p.id == pizza_id)?;
        Some(self.items.remove(pos))
    }

    /// Total price of the cart, recomputed from the items on every call.
    #[must_use]
    pub fn price(&self) -> Price {
        self.items.iter().map(|p| p.price).sum()
    }

    /// The contained items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Pizza] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries in the cart (duplicates count separately).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Concurrent store of per-session carts.
///
/// All operations take the lock around the whole read-modify-write sequence,
/// so concurrent adds, removes, and checkout snapshots cannot interleave into
/// a corrupted cart. The lock is never held across an `.await` point.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: Mutex<HashMap<String, Cart>>,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Cart>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the map itself is still structurally valid.
        self.carts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a pizza to the cart for `cart_id`, creating the cart if needed.
    pub fn add(&self, cart_id: &str, pizza: Pizza) {
        let mut carts = self.lock();
        carts.entry(cart_id.to_owned()).or_default().add(pizza);
    }

    /// Remove the first matching entry from the cart for `cart_id`.
    ///
    /// Returns `None` if the cart does not exist or holds no matching entry.
    pub fn remove(&self, cart_id: &str, pizza_id: PizzaId) -> Option<Pizza> {
        let mut carts = self.lock();
        carts.get_mut(cart_id)?.remove(pizza_id)
    }

    /// A point-in-time copy of the cart's items, in insertion order.
    ///
    /// Unknown cart ids read as empty.
    #[must_use]
    pub fn snapshot(&self, cart_id: &str) -> Vec<Pizza> {
        let carts = self.lock();
        carts
            .get(cart_id)
            .map(|cart| cart.items().to_vec())
            .unwrap_or_default()
    }

    /// Total price of the cart for `cart_id`; zero for unknown ids.
    #[must_use]
    pub fn price(&self, cart_id: &str) -> Price {
        let carts = self.lock();
        carts.get(cart_id).map_or(Price::ZERO, Cart::price)
    }

    /// Drop the cart for `cart_id`, if any.
    pub fn clear(&self, cart_id: &str) {
        let mut carts = self.lock();
        carts.remove(cart_id);
    }
}
