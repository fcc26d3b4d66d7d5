//! Shopping Cart Use Case
//!
//! The cart state container. Owns the entry list and the cart panel flag,
//! reads the persisted entries once when created, and writes the full list
//! back through the repository after every mutation.
//!
//! ## Per-item lifecycle
//!
//! ```text
//! ABSENT        --increase--> PRESENT(1)
//! PRESENT(n)    --increase--> PRESENT(n+1)
//! PRESENT(1)    --decrease--> ABSENT
//! PRESENT(n>1)  --decrease--> PRESENT(n-1)
//! PRESENT(*)    --remove-->   ABSENT
//! ABSENT        --decrease/remove--> ABSENT
//! ```
//!
//! No operation reports an error to the caller. A failed startup read yields
//! an empty cart and a failed write is logged; the in-memory state stays
//! authoritative either way.

use cart_domain::entities::{CartEntry, ItemId};
use cart_domain::events::{CartEvent, CartEventPublisher};
use cart_domain::repositories::CartRepository;
use cart_domain::value_objects::{CartSnapshot, total_quantity};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Cart state container
///
/// Mutations take `&mut self`, so one caller at a time changes the cart and
/// operations apply in the order they are called.
///
/// # Example
///
/// ```ignore
/// use cart_application::ShoppingCart;
///
/// let mut cart = ShoppingCart::new(repository, events);
/// cart.increase_cart_quantity(ItemId(5));
/// cart.increase_cart_quantity(ItemId(5));
/// assert_eq!(cart.get_item_quantity(ItemId(5)), 2);
/// ```
pub struct ShoppingCart {
    entries: Vec<CartEntry>,
    is_open: bool,
    repository: Arc<dyn CartRepository>,
    events: Arc<dyn CartEventPublisher>,
}

impl ShoppingCart {
    /// Create a cart seeded from `repository`
    ///
    /// The repository is read exactly once, here. Missing, unreadable or
    /// malformed data yields an empty cart. The panel always starts closed.
    pub fn new(repository: Arc<dyn CartRepository>, events: Arc<dyn CartEventPublisher>) -> Self {
        let entries = match repository.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Stored cart could not be loaded, starting empty");
                Vec::new()
            }
        };
        debug!(entries = entries.len(), "Cart initialized");

        Self {
            entries,
            is_open: false,
            repository,
            events,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Quantity of `id` in the cart, 0 if absent
    pub fn get_item_quantity(&self, id: ItemId) -> u32 {
        self.position(id).map_or(0, |idx| self.entries[idx].quantity)
    }

    /// Cart entries in insertion order
    pub fn cart_items(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Total units across all entries, recomputed on each call
    pub fn cart_quantity(&self) -> u64 {
        total_quantity(&self.entries)
    }

    /// Whether the cart panel is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.entries.clone(), self.is_open)
    }

    // ------------------------------------------------------------------
    // Item mutations
    // ------------------------------------------------------------------

    /// Add one unit of `id`, creating the entry at quantity 1 if absent
    pub fn increase_cart_quantity(&mut self, id: ItemId) {
        match self.position(id) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.quantity = entry.quantity.saturating_add(1);
            }
            None => self.entries.push(CartEntry::first(id)),
        }
        debug!(item = %id, quantity = self.get_item_quantity(id), "Increased item quantity");
        self.commit();
    }

    /// Remove one unit of `id`
    ///
    /// An entry at quantity 1 is dropped entirely. An absent id is left
    /// absent.
    pub fn decrease_cart_quantity(&mut self, id: ItemId) {
        if let Some(idx) = self.position(id) {
            if self.entries[idx].is_single() {
                self.entries.remove(idx);
            } else {
                self.entries[idx].quantity -= 1;
            }
        }
        debug!(item = %id, quantity = self.get_item_quantity(id), "Decreased item quantity");
        self.commit();
    }

    /// Drop the entry for `id` regardless of its quantity
    pub fn remove_from_cart(&mut self, id: ItemId) {
        self.entries.retain(|entry| entry.id != id);
        debug!(item = %id, "Removed item from cart");
        self.commit();
    }

    // ------------------------------------------------------------------
    // Panel visibility
    // ------------------------------------------------------------------

    /// Open the cart panel
    pub fn open_cart(&mut self) {
        self.set_open(true);
    }

    /// Close the cart panel
    pub fn close_cart(&mut self) {
        self.set_open(false);
    }

    fn set_open(&mut self, is_open: bool) {
        if self.is_open == is_open {
            return;
        }
        self.is_open = is_open;
        self.events.publish(CartEvent::VisibilityChanged { is_open });
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Write the entry list through and announce the change
    fn commit(&self) {
        if let Err(e) = self.repository.save(&self.entries) {
            error!(error = %e, entries = self.entries.len(), "Failed to persist cart");
        }
        self.events.publish(CartEvent::ItemsChanged {
            items: self.entries.clone(),
            quantity: self.cart_quantity(),
        });
    }
}

impl std::fmt::Debug for ShoppingCart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingCart")
            .field("entries", &self.entries)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}
