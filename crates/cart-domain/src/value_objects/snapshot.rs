//! Cart snapshot value object

use crate::entities::{CartEntry, ItemId};
use serde::{Deserialize, Serialize};

/// Sum of quantities over a list of entries
pub fn total_quantity(entries: &[CartEntry]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.quantity)).sum()
}

/// Owned view of the cart at one point in time
///
/// Consumers that render the cart panel read this instead of borrowing the
/// container. `quantity` is derived from `items` when the snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Cart entries in insertion order
    pub items: Vec<CartEntry>,
    /// Total number of units across all entries
    pub quantity: u64,
    /// Whether the cart panel is open
    pub is_open: bool,
}

impl CartSnapshot {
    /// Build a snapshot, deriving the total quantity from `items`
    pub fn new(items: Vec<CartEntry>, is_open: bool) -> Self {
        let quantity = total_quantity(&items);
        Self {
            items,
            quantity,
            is_open,
        }
    }

    /// Quantity for `id`, or 0 if the item is not in the cart
    pub fn item_quantity(&self, id: ItemId) -> u32 {
        self.items
            .iter()
            .find(|entry| entry.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Whether the cart holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
