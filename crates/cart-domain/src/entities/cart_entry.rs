//! Cart entry entity

use crate::constants::INITIAL_ITEM_QUANTITY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier
///
/// Serialized as a bare JSON number so the persisted list reads
/// `[{"id":5,"quantity":2}]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create an identifier from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product and its count in the cart
///
/// A live entry always has `quantity >= 1`; an entry that would drop to zero
/// is removed from the cart instead of being kept at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product identifier, unique within a cart
    pub id: ItemId,
    /// Number of units selected
    pub quantity: u32,
}

impl CartEntry {
    /// Create an entry with an explicit quantity
    pub fn new(id: ItemId, quantity: u32) -> Self {
        Self { id, quantity }
    }

    /// Entry for an item added to the cart for the first time
    pub fn first(id: ItemId) -> Self {
        Self::new(id, INITIAL_ITEM_QUANTITY)
    }

    /// Whether this entry holds exactly one unit
    pub fn is_single(&self) -> bool {
        self.quantity == 1
    }
}
