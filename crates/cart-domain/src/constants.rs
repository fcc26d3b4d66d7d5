//! Domain layer constants
//!
//! Contains constants that are part of the cart domain. Infrastructure
//! defaults (config file names, log levels) live in
//! `cart_infrastructure::constants`.

// ============================================================================
// PERSISTENCE CONSTANTS
// ============================================================================

/// Key under which the serialized cart entries are stored
pub const CART_STORAGE_KEY: &str = "shopping-cart";

// ============================================================================
// ENTRY CONSTANTS
// ============================================================================

/// Quantity assigned to an entry when an item is first added
pub const INITIAL_ITEM_QUANTITY: u32 = 1;
