//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CartEntry`] | One distinct product and its count in the cart |
//! | [`ItemId`] | Opaque product identifier |

/// Cart entry entity
pub mod cart_entry;

pub use cart_entry::{CartEntry, ItemId};
