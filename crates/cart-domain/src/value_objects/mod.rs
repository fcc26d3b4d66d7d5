//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CartSnapshot`] | Owned, read-only view of the cart state |

/// Cart snapshot value object
pub mod snapshot;

pub use snapshot::{CartSnapshot, total_quantity};
