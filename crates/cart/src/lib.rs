//! # Storefront Cart
//!
//! Persisted shopping-cart state for storefront UIs: which items are in the
//! cart and how many of each, kept across reloads, plus the open/closed
//! state of the cart panel.
//!
//! ## Example
//!
//! ```ignore
//! use cart::domain::ItemId;
//! use cart::infrastructure::{ConfigLoader, build_cart};
//!
//! let config = ConfigLoader::new().load()?;
//! let mut components = build_cart(&config)?;
//! let mut updates = components.events.subscribe();
//!
//! components.cart.increase_cart_quantity(ItemId(5));
//! components.cart.open_cart();
//! assert_eq!(components.cart.cart_quantity(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entries, events, errors and port traits
//! - `application` - the `ShoppingCart` state container
//! - `providers` - key-value stores, cart repository, event publishers
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cart_domain::*;
}

/// Application layer - the cart state container
pub mod application {
    pub use cart_application::*;
}

/// Provider implementations
pub mod providers {
    pub use cart_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use cart_infrastructure::*;
}

pub use cart_application::ShoppingCart;
pub use cart_domain::{CartEntry, CartEvent, CartSnapshot, Error, ItemId, Result};
