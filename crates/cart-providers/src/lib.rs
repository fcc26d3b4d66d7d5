//! # Storefront Cart - Provider Implementations
//!
//! Concrete backends for the ports defined in `cart-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Key-Value Store | `KeyValueStoreProvider` | InMemory, Filesystem, Null |
//! | Repository | `CartRepository` | KeyValueCartRepository |
//! | Events | `CartEventPublisher` | Broadcast, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cart-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

// Re-export cart-domain types commonly used with providers
pub use cart_domain::error::{Error, Result};
pub use cart_domain::events::CartEventPublisher;
pub use cart_domain::ports::KeyValueStoreProvider;
pub use cart_domain::repositories::CartRepository;

/// Provider-specific constants
pub mod constants;

/// Key-value store implementations
///
/// Implements `KeyValueStoreProvider` for in-memory, filesystem and no-op
/// backends.
pub mod key_value;

/// Cart repository adapters
pub mod repository;

/// Cart event publisher implementations
pub mod events;
