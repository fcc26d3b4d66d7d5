//! # Storefront Cart - Domain Layer
//!
//! Core types for client-side shopping-cart state: cart entries, change
//! events, the domain error type and the port traits that the application
//! layer depends on.
//!
//! ## Organization
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`CartEntry`] and [`ItemId`] |
//! | [`value_objects`] | [`CartSnapshot`] read-only view |
//! | [`events`] | [`CartEvent`] and the [`CartEventPublisher`] port |
//! | [`ports`] | Provider ports ([`KeyValueStoreProvider`]) |
//! | [`repositories`] | The [`CartRepository`] persistence port |
//! | [`error`] | [`Error`] and [`Result`] |

/// Domain constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Domain error type
pub mod error;
/// Cart change events and publisher port
pub mod events;
/// Port interfaces implemented by providers
pub mod ports;
/// Repository interfaces
pub mod repositories;
/// Immutable value objects
pub mod value_objects;

pub use entities::{CartEntry, ItemId};
pub use error::{Error, Result};
pub use events::{CartEvent, CartEventPublisher, SharedCartEventPublisher};
pub use ports::KeyValueStoreProvider;
pub use repositories::CartRepository;
pub use value_objects::CartSnapshot;
