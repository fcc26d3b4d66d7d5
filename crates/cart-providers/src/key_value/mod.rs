//! Key-Value Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullKeyValueStore`] | Testing | Stores nothing |
//! | [`InMemoryKeyValueStore`] | Local | Concurrent map, lost on restart |
//! | [`FilesystemKeyValueStore`] | Durable | One file per key, survives restarts |
//!
//! ## Provider Selection Guide
//!
//! - **Unit Tests**: `InMemoryKeyValueStore` as the fake behind the cart
//! - **Persistence Disabled**: `NullKeyValueStore`
//! - **Desktop/Kiosk Builds**: `FilesystemKeyValueStore`

#[cfg(feature = "store-filesystem")]
pub mod filesystem;
#[cfg(feature = "store-memory")]
pub mod in_memory;
pub mod null;

#[cfg(feature = "store-filesystem")]
pub use filesystem::{FilesystemKeyValueStore, FilesystemKeyValueStoreConfig};
#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryKeyValueStore;
pub use null::NullKeyValueStore;
