//! Key-Value Store Port
//!
//! Defines the contract for simple key-value persistence. Values are opaque
//! bytes; encoding is the caller's concern.

use crate::error::Result;

/// Key-value store interface for persistence
///
/// # Implementations
///
/// - **InMemory**: process-lifetime map, used for tests and previews
/// - **Filesystem**: one file per key, survives restarts
/// - **Null**: stores nothing
pub trait KeyValueStoreProvider: Send + Sync + std::fmt::Debug {
    /// Load data for a key
    ///
    /// # Returns
    /// `None` if nothing has been stored under `key`
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Save data under a key, replacing any previous value
    fn save(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Delete data for a key; deleting a missing key is not an error
    fn delete(&self, key: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
