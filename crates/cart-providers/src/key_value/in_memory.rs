//! In-memory key-value store
//!
//! Keeps values in a concurrent map for the lifetime of the process. Clones
//! share the same map, so a test can hand one clone to a cart, drop the cart,
//! and build a second cart over another clone to simulate a page reload.

use cart_domain::error::Result;
use cart_domain::ports::KeyValueStoreProvider;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

/// In-memory key-value store
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value stored under `key`, if any
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|value| value.value().clone())
    }
}

impl KeyValueStoreProvider for InMemoryKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        trace!(key, bytes = data.len(), "Storing value in memory");
        self.entries.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyValueStore")
            .field("keys", &self.entries.len())
            .finish()
    }
}
