//! Null key-value store
//!
//! A store implementation that doesn't keep anything. Used when cart
//! persistence is disabled: every load behaves like a first visit.

use cart_domain::error::Result;
use cart_domain::ports::KeyValueStoreProvider;
use std::sync::Arc;

/// Null key-value store that doesn't store anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKeyValueStore;

impl NullKeyValueStore {
    /// Create a new null store
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl KeyValueStoreProvider for NullKeyValueStore {
    fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
