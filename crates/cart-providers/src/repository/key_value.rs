//! Key-value backed cart repository
//!
//! Serializes the entry list as a JSON array under a single key of any
//! `KeyValueStoreProvider`.

use cart_domain::constants::CART_STORAGE_KEY;
use cart_domain::entities::CartEntry;
use cart_domain::error::{Error, Result};
use cart_domain::ports::KeyValueStoreProvider;
use cart_domain::repositories::CartRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Cart repository storing entries as JSON in a key-value store
#[derive(Debug, Clone)]
pub struct KeyValueCartRepository {
    store: Arc<dyn KeyValueStoreProvider>,
    key: String,
}

impl KeyValueCartRepository {
    /// Create a repository using the default `shopping-cart` key
    pub fn new(store: Arc<dyn KeyValueStoreProvider>) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Create a repository using a custom key
    pub fn with_key<S: Into<String>>(store: Arc<dyn KeyValueStoreProvider>, key: S) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the entries are stored under
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Check the decoded list against the entry invariants
fn validate_entries(entries: &[CartEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.quantity == 0 {
            return Err(Error::invalid_data(format!(
                "Stored entry for item {} has zero quantity",
                entry.id
            )));
        }
        if !seen.insert(entry.id) {
            return Err(Error::invalid_data(format!(
                "Item {} is stored more than once",
                entry.id
            )));
        }
    }
    Ok(())
}

impl CartRepository for KeyValueCartRepository {
    /// Read the stored entry list
    ///
    /// A missing key reads as an empty list. A stored list is accepted or
    /// rejected as a whole: a single entry with zero quantity or a repeated id
    /// fails the load, and the cart then starts empty and discards the rest
    /// of the stored entries with it.
    fn load(&self) -> Result<Vec<CartEntry>> {
        let Some(bytes) = self.store.load(&self.key)? else {
            debug!(key = %self.key, "No stored cart");
            return Ok(Vec::new());
        };

        let entries: Vec<CartEntry> = serde_json::from_slice(&bytes)?;
        validate_entries(&entries)?;

        debug!(key = %self.key, entries = entries.len(), "Loaded stored cart");
        Ok(entries)
    }

    fn save(&self, entries: &[CartEntry]) -> Result<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.save(&self.key, &bytes)
    }
}
