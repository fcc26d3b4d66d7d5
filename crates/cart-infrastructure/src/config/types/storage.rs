//! Storage configuration types

use crate::constants::DEFAULT_STORAGE_PATH;
use cart_domain::constants::CART_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Key-value backend holding the cart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderKind {
    /// Process-lifetime map; the cart is lost on restart
    Memory,
    /// One file per key under `StorageConfig::path`
    #[default]
    Filesystem,
    /// Persistence disabled
    Null,
}

impl fmt::Display for StorageProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Filesystem => "filesystem",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// Cart persistence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection
    pub provider: StorageProviderKind,

    /// Base directory for the filesystem backend
    pub path: PathBuf,

    /// Key the cart entries are stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::default(),
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
            key: CART_STORAGE_KEY.to_string(),
        }
    }
}
