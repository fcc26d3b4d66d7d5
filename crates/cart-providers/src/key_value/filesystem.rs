//! Filesystem key-value store
//!
//! Stores each key as `<base_path>/<key>.json`. Writes land in a uniquely
//! named sibling temporary file first and are renamed into place, so a reader
//! never sees a partially written value. A temporary file that fails to
//! persist is removed.

use crate::constants::{
    FILESYSTEM_STORE_DEFAULT_PATH, FILESYSTEM_STORE_EXTENSION, FILESYSTEM_STORE_TEMP_SUFFIX,
};
use cart_domain::error::{Error, Result};
use cart_domain::ports::KeyValueStoreProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use tempfile::{Builder, NamedTempFile};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem key-value store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemKeyValueStoreConfig {
    /// Directory holding one file per key
    pub base_path: PathBuf,
}

impl Default for FilesystemKeyValueStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(FILESYSTEM_STORE_DEFAULT_PATH),
        }
    }
}

/// Filesystem-backed key-value store
#[derive(Debug, Clone)]
pub struct FilesystemKeyValueStore {
    config: FilesystemKeyValueStoreConfig,
}

impl FilesystemKeyValueStore {
    /// Create a store rooted at `base_path`
    ///
    /// The directory is created lazily on the first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self::with_config(FilesystemKeyValueStoreConfig {
            base_path: base_path.as_ref().to_path_buf(),
        })
    }

    /// Create a store from configuration
    pub fn with_config(config: FilesystemKeyValueStoreConfig) -> Self {
        Self { config }
    }

    /// Base directory of this store
    pub fn base_path(&self) -> &Path {
        &self.config.base_path
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self
            .config
            .base_path
            .join(format!("{key}.{FILESYSTEM_STORE_EXTENSION}")))
    }

    fn temp_file_for(&self, key: &str) -> Result<NamedTempFile> {
        let prefix = format!("{key}.{FILESYSTEM_STORE_EXTENSION}.");
        let suffix = format!(".{FILESYSTEM_STORE_TEMP_SUFFIX}");
        Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(&self.config.base_path)
            .map_err(|e| {
                Error::storage_with_source(
                    format!(
                        "Failed to create temporary file in {}",
                        self.config.base_path.display()
                    ),
                    e,
                )
            })
    }
}

/// Reject keys that would escape the base directory or name no file
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument("Storage key cannot be empty"));
    }
    if key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(Error::invalid_argument(format!(
            "Storage key '{key}' must not contain path components"
        )));
    }
    Ok(())
}

impl KeyValueStoreProvider for FilesystemKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to read {}", path.display()),
                e,
            )),
        }
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.config.base_path).map_err(|e| {
            Error::storage_with_source(
                format!(
                    "Failed to create store directory {}",
                    self.config.base_path.display()
                ),
                e,
            )
        })?;

        // Dropping the temp file on any early return deletes it
        let mut temp = self.temp_file_for(key)?;
        temp.write_all(data)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to write {}", temp.path().display()),
                    e,
                )
            })?;

        temp.persist(&path).map_err(|e| {
            Error::storage_with_source(
                format!("Failed to move value into place at {}", path.display()),
                e.error,
            )
        })?;

        debug!(key, bytes = data.len(), path = %path.display(), "Stored value on disk");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to delete {}", path.display()),
                e,
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
