//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | KeyValueStoreProvider | Byte-oriented key-value persistence |

/// Key-value store provider port
pub mod key_value;

pub use key_value::KeyValueStoreProvider;
