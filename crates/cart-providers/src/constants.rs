//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `cart_domain::constants`.

// ============================================================================
// FILESYSTEM STORE CONSTANTS
// ============================================================================

/// File extension for values written by the filesystem store
pub const FILESYSTEM_STORE_EXTENSION: &str = "json";

/// Suffix of the temporary file a value is written to before being renamed
pub const FILESYSTEM_STORE_TEMP_SUFFIX: &str = "tmp";

/// Default base directory of the filesystem store
pub const FILESYSTEM_STORE_DEFAULT_PATH: &str = "./data/cart";

// ============================================================================
// EVENT PUBLISHER CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 64;
