//! Infrastructure layer constants
//!
//! Contains defaults used by configuration and logging. Domain-specific
//! constants are defined in `cart_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cart.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cart";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CART";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default base directory of the filesystem cart store
pub const DEFAULT_STORAGE_PATH: &str = "./data/cart";

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Default capacity of the cart event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "CART_LOG";

/// Default file name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "cart";
