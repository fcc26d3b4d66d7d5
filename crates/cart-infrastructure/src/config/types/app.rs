//! Main application configuration

use super::{EventsConfig, LoggingConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Root configuration of the cart
///
/// Every section falls back to its defaults, so an empty TOML file is a
/// valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Change notification settings
    #[serde(default)]
    pub events: EventsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
