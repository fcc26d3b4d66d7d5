//! Structured logging with tracing
//!
//! Configures the global tracing subscriber with a level filter and a stdout
//! layer, plus a daily rolling file layer when a log file is configured. Both
//! layers share the plain or JSON format setting.

use crate::constants::{LOG_FILE_PREFIX, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use cart_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// `CART_LOG`, when set, overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers = vec![stdout_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        let appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(LOG_FILE_PREFIX)),
        );
        layers.push(file_layer(appender, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .config_context("Failed to install log subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(appender: RollingFileAppender, json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
