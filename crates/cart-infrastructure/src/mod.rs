//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers: configuration, logging, error context and the wiring that turns a
//! configuration into a ready cart.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration defaults |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`bootstrap`] | Builds store, repository, publisher and cart |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{CartComponents, build_cart, create_store};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
