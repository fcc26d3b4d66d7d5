//! Configuration types module

pub mod app;
pub mod events;
pub mod logging;
pub mod storage;

// Re-export main types
pub use app::AppConfig;
pub use events::EventsConfig;
pub use logging::LoggingConfig;
pub use storage::{StorageConfig, StorageProviderKind};
