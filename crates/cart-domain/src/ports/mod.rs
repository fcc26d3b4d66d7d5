//! Domain Port Interfaces
//!
//! Contracts that the providers layer implements. The domain defines the
//! interface; providers supply in-memory, filesystem and no-op backends.

/// External service provider ports
pub mod providers;

pub use providers::KeyValueStoreProvider;
