//! Cart Repository Adapters
//!
//! Implementations of the `CartRepository` persistence port.

pub mod key_value;

pub use key_value::KeyValueCartRepository;
