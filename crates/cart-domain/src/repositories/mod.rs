//! Repository Interfaces

/// Cart persistence port
pub mod cart_repository;

pub use cart_repository::CartRepository;
