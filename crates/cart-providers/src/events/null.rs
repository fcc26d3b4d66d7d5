//! Null Cart Event Publisher
//!
//! Testing stub implementation that discards all events.

use cart_domain::events::{CartEvent, CartEventPublisher};
use std::sync::Arc;

/// Null event publisher
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCartEventPublisher;

impl NullCartEventPublisher {
    /// Create a new null event publisher
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl CartEventPublisher for NullCartEventPublisher {
    fn publish(&self, _event: CartEvent) {}

    fn has_subscribers(&self) -> bool {
        false
    }
}
