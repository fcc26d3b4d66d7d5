//! Cart Event Publisher Domain Port
//!
//! Defines the contract for announcing cart state changes. The container
//! publishes through this trait without coupling to a specific transport
//! (tokio broadcast, no-op, etc.).

use crate::entities::CartEntry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State changes announced by the cart container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CartEvent {
    /// The entry list was rewritten by a mutation
    ItemsChanged {
        /// Entries after the mutation, in insertion order
        items: Vec<CartEntry>,
        /// Total number of units after the mutation
        quantity: u64,
    },
    /// The cart panel was opened or closed
    VisibilityChanged {
        /// New visibility flag
        is_open: bool,
    },
}

/// Domain Port for Publishing Cart Events
///
/// Publishing is synchronous and must never block the caller; delivery
/// guarantees depend on the implementation.
///
/// # Example
///
/// ```rust
/// use cart_domain::events::{CartEvent, CartEventPublisher};
///
/// fn announce_closed(publisher: &dyn CartEventPublisher) {
///     publisher.publish(CartEvent::VisibilityChanged { is_open: false });
/// }
/// ```
pub trait CartEventPublisher: Send + Sync {
    /// Publish an event to all current subscribers
    fn publish(&self, event: CartEvent);

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher for dependency injection
pub type SharedCartEventPublisher = Arc<dyn CartEventPublisher>;
