//! Cart change events
//!
//! Explicit notification contract between the cart container and the
//! components that render it.

/// Cart event types and publisher port
pub mod cart_events;

pub use cart_events::{CartEvent, CartEventPublisher, SharedCartEventPublisher};
