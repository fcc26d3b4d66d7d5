//! Tokio Broadcast Cart Event Publisher
//!
//! Fans cart events out to every subscriber through a tokio broadcast
//! channel. Publishing is a non-blocking send, so the cart can call it from
//! synchronous code; subscribers consume from async tasks.
//!
//! ## Example
//!
//! ```ignore
//! use cart_providers::events::BroadcastCartEventPublisher;
//!
//! let events = BroadcastCartEventPublisher::new();
//! let mut rx = events.subscribe();
//!
//! // hand `events` to the cart, then:
//! while let Ok(event) = rx.recv().await { /* re-render */ }
//! ```

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use cart_domain::events::{CartEvent, CartEventPublisher};
use futures::Stream;
use futures::stream;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Boxed stream of cart events
pub type CartEventStream = Pin<Box<dyn Stream<Item = CartEvent> + Send>>;

/// Event publisher backed by a tokio broadcast channel
///
/// When a subscriber falls more than `capacity` events behind, the oldest
/// events are dropped for that subscriber.
#[derive(Clone)]
pub struct BroadcastCartEventPublisher {
    sender: Arc<broadcast::Sender<CartEvent>>,
    capacity: usize,
}

impl BroadcastCartEventPublisher {
    /// Create a publisher with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration validation rejects that
    /// value before it reaches here.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.sender.subscribe()
    }

    /// Subscribe as a `Stream`, skipping over lag notifications
    pub fn subscribe_stream(&self) -> CartEventStream {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Cart event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }
}

impl Default for BroadcastCartEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastCartEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastCartEventPublisher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl CartEventPublisher for BroadcastCartEventPublisher {
    fn publish(&self, event: CartEvent) {
        match self.sender.send(event) {
            Ok(count) => debug!("Published cart event to {} subscribers", count),
            Err(_) => debug!("Published cart event but no subscribers"),
        }
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
