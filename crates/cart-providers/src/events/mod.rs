//! Cart Event Publisher Implementations
//!
//! | Publisher | Description |
//! |-----------|-------------|
//! | [`BroadcastCartEventPublisher`] | In-process fan-out over a tokio broadcast channel |
//! | [`NullCartEventPublisher`] | Discards every event |

#[cfg(feature = "events-broadcast")]
pub mod broadcast;
pub mod null;

#[cfg(feature = "events-broadcast")]
pub use broadcast::{BroadcastCartEventPublisher, CartEventStream};
pub use null::NullCartEventPublisher;
