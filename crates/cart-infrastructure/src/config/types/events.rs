//! Event publisher configuration types

use crate::constants::DEFAULT_EVENT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Cart event channel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Events buffered per subscriber before the oldest are dropped
    pub capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
