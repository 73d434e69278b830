//! Notification: a broadcast message as received by a device.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};

/// A message delivered to a device, stamped with its arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub received_at: Timestamp,
}

impl Notification {
    /// Stamp `message` with the current time.
    #[must_use]
    pub fn received(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            received_at: now(),
        }
    }
}
