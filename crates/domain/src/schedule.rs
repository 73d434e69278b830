//! Schedule: a free-text reminder kept by the hub for display only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};

/// A human-readable schedule entry. Nothing acts on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub description: String,
    pub added_at: Timestamp,
}

impl Schedule {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            added_at: now(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
