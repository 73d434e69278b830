//! Device kinds and status snapshots.
//!
//! A device is identified by its [`DeviceKind`] and [`DeviceId`]. The kind
//! never changes after construction. Devices report their state as a
//! [`DeviceStatus`] whose `Display` form is the human-readable status line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidDeviceTypeError;
use crate::id::DeviceId;

/// The fixed set of device variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Thermostat,
    Door,
}

impl DeviceKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Thermostat, Self::Door];

    /// The lowercase type tag accepted by [`FromStr`].
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
            Self::Door => "door",
        }
    }

    /// Human-readable label used in log and status lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Thermostat => "Thermostat",
            Self::Door => "Door",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Case-insensitive lookup over the known tags.
impl FromStr for DeviceKind {
    type Err = InvalidDeviceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidDeviceTypeError { tag: s.to_string() })
    }
}

/// Snapshot of a device's variant-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceStatus {
    Light { id: DeviceId, on: bool },
    Thermostat { id: DeviceId, temperature: i32 },
    Door { id: DeviceId, locked: bool },
}

impl DeviceStatus {
    #[must_use]
    pub fn id(&self) -> DeviceId {
        match self {
            Self::Light { id, .. } | Self::Thermostat { id, .. } | Self::Door { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light { .. } => DeviceKind::Light,
            Self::Thermostat { .. } => DeviceKind::Thermostat,
            Self::Door { .. } => DeviceKind::Door,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light { id, on } => {
                write!(f, "Light {id} is {}", if *on { "ON" } else { "OFF" })
            }
            Self::Thermostat { id, temperature } => {
                write!(f, "Thermostat {id} is set to {temperature} degrees")
            }
            Self::Door { id, locked } => {
                write!(
                    f,
                    "Door {id} is {}",
                    if *locked { "Locked" } else { "Unlocked" }
                )
            }
        }
    }
}
