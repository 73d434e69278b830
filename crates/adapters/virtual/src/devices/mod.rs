//! Device implementations: light, thermostat, door lock.
//!
//! Each device keeps its state behind a [`Mutex`](std::sync::Mutex) so it
//! can be controlled through a shared reference while the hub holds an
//! `Arc` to the same device.

mod door_lock;
mod inbox;
mod light;
mod thermostat;

pub use door_lock::DoorLock;
pub use light::Light;
pub use thermostat::{DEFAULT_TEMPERATURE, Thermostat};

use smarthub_app::ports::{DeviceControl, NotificationSink};
use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;
use smarthub_domain::notification::Notification;

/// Wrapper enum for the concrete device types.
///
/// Two devices are equal when they have the same kind and id.
#[derive(Debug, PartialEq)]
pub enum SmartDevice {
    Light(Light),
    Thermostat(Thermostat),
    Door(DoorLock),
}

impl SmartDevice {
    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Self::Light(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_thermostat(&self) -> Option<&Thermostat> {
        match self {
            Self::Thermostat(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_door_lock(&self) -> Option<&DoorLock> {
        match self {
            Self::Door(d) => Some(d),
            _ => None,
        }
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        match self {
            Self::Light(d) => d.notifications(),
            Self::Thermostat(d) => d.notifications(),
            Self::Door(d) => d.notifications(),
        }
    }
}

impl From<Light> for SmartDevice {
    fn from(device: Light) -> Self {
        Self::Light(device)
    }
}

impl From<Thermostat> for SmartDevice {
    fn from(device: Thermostat) -> Self {
        Self::Thermostat(device)
    }
}

impl From<DoorLock> for SmartDevice {
    fn from(device: DoorLock) -> Self {
        Self::Door(device)
    }
}

impl DeviceControl for SmartDevice {
    fn id(&self) -> DeviceId {
        match self {
            Self::Light(d) => d.id(),
            Self::Thermostat(d) => d.id(),
            Self::Door(d) => d.id(),
        }
    }

    fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(d) => d.kind(),
            Self::Thermostat(d) => d.kind(),
            Self::Door(d) => d.kind(),
        }
    }

    fn turn_on(&self) {
        match self {
            Self::Light(d) => d.turn_on(),
            Self::Thermostat(d) => d.turn_on(),
            Self::Door(d) => d.turn_on(),
        }
    }

    fn turn_off(&self) {
        match self {
            Self::Light(d) => d.turn_off(),
            Self::Thermostat(d) => d.turn_off(),
            Self::Door(d) => d.turn_off(),
        }
    }

    fn status(&self) -> DeviceStatus {
        match self {
            Self::Light(d) => d.status(),
            Self::Thermostat(d) => d.status(),
            Self::Door(d) => d.status(),
        }
    }
}

impl NotificationSink for SmartDevice {
    fn receive_notification(&self, message: &str) {
        match self {
            Self::Light(d) => d.receive_notification(message),
            Self::Thermostat(d) => d.receive_notification(message),
            Self::Door(d) => d.receive_notification(message),
        }
    }
}
