//! Thermostat: holds a target temperature; on/off only narrate.

use std::sync::{Mutex, PoisonError};

use smarthub_app::ports::{DeviceControl, NotificationSink};
use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;
use smarthub_domain::notification::Notification;

use super::inbox::Inbox;

/// Temperature, in degrees, of a freshly built thermostat.
pub const DEFAULT_TEMPERATURE: i32 = 22;

/// A thermostat set to an integer temperature.
///
/// `turn_on` / `turn_off` leave the temperature untouched; only
/// [`set_temperature`](Self::set_temperature) changes it.
#[derive(Debug)]
pub struct Thermostat {
    id: DeviceId,
    temperature: Mutex<i32>,
    inbox: Inbox,
}

impl Thermostat {
    /// Build a thermostat at [`DEFAULT_TEMPERATURE`].
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self::with_temperature(id, DEFAULT_TEMPERATURE)
    }

    #[must_use]
    pub fn with_temperature(id: DeviceId, temperature: i32) -> Self {
        Self {
            id,
            temperature: Mutex::new(temperature),
            inbox: Inbox::default(),
        }
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        *self
            .temperature
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_temperature(&self, temperature: i32) {
        *self
            .temperature
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = temperature;
        tracing::info!("Thermostat {} is set to {temperature} degrees", self.id);
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox.snapshot()
    }
}

impl DeviceControl for Thermostat {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Thermostat
    }

    fn turn_on(&self) {
        tracing::info!("Thermostat {} is active.", self.id);
    }

    fn turn_off(&self) {
        tracing::info!("Thermostat {} is off.", self.id);
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus::Thermostat {
            id: self.id,
            temperature: self.temperature(),
        }
    }
}

impl NotificationSink for Thermostat {
    fn receive_notification(&self, message: &str) {
        tracing::info!("Thermostat {} received update: {message}", self.id);
        self.inbox.push(message);
    }
}

/// Thermostats are equal when they share an id.
impl PartialEq for Thermostat {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_22_degrees() {
        let thermostat = Thermostat::new(DeviceId::new(2));
        assert_eq!(thermostat.temperature(), 22);
        assert_eq!(
            thermostat.status().to_string(),
            "Thermostat 2 is set to 22 degrees"
        );
    }

    #[test]
    fn should_set_temperature() {
        let thermostat = Thermostat::new(DeviceId::new(2));
        thermostat.set_temperature(18);
        assert_eq!(
            thermostat.status().to_string(),
            "Thermostat 2 is set to 18 degrees"
        );
    }

    #[test]
    fn should_keep_temperature_when_turned_on_or_off() {
        let thermostat = Thermostat::with_temperature(DeviceId::new(2), 25);
        thermostat.turn_on();
        assert_eq!(thermostat.temperature(), 25);
        thermostat.turn_off();
        assert_eq!(thermostat.temperature(), 25);
    }

    #[test]
    fn should_record_received_notifications() {
        let thermostat = Thermostat::new(DeviceId::new(2));
        thermostat.receive_notification("a");
        thermostat.receive_notification("b");
        let messages: Vec<_> = thermostat
            .notifications()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
