//! Light: switches on and off.

use std::sync::{Mutex, PoisonError};

use smarthub_app::ports::{DeviceControl, NotificationSink};
use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;
use smarthub_domain::notification::Notification;

use super::inbox::Inbox;

/// A light that is either on or off. Starts off.
#[derive(Debug)]
pub struct Light {
    id: DeviceId,
    on: Mutex<bool>,
    inbox: Inbox,
}

impl Light {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            on: Mutex::new(false),
            inbox: Inbox::default(),
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        *self.on.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox.snapshot()
    }

    fn set_on(&self, on: bool) {
        *self.on.lock().unwrap_or_else(PoisonError::into_inner) = on;
    }
}

impl DeviceControl for Light {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn turn_on(&self) {
        self.set_on(true);
        tracing::info!("Light {} is turned ON", self.id);
    }

    fn turn_off(&self) {
        self.set_on(false);
        tracing::info!("Light {} is turned OFF", self.id);
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus::Light {
            id: self.id,
            on: self.is_on(),
        }
    }
}

impl NotificationSink for Light {
    fn receive_notification(&self, message: &str) {
        tracing::info!("Light {} received update: {message}", self.id);
        self.inbox.push(message);
    }
}

/// Lights are equal when they share an id.
impl PartialEq for Light {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        let light = Light::new(DeviceId::new(1));
        assert!(!light.is_on());
        assert_eq!(light.status().to_string(), "Light 1 is OFF");
    }

    #[test]
    fn should_turn_on() {
        let light = Light::new(DeviceId::new(1));
        light.turn_on();
        assert!(light.is_on());
        assert_eq!(light.status().to_string(), "Light 1 is ON");
    }

    #[test]
    fn should_turn_off_after_on() {
        let light = Light::new(DeviceId::new(1));
        light.turn_on();
        light.turn_off();
        assert_eq!(light.status().to_string(), "Light 1 is OFF");
    }

    #[test]
    fn should_record_received_notifications() {
        let light = Light::new(DeviceId::new(1));
        light.receive_notification("Trigger: Turn off lights");
        let received = light.notifications();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].message, "Trigger: Turn off lights");
    }

    #[test]
    fn should_not_change_state_on_notification() {
        let light = Light::new(DeviceId::new(1));
        light.turn_on();
        light.receive_notification("Trigger: Turn off lights");
        assert!(light.is_on());
    }

    #[test]
    fn should_compare_by_id() {
        let a = Light::new(DeviceId::new(1));
        let b = Light::new(DeviceId::new(1));
        b.turn_on();
        assert_eq!(a, b);
        assert_ne!(a, Light::new(DeviceId::new(2)));
    }
}
