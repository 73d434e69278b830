//! Door lock: `turn_on` unlocks, `turn_off` locks.

use std::sync::{Mutex, PoisonError};

use smarthub_app::ports::{DeviceControl, NotificationSink};
use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;
use smarthub_domain::notification::Notification;

use super::inbox::Inbox;

/// A door lock. Starts locked.
#[derive(Debug)]
pub struct DoorLock {
    id: DeviceId,
    locked: Mutex<bool>,
    inbox: Inbox,
}

impl DoorLock {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            locked: Mutex::new(true),
            inbox: Inbox::default(),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self.locked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock(&self) {
        self.set_locked(true);
        tracing::info!("Door {} is locked", self.id);
    }

    pub fn unlock(&self) {
        self.set_locked(false);
        tracing::info!("Door {} is unlocked", self.id);
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox.snapshot()
    }

    fn set_locked(&self, locked: bool) {
        *self.locked.lock().unwrap_or_else(PoisonError::into_inner) = locked;
    }
}

impl DeviceControl for DoorLock {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Door
    }

    fn turn_on(&self) {
        self.unlock();
    }

    fn turn_off(&self) {
        self.lock();
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus::Door {
            id: self.id,
            locked: self.is_locked(),
        }
    }
}

impl NotificationSink for DoorLock {
    fn receive_notification(&self, message: &str) {
        tracing::info!("Door {} received update: {message}", self.id);
        self.inbox.push(message);
    }
}

/// Door locks are equal when they share an id.
impl PartialEq for DoorLock {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_locked() {
        let door = DoorLock::new(DeviceId::new(3));
        assert!(door.is_locked());
        assert_eq!(door.status().to_string(), "Door 3 is Locked");
    }

    #[test]
    fn should_unlock_when_turned_on() {
        let door = DoorLock::new(DeviceId::new(3));
        door.turn_on();
        assert_eq!(door.status().to_string(), "Door 3 is Unlocked");
    }

    #[test]
    fn should_lock_when_turned_off() {
        let door = DoorLock::new(DeviceId::new(3));
        door.turn_on();
        door.turn_off();
        assert_eq!(door.status().to_string(), "Door 3 is Locked");
    }

    #[test]
    fn should_be_idempotent_under_repeated_calls() {
        let door = DoorLock::new(DeviceId::new(3));
        door.turn_on();
        door.turn_on();
        assert!(!door.is_locked());
        door.turn_off();
        door.turn_off();
        assert!(door.is_locked());
    }

    #[test]
    fn should_alias_lock_and_unlock() {
        let door = DoorLock::new(DeviceId::new(3));
        door.unlock();
        assert!(!door.is_locked());
        door.lock();
        assert!(door.is_locked());
    }
}
