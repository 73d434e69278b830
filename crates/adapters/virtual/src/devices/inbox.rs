//! Received-notification log shared by every device variant.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthub_domain::notification::Notification;

/// Notifications in arrival order.
#[derive(Debug, Default)]
pub(crate) struct Inbox {
    received: Mutex<Vec<Notification>>,
}

impl Inbox {
    pub(crate) fn push(&self, message: &str) {
        self.lock().push(Notification::received(message));
    }

    pub(crate) fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
