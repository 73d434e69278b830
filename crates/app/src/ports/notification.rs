//! Notification port: receipt of hub broadcasts.

use std::sync::Arc;

/// Anything that can receive a broadcast text message.
pub trait NotificationSink {
    /// Deliver `message`. Called synchronously by the hub.
    fn receive_notification(&self, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn receive_notification(&self, message: &str) {
        (**self).receive_notification(message);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn receive_notification(&self, message: &str) {
        (**self).receive_notification(message);
    }
}
