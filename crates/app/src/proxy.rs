//! Device proxy: forwards control calls and logs every on/off access.
//!
//! The proxy borrows the device it wraps, so it can never outlive it and can
//! never be built without one. It performs no authorization: every call is
//! forwarded.

use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;

use crate::ports::DeviceControl;

/// Pass-through wrapper around a borrowed device.
#[derive(Debug)]
pub struct DeviceProxy<'a, D: ?Sized> {
    device: &'a D,
}

impl<D: ?Sized> Clone for DeviceProxy<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for DeviceProxy<'_, D> {}

impl<'a, D: DeviceControl + ?Sized> DeviceProxy<'a, D> {
    /// Wrap `device`.
    #[must_use]
    pub fn new(device: &'a D) -> Self {
        Self { device }
    }

    /// The wrapped device.
    #[must_use]
    pub fn inner(&self) -> &'a D {
        self.device
    }

    fn log_access(&self, operation: &'static str) {
        tracing::info!(
            device = %self.device.id(),
            kind = %self.device.kind(),
            operation,
            "Accessing device..."
        );
    }
}

impl<D: DeviceControl + ?Sized> DeviceControl for DeviceProxy<'_, D> {
    fn id(&self) -> DeviceId {
        self.device.id()
    }

    fn kind(&self) -> DeviceKind {
        self.device.kind()
    }

    fn turn_on(&self) {
        self.log_access("turn_on");
        self.device.turn_on();
    }

    fn turn_off(&self) {
        self.log_access("turn_off");
        self.device.turn_off();
    }

    fn status(&self) -> DeviceStatus {
        self.device.status()
    }
}
