//! Device control port: on/off/status capability.

use std::sync::Arc;

use smarthub_domain::device::{DeviceKind, DeviceStatus};
use smarthub_domain::id::DeviceId;

/// Control surface shared by every device variant.
///
/// Methods take `&self`: implementations keep their state behind interior
/// mutability so a device can be controlled through a borrow while the hub
/// holds a shared handle to it.
pub trait DeviceControl {
    /// Identifier of the controlled device.
    fn id(&self) -> DeviceId;

    /// Variant of the controlled device. Never changes.
    fn kind(&self) -> DeviceKind;

    fn turn_on(&self);

    fn turn_off(&self);

    /// Snapshot of the current state.
    fn status(&self) -> DeviceStatus;
}

impl<T: DeviceControl + ?Sized> DeviceControl for &T {
    fn id(&self) -> DeviceId {
        (**self).id()
    }

    fn kind(&self) -> DeviceKind {
        (**self).kind()
    }

    fn turn_on(&self) {
        (**self).turn_on();
    }

    fn turn_off(&self) {
        (**self).turn_off();
    }

    fn status(&self) -> DeviceStatus {
        (**self).status()
    }
}

impl<T: DeviceControl + ?Sized> DeviceControl for Arc<T> {
    fn id(&self) -> DeviceId {
        (**self).id()
    }

    fn kind(&self) -> DeviceKind {
        (**self).kind()
    }

    fn turn_on(&self) {
        (**self).turn_on();
    }

    fn turn_off(&self) {
        (**self).turn_off();
    }

    fn status(&self) -> DeviceStatus {
        (**self).status()
    }
}
