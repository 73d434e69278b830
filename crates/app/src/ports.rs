//! Port definitions: capability traits that devices implement.
//!
//! Ports are defined here (in `app`) so that both the hub and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod control;
pub mod notification;

pub use control::DeviceControl;
pub use notification::NotificationSink;
