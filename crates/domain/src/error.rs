//! Common error types used across the workspace.
//!
//! Each failure is a typed error converted into [`SmartHubError`] via
//! `#[from]`. Building a device from an unknown type tag is the only
//! failure path in the domain.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum SmartHubError {
    #[error("invalid device type")]
    InvalidDeviceType(#[from] InvalidDeviceTypeError),
}

/// A device type tag that does not name any known [`DeviceKind`](crate::device::DeviceKind).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device type {tag:?}")]
pub struct InvalidDeviceTypeError {
    pub tag: String,
}
