//! # smarthub-adapter-virtual
//!
//! In-memory devices and the factory that builds them from a type tag.
//!
//! ## Provided devices
//!
//! | Tag | Device | Default state | `turn_on` / `turn_off` |
//! |-----|--------|---------------|------------------------|
//! | `light` | [`Light`] | off | switch on / off |
//! | `thermostat` | [`Thermostat`] | 22 degrees | log activation only |
//! | `door` | [`DoorLock`] | locked | unlock / lock |
//!
//! Tags are matched case-insensitively by [`DeviceFactory::create`].
//!
//! ## Dependency rule
//!
//! Depends on `smarthub-app` (port traits) and `smarthub-domain` only.

pub mod devices;
pub mod factory;

pub use devices::{DoorLock, Light, SmartDevice, Thermostat};
pub use factory::DeviceFactory;
