//! # smarthub-app
//!
//! Application layer: capability **ports** (traits) and the components that
//! orchestrate devices through them.
//!
//! ## Responsibilities
//! - Define **port traits** that devices implement:
//!   - `DeviceControl`: turn on, turn off, report status
//!   - `NotificationSink`: receive a broadcast message
//! - Provide `DeviceProxy`, a pass-through wrapper that logs device access
//! - Provide `NotificationHub`, the registry that broadcasts messages,
//!   keeps schedules, and evaluates the threshold trigger
//!
//! ## Dependency rule
//! Depends on `smarthub-domain` only (plus `tracing` for narration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod hub;
pub mod ports;
pub mod proxy;
