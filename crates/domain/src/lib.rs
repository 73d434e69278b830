//! # smarthub-domain
//!
//! Pure domain model for the smarthub notification hub.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifiers, error conventions, timestamps
//! - Define **device kinds** (light, thermostat, door lock) and their tag lookup
//! - Define **status snapshots** reported by devices
//! - Define **notifications** (messages delivered by the hub) and **schedules**
//! - Define the **threshold trigger** rule evaluated by the hub
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Device capabilities are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod notification;
pub mod schedule;
pub mod trigger;
