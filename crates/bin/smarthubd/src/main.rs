//! # smarthubd: smarthub daemon
//!
//! Composition root that wires the factory, proxies, and hub together and
//! runs the fixed demonstration sequence.
//!
//! ## Responsibilities
//! - Load configuration (`smarthub.toml`, env vars)
//! - Install the `tracing` subscriber that prints the console transcript
//! - Build devices through the factory and wrap each in a proxy
//! - Register the raw devices with the hub
//! - Control devices through the proxies, add a schedule, fire the trigger
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use smarthub_adapter_virtual::{DeviceFactory, SmartDevice};
use smarthub_app::hub::NotificationHub;
use smarthub_app::ports::DeviceControl;
use smarthub_app::proxy::DeviceProxy;
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_target(false)
        .init();
    tracing::debug!(filter = %config.logging.filter, "configuration loaded");

    run()?;
    Ok(())
}

/// The demonstration sequence. An unknown device tag aborts it.
fn run() -> Result<(), SmartHubError> {
    let mut hub: NotificationHub<Arc<SmartDevice>> = NotificationHub::new();

    // Factory
    let light = Arc::new(DeviceFactory::create("light", DeviceId::new(1))?);
    let thermostat = Arc::new(DeviceFactory::create("thermostat", DeviceId::new(2))?);
    let door = Arc::new(DeviceFactory::create("door", DeviceId::new(3))?);

    // Proxies
    let light_proxy = DeviceProxy::new(light.as_ref());
    let thermostat_proxy = DeviceProxy::new(thermostat.as_ref());
    let door_proxy = DeviceProxy::new(door.as_ref());

    // The hub notifies the raw devices, not the proxies.
    hub.register(Arc::clone(&light));
    hub.register(Arc::clone(&thermostat));
    hub.register(Arc::clone(&door));

    hub.show_status(&[light_proxy, thermostat_proxy, door_proxy]);

    light_proxy.turn_on();
    thermostat_proxy.turn_on();
    door_proxy.turn_off();

    hub.add_schedule("Turn on Light at 6:00 AM");

    hub.evaluate_trigger("temperature", 76);

    Ok(())
}
