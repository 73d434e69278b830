//! Notification hub: device registry, broadcast, schedules, and trigger rule.
//!
//! The hub delivers messages synchronously, in registration order, to every
//! registered sink. It never inspects device state directly; statuses are
//! read only through [`DeviceControl::status`].

use smarthub_domain::device::DeviceStatus;
use smarthub_domain::schedule::Schedule;
use smarthub_domain::trigger::ThresholdTrigger;

use crate::ports::{DeviceControl, NotificationSink};

/// Ordered registry of notification sinks plus schedules and one trigger rule.
///
/// Duplicates are allowed: a sink registered twice receives every broadcast
/// twice.
#[derive(Debug)]
pub struct NotificationHub<S> {
    devices: Vec<S>,
    schedules: Vec<Schedule>,
    trigger: ThresholdTrigger,
}

impl<S> Default for NotificationHub<S> {
    fn default() -> Self {
        Self::with_trigger(ThresholdTrigger::default())
    }
}

impl<S> NotificationHub<S> {
    /// Create an empty hub with the default temperature rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty hub evaluating `trigger`.
    #[must_use]
    pub fn with_trigger(trigger: ThresholdTrigger) -> Self {
        Self {
            devices: Vec::new(),
            schedules: Vec::new(),
            trigger,
        }
    }

    /// Number of registrations (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Registered sinks, in notification order.
    #[must_use]
    pub fn devices(&self) -> &[S] {
        &self.devices
    }

    #[must_use]
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    #[must_use]
    pub fn trigger(&self) -> &ThresholdTrigger {
        &self.trigger
    }

    /// Append `device` to the registry.
    pub fn register(&mut self, device: S) {
        self.devices.push(device);
        tracing::debug!(registered = self.devices.len(), "device registered");
    }

    /// Remove the first registration equal to `device`.
    ///
    /// Returns `false` (and does nothing) when `device` is not registered.
    pub fn unregister(&mut self, device: &S) -> bool
    where
        S: PartialEq,
    {
        let Some(index) = self.devices.iter().position(|d| d == device) else {
            tracing::debug!("device not registered, nothing to remove");
            return false;
        };
        self.devices.remove(index);
        tracing::debug!(registered = self.devices.len(), "device unregistered");
        true
    }

    /// Append a display-only schedule entry.
    pub fn add_schedule(&mut self, description: impl Into<String>) -> &Schedule {
        let schedule = Schedule::new(description);
        tracing::info!("Schedule added: {schedule}");
        self.schedules.push(schedule);
        &self.schedules[self.schedules.len() - 1]
    }

    /// Log the status line of each device, in order, and return the snapshots.
    pub fn show_status<D: DeviceControl>(&self, devices: &[D]) -> Vec<DeviceStatus> {
        devices
            .iter()
            .map(|device| {
                let status = device.status();
                tracing::info!("{status}");
                status
            })
            .collect()
    }
}

impl<S: NotificationSink> NotificationHub<S> {
    /// Deliver `message` to every registered sink, in registration order.
    ///
    /// Returns the number of deliveries made.
    pub fn broadcast(&self, message: &str) -> usize {
        tracing::debug!(
            message,
            recipients = self.devices.len(),
            "broadcasting notification"
        );
        for device in &self.devices {
            device.receive_notification(message);
        }
        self.devices.len()
    }

    /// Broadcast the trigger message if `metric` / `value` activates the rule.
    ///
    /// Returns whether the rule fired.
    pub fn evaluate_trigger(&self, metric: &str, value: i64) -> bool {
        if !self.trigger.matches(metric, value) {
            tracing::debug!(metric, value, "trigger not activated");
            return false;
        }
        tracing::info!(
            metric,
            value,
            threshold = self.trigger.threshold,
            "trigger activated"
        );
        self.broadcast(&self.trigger.message);
        true
    }
}
