//! Threshold trigger: the hub's single automation rule.

use serde::{Deserialize, Serialize};

/// Metric watched by the default rule.
pub const TEMPERATURE_METRIC: &str = "temperature";
/// Value the metric must exceed for the default rule to fire.
pub const TEMPERATURE_THRESHOLD: i64 = 75;
/// Message broadcast when the default rule fires.
pub const TURN_OFF_LIGHTS_MESSAGE: &str = "Trigger: Turn off lights";

/// Fires when a named metric is strictly above a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTrigger {
    pub metric: String,
    pub threshold: i64,
    pub message: String,
}

impl Default for ThresholdTrigger {
    fn default() -> Self {
        Self {
            metric: TEMPERATURE_METRIC.to_string(),
            threshold: TEMPERATURE_THRESHOLD,
            message: TURN_OFF_LIGHTS_MESSAGE.to_string(),
        }
    }
}

impl ThresholdTrigger {
    /// Check whether a metric reading activates this rule.
    ///
    /// The metric name must match exactly (case-sensitive).
    #[must_use]
    pub fn matches(&self, metric: &str, value: i64) -> bool {
        metric == self.metric && value > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_when_temperature_above_threshold() {
        assert!(ThresholdTrigger::default().matches("temperature", 76));
    }

    #[test]
    fn should_not_match_when_temperature_equals_threshold() {
        assert!(!ThresholdTrigger::default().matches("temperature", 75));
    }

    #[test]
    fn should_not_match_when_temperature_below_threshold() {
        assert!(!ThresholdTrigger::default().matches("temperature", 70));
    }

    #[test]
    fn should_not_match_other_metric() {
        assert!(!ThresholdTrigger::default().matches("humidity", 90));
    }

    #[test]
    fn should_not_match_metric_with_different_case() {
        assert!(!ThresholdTrigger::default().matches("Temperature", 90));
    }

    #[test]
    fn should_use_turn_off_lights_message_by_default() {
        assert_eq!(
            ThresholdTrigger::default().message,
            "Trigger: Turn off lights"
        );
    }
}
