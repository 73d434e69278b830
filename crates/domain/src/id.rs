//! Typed identifier newtype for devices.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a device, unique per [`DeviceKind`](crate::device::DeviceKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Access the inner value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DeviceId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_value() {
        assert_eq!(DeviceId::new(42).to_string(), "42");
    }

    #[test]
    fn should_parse_from_decimal_string() {
        let id: DeviceId = "7".parse().unwrap();
        assert_eq!(id, DeviceId::new(7));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric() {
        assert!(DeviceId::from_str("seven").is_err());
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&DeviceId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_convert_from_u32() {
        let id: DeviceId = 9.into();
        assert_eq!(id.get(), 9);
    }
}
