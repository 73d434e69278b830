//! Device factory: builds a [`SmartDevice`] from a type tag.

use smarthub_domain::device::DeviceKind;
use smarthub_domain::error::SmartHubError;
use smarthub_domain::id::DeviceId;

use crate::devices::{DoorLock, Light, SmartDevice, Thermostat};

/// Builds devices in their default state.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceFactory;

impl DeviceFactory {
    /// Build a device from a case-insensitive type tag
    /// (`light`, `thermostat`, or `door`).
    ///
    /// # Errors
    ///
    /// Returns [`SmartHubError::InvalidDeviceType`] when `tag` names no known kind.
    pub fn create(tag: &str, id: DeviceId) -> Result<SmartDevice, SmartHubError> {
        let kind: DeviceKind = tag.parse()?;
        Ok(Self::build(kind, id))
    }

    /// Build a device of the given kind.
    #[must_use]
    pub fn build(kind: DeviceKind, id: DeviceId) -> SmartDevice {
        tracing::debug!(%kind, %id, "creating device");
        match kind {
            DeviceKind::Light => Light::new(id).into(),
            DeviceKind::Thermostat => Thermostat::new(id).into(),
            DeviceKind::Door => DoorLock::new(id).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthub_app::ports::DeviceControl;

    #[test]
    fn should_create_light_switched_off() {
        let device = DeviceFactory::create("light", DeviceId::new(1)).unwrap();
        assert_eq!(device.kind(), DeviceKind::Light);
        assert_eq!(device.status().to_string(), "Light 1 is OFF");
    }

    #[test]
    fn should_create_thermostat_at_22_degrees() {
        let device = DeviceFactory::create("thermostat", DeviceId::new(2)).unwrap();
        assert_eq!(device.kind(), DeviceKind::Thermostat);
        assert_eq!(
            device.status().to_string(),
            "Thermostat 2 is set to 22 degrees"
        );
    }

    #[test]
    fn should_create_door_locked() {
        let device = DeviceFactory::create("door", DeviceId::new(3)).unwrap();
        assert_eq!(device.kind(), DeviceKind::Door);
        assert_eq!(device.status().to_string(), "Door 3 is Locked");
    }

    #[test]
    fn should_match_tags_case_insensitively() {
        for (tag, kind) in [
            ("LIGHT", DeviceKind::Light),
            ("Thermostat", DeviceKind::Thermostat),
            ("dOOr", DeviceKind::Door),
        ] {
            let device = DeviceFactory::create(tag, DeviceId::new(7)).unwrap();
            assert_eq!(device.kind(), kind);
            assert_eq!(device.id(), DeviceId::new(7));
        }
    }

    #[test]
    fn should_reject_invalid_tag() {
        let result = DeviceFactory::create("invalid", DeviceId::new(1));
        assert!(matches!(result, Err(SmartHubError::InvalidDeviceType(_))));
    }

    #[test]
    fn should_carry_rejected_tag_in_error() {
        let Err(SmartHubError::InvalidDeviceType(err)) =
            DeviceFactory::create("toaster", DeviceId::new(1))
        else {
            panic!("expected invalid device type");
        };
        assert_eq!(err.tag, "toaster");
    }

    #[test]
    fn should_reject_empty_tag() {
        assert!(DeviceFactory::create("", DeviceId::new(1)).is_err());
    }

    #[test]
    fn should_build_every_kind() {
        for kind in DeviceKind::ALL {
            let device = DeviceFactory::build(kind, DeviceId::new(1));
            assert_eq!(device.kind(), kind);
        }
    }
}
