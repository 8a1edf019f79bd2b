//! Device — a piece of equipment installed in a room.

use crate::error::{RoomDupError, ValidationError};
use crate::id::{BuildingId, DeviceId, RoomId};

/// Address given to devices whose address is unknown or not resolved.
pub const UNRESOLVED_ADDRESS: &str = "0.0.0.0";

/// A device that belongs to exactly one [`Room`](crate::room::Room).
///
/// Roles and power states are opaque labels copied verbatim when a room is
/// duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub display_name: String,
    pub address: String,
    pub device_type: String,
    pub device_class: String,
    pub input: bool,
    pub output: bool,
    pub building_id: BuildingId,
    pub room_id: RoomId,
    pub roles: Vec<String>,
    pub power_states: Vec<String>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDupError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), RoomDupError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Copy this device into another room with the given address.
    ///
    /// The copy is unassigned; roles, power states and the remaining
    /// attributes are kept as they are.
    #[must_use]
    pub fn duplicate_into(
        &self,
        building_id: BuildingId,
        room_id: RoomId,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: DeviceId::UNASSIGNED,
            address: address.into(),
            building_id,
            room_id,
            ..self.clone()
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    display_name: Option<String>,
    address: Option<String>,
    device_type: Option<String>,
    device_class: Option<String>,
    input: bool,
    output: bool,
    building_id: Option<BuildingId>,
    room_id: Option<RoomId>,
    roles: Vec<String>,
    power_states: Vec<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    #[must_use]
    pub fn device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }

    #[must_use]
    pub fn input(mut self, input: bool) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn output(mut self, output: bool) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn building_id(mut self, building_id: BuildingId) -> Self {
        self.building_id = Some(building_id);
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    #[must_use]
    pub fn power_state(mut self, power_state: impl Into<String>) -> Self {
        self.power_states.push(power_state.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// The display name falls back to the name and the address to
    /// [`UNRESOLVED_ADDRESS`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomDupError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Device, RoomDupError> {
        let name = self.name.unwrap_or_default();
        let device = Device {
            id: self.id.unwrap_or_default(),
            display_name: self.display_name.unwrap_or_else(|| name.clone()),
            name,
            address: self
                .address
                .unwrap_or_else(|| UNRESOLVED_ADDRESS.to_string()),
            device_type: self.device_type.unwrap_or_default(),
            device_class: self.device_class.unwrap_or_default(),
            input: self.input,
            output: self.output,
            building_id: self.building_id.unwrap_or_default(),
            room_id: self.room_id.unwrap_or_default(),
            roles: self.roles,
            power_states: self.power_states,
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_display_name_and_address() {
        let device = Device::builder().name("D1").build().unwrap();
        assert_eq!(device.display_name, "D1");
        assert_eq!(device.address, UNRESOLVED_ADDRESS);
    }

    #[test]
    fn should_reject_device_without_name() {
        let result = Device::builder().device_type("pulse-eight").build();
        assert!(matches!(
            result,
            Err(RoomDupError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_roles_and_power_states_when_duplicating() {
        let source = Device::builder()
            .id(DeviceId::new(5))
            .name("D1")
            .address("ITB-1102-D1.byu.edu")
            .device_type("sony-xbr")
            .output(true)
            .room_id(RoomId::new(2))
            .role("VideoOut")
            .role("AudioOut")
            .power_state("On")
            .power_state("Standby")
            .build()
            .unwrap();

        let copy = source.duplicate_into(BuildingId::new(1), RoomId::new(9), UNRESOLVED_ADDRESS);

        assert_eq!(copy.id, DeviceId::UNASSIGNED);
        assert_eq!(copy.room_id, RoomId::new(9));
        assert_eq!(copy.building_id, BuildingId::new(1));
        assert_eq!(copy.address, UNRESOLVED_ADDRESS);
        assert_eq!(copy.roles, vec!["VideoOut", "AudioOut"]);
        assert_eq!(copy.power_states, vec!["On", "Standby"]);
        assert!(copy.output);
        assert!(!copy.input);
    }
}
