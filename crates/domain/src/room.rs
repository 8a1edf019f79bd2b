//! Room — a named space inside a building that owns devices.

use crate::error::{RoomDupError, ValidationError};
use crate::id::{BuildingId, RoomId};

/// A room inside a [`Building`](crate::building::Building).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub designation: String,
    pub building_id: BuildingId,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
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

    /// Copy this room under a new name and building.
    ///
    /// The copy is unassigned so the store hands out a fresh id when it is
    /// persisted. Every other attribute is kept.
    #[must_use]
    pub fn duplicate_as(&self, name: impl Into<String>, building_id: BuildingId) -> Self {
        Self {
            id: RoomId::UNASSIGNED,
            name: name.into(),
            building_id,
            ..self.clone()
        }
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    description: Option<String>,
    designation: Option<String>,
    building_id: Option<BuildingId>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    #[must_use]
    pub fn building_id(mut self, building_id: BuildingId) -> Self {
        self.building_id = Some(building_id);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomDupError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Room, RoomDupError> {
        let room = Room {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            designation: self.designation.unwrap_or_default(),
            building_id: self.building_id.unwrap_or_default(),
        };
        room.validate()?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_room_when_name_provided() {
        let room = Room::builder().name("1101").build().unwrap();
        assert_eq!(room.name, "1101");
        assert!(!room.id.is_assigned());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Room::builder().designation("production").build();
        assert!(matches!(
            result,
            Err(RoomDupError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_attributes_but_reset_id_when_duplicating() {
        let source = Room::builder()
            .id(RoomId::new(7))
            .name("1102")
            .description("Lecture hall")
            .designation("production")
            .building_id(BuildingId::new(1))
            .build()
            .unwrap();

        let copy = source.duplicate_as("1101", BuildingId::new(3));

        assert_eq!(copy.id, RoomId::UNASSIGNED);
        assert_eq!(copy.name, "1101");
        assert_eq!(copy.building_id, BuildingId::new(3));
        assert_eq!(copy.description, "Lecture hall");
        assert_eq!(copy.designation, "production");
        assert_eq!(source.name, "1102");
    }
}
