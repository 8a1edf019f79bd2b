//! Room label — the `Building-Room` composite key used on the command line
//! and as the UI configuration directory name.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const SEPARATOR: char = '-';

/// A parsed `Building-Room` label such as `ITB-1101`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomLabel {
    building: String,
    room: String,
}

impl RoomLabel {
    /// Short name of the building.
    #[must_use]
    pub fn building(&self) -> &str {
        &self.building
    }

    /// Name of the room inside the building.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Host name a device of this room is registered under in DNS.
    #[must_use]
    pub fn device_hostname(&self, device_name: &str) -> String {
        format!("{self}{SEPARATOR}{device_name}")
    }
}

impl FromStr for RoomLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRoomLabel {
            label: s.to_string(),
        };
        let mut parts = s.split(SEPARATOR);
        let (Some(building), Some(room), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        if building.is_empty() || room.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            building: building.to_string(),
            room: room.to_string(),
        })
    }
}

impl fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.building, self.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_building_and_room() {
        let label: RoomLabel = "ITB-1101".parse().unwrap();
        assert_eq!(label.building(), "ITB");
        assert_eq!(label.room(), "1101");
        assert_eq!(label.to_string(), "ITB-1101");
    }

    #[test]
    fn should_reject_label_without_separator() {
        let result = RoomLabel::from_str("ITB1101");
        assert_eq!(
            result,
            Err(ValidationError::InvalidRoomLabel {
                label: "ITB1101".to_string()
            })
        );
    }

    #[test]
    fn should_reject_label_with_extra_components() {
        assert!(RoomLabel::from_str("ITB-1101-D1").is_err());
    }

    #[test]
    fn should_reject_empty_components() {
        assert!(RoomLabel::from_str("-1101").is_err());
        assert!(RoomLabel::from_str("ITB-").is_err());
        assert!(RoomLabel::from_str("").is_err());
    }

    #[test]
    fn should_build_device_hostname() {
        let label: RoomLabel = "ITB-1101".parse().unwrap();
        assert_eq!(label.device_hostname("CP1"), "ITB-1101-CP1");
    }
}
