//! Port — a connection between two devices, owned by a host device.

use crate::id::{DeviceId, PortId};
use crate::mapping::DeviceIdMapping;

/// A port configuration: which device feeds which other device through a
/// named port on the host device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub host_device_id: DeviceId,
    pub source_device_id: DeviceId,
    pub destination_device_id: DeviceId,
}

impl Port {
    /// Rebuild this port for a duplicated host device.
    ///
    /// The host becomes `new_host`. Source and destination are translated
    /// through `mapping`; a device outside the mapping resolves to
    /// [`DeviceId::UNASSIGNED`] instead of keeping its original id.
    #[must_use]
    pub fn remapped(&self, new_host: DeviceId, mapping: &DeviceIdMapping) -> Self {
        Self {
            id: PortId::UNASSIGNED,
            name: self.name.clone(),
            host_device_id: new_host,
            source_device_id: mapping.resolve(self.source_device_id),
            destination_device_id: mapping.resolve(self.destination_device_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(host: i64, source: i64, destination: i64) -> Port {
        Port {
            id: PortId::new(77),
            name: "HDMIIn1".to_string(),
            host_device_id: DeviceId::new(host),
            source_device_id: DeviceId::new(source),
            destination_device_id: DeviceId::new(destination),
        }
    }

    #[test]
    fn should_zero_references_outside_the_mapping() {
        let mut mapping = DeviceIdMapping::default();
        mapping.insert(DeviceId::new(5), DeviceId::new(42));

        let remapped = port(5, 5, 9).remapped(DeviceId::new(42), &mapping);

        assert_eq!(remapped.host_device_id, DeviceId::new(42));
        assert_eq!(remapped.source_device_id, DeviceId::new(42));
        assert_eq!(remapped.destination_device_id, DeviceId::UNASSIGNED);
    }

    #[test]
    fn should_translate_every_reference_when_all_are_mapped() {
        let mut mapping = DeviceIdMapping::default();
        mapping.insert(DeviceId::new(1), DeviceId::new(11));
        mapping.insert(DeviceId::new(2), DeviceId::new(12));
        mapping.insert(DeviceId::new(3), DeviceId::new(13));

        let remapped = port(1, 2, 3).remapped(DeviceId::new(11), &mapping);

        assert_eq!(remapped.host_device_id, DeviceId::new(11));
        assert_eq!(remapped.source_device_id, DeviceId::new(12));
        assert_eq!(remapped.destination_device_id, DeviceId::new(13));
    }

    #[test]
    fn should_keep_name_and_reset_row_id() {
        let remapped = port(1, 1, 1).remapped(DeviceId::new(2), &DeviceIdMapping::default());
        assert_eq!(remapped.name, "HDMIIn1");
        assert_eq!(remapped.id, PortId::UNASSIGNED);
    }
}
