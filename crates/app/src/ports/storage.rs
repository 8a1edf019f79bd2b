//! Storage port — repository traits for the configuration store.
//!
//! Method names are distinct across traits so a single store type can
//! implement all of them without ambiguity at call sites.

use std::future::Future;

use roomdup_domain::building::Building;
use roomdup_domain::device::Device;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::{DeviceId, RoomId};
use roomdup_domain::port::Port;
use roomdup_domain::room::Room;

/// Read access to [`Building`]s.
pub trait BuildingRepository {
    /// Find a building by its short name (e.g. `ITB`).
    fn find_building_by_shortname(
        &self,
        shortname: &str,
    ) -> impl Future<Output = Result<Option<Building>, RoomDupError>> + Send;
}

/// Persistence for [`Room`]s.
pub trait RoomRepository {
    /// Find a room by building short name and room name.
    fn find_room(
        &self,
        building: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Room>, RoomDupError>> + Send;

    /// Insert a room, returning it with the id assigned by the store.
    fn create_room(&self, room: Room) -> impl Future<Output = Result<Room, RoomDupError>> + Send;
}

/// Persistence for [`Device`]s, including their roles and power states.
pub trait DeviceRepository {
    /// List the devices of a room, in store order.
    fn list_devices_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, RoomDupError>> + Send;

    /// Insert a device, returning it with the id assigned by the store.
    fn create_device(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, RoomDupError>> + Send;
}

/// Persistence for [`Port`]s.
pub trait PortRepository {
    /// List the ports hosted by a device.
    fn list_ports_by_host(
        &self,
        host_device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Port>, RoomDupError>> + Send;

    /// Insert a port, returning it with the id assigned by the store.
    fn create_port(&self, port: Port) -> impl Future<Output = Result<Port, RoomDupError>> + Send;
}
