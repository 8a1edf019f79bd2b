//! In-memory port implementations shared by the service tests.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::net::IpAddr;
use std::sync::Mutex;

use roomdup_domain::building::Building;
use roomdup_domain::device::Device;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::{BuildingId, DeviceId, PortId, RoomId};
use roomdup_domain::label::RoomLabel;
use roomdup_domain::port::Port;
use roomdup_domain::room::Room;

use crate::ports::{
    AddressResolver, BuildingRepository, DeviceRepository, PortRepository, RoomRepository,
    UiConfigRepository,
};

fn failure(message: &str) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::other(message.to_string()))
}

#[derive(Default)]
struct StoreState {
    next_room_id: i64,
    next_device_id: i64,
    next_port_id: i64,
    buildings: Vec<Building>,
    rooms: Vec<Room>,
    devices: Vec<Device>,
    ports: Vec<Port>,
    failing_devices: HashSet<String>,
    failing_port_listings: HashSet<DeviceId>,
    failing_port_sources: HashSet<DeviceId>,
    fail_room_creation: bool,
}

/// Configuration store kept in a few vectors, handing out sequential ids.
pub(crate) struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            state: Mutex::new(StoreState {
                next_room_id: 100,
                next_device_id: 100,
                next_port_id: 100,
                ..StoreState::default()
            }),
        }
    }
}

impl InMemoryStore {
    /// Make the next created device receive `id`, the one after `id + 1`, etc.
    pub(crate) fn with_next_device_id(self, id: i64) -> Self {
        self.state.lock().unwrap().next_device_id = id;
        self
    }

    pub(crate) fn add_building(&self, id: i64, shortname: &str) -> Building {
        let building = Building {
            id: BuildingId::new(id),
            name: format!("{shortname} Building"),
            shortname: shortname.to_string(),
            description: String::new(),
        };
        self.state.lock().unwrap().buildings.push(building.clone());
        building
    }

    pub(crate) fn add_room(&self, id: i64, building_id: BuildingId, name: &str) -> Room {
        let room = Room::builder()
            .id(RoomId::new(id))
            .name(name)
            .description("Seeded room")
            .designation("production")
            .building_id(building_id)
            .build()
            .unwrap();
        self.state.lock().unwrap().rooms.push(room.clone());
        room
    }

    pub(crate) fn add_device(&self, id: i64, room: &Room, name: &str) -> Device {
        let device = Device::builder()
            .id(DeviceId::new(id))
            .name(name)
            .address(format!("{name}.old.example"))
            .device_type("generic")
            .building_id(room.building_id)
            .room_id(room.id)
            .role("Control")
            .power_state("On")
            .build()
            .unwrap();
        self.state.lock().unwrap().devices.push(device.clone());
        device
    }

    pub(crate) fn add_port(&self, id: i64, host: i64, source: i64, destination: i64) {
        self.state.lock().unwrap().ports.push(Port {
            id: PortId::new(id),
            name: format!("port{id}"),
            host_device_id: DeviceId::new(host),
            source_device_id: DeviceId::new(source),
            destination_device_id: DeviceId::new(destination),
        });
    }

    pub(crate) fn fail_device_named(&self, name: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_devices
            .insert(name.to_string());
    }

    pub(crate) fn fail_port_listing_for(&self, host: i64) {
        self.state
            .lock()
            .unwrap()
            .failing_port_listings
            .insert(DeviceId::new(host));
    }

    /// Reject port inserts whose source device is `source`.
    pub(crate) fn fail_port_creation_from(&self, source: i64) {
        self.state
            .lock()
            .unwrap()
            .failing_port_sources
            .insert(DeviceId::new(source));
    }

    pub(crate) fn fail_room_creation(&self) {
        self.state.lock().unwrap().fail_room_creation = true;
    }

    pub(crate) fn rooms(&self) -> Vec<Room> {
        self.state.lock().unwrap().rooms.clone()
    }

    pub(crate) fn devices(&self) -> Vec<Device> {
        self.state.lock().unwrap().devices.clone()
    }

    pub(crate) fn devices_in(&self, room_id: RoomId) -> Vec<Device> {
        self.devices()
            .into_iter()
            .filter(|d| d.room_id == room_id)
            .collect()
    }

    pub(crate) fn ports(&self) -> Vec<Port> {
        self.state.lock().unwrap().ports.clone()
    }
}

impl BuildingRepository for InMemoryStore {
    fn find_building_by_shortname(
        &self,
        shortname: &str,
    ) -> impl Future<Output = Result<Option<Building>, RoomDupError>> + Send {
        let state = self.state.lock().unwrap();
        let result = state
            .buildings
            .iter()
            .find(|b| b.shortname == shortname)
            .cloned();
        async { Ok(result) }
    }
}

impl RoomRepository for InMemoryStore {
    fn find_room(
        &self,
        building: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Room>, RoomDupError>> + Send {
        let state = self.state.lock().unwrap();
        let result = state
            .buildings
            .iter()
            .find(|b| b.shortname == building)
            .and_then(|b| {
                state
                    .rooms
                    .iter()
                    .find(|r| r.building_id == b.id && r.name == name)
            })
            .cloned();
        async { Ok(result) }
    }

    fn create_room(&self, mut room: Room) -> impl Future<Output = Result<Room, RoomDupError>> + Send {
        let mut state = self.state.lock().unwrap();
        let result = if state.fail_room_creation {
            Err(RoomDupError::Storage(failure("room insert rejected")))
        } else {
            room.id = RoomId::new(state.next_room_id);
            state.next_room_id += 1;
            state.rooms.push(room.clone());
            Ok(room)
        };
        async { result }
    }
}

impl DeviceRepository for InMemoryStore {
    fn list_devices_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, RoomDupError>> + Send {
        let result = self.devices_in(room_id);
        async { Ok(result) }
    }

    fn create_device(
        &self,
        mut device: Device,
    ) -> impl Future<Output = Result<Device, RoomDupError>> + Send {
        let mut state = self.state.lock().unwrap();
        let result = if state.failing_devices.contains(&device.name) {
            Err(RoomDupError::Storage(failure("device insert rejected")))
        } else {
            device.id = DeviceId::new(state.next_device_id);
            state.next_device_id += 1;
            state.devices.push(device.clone());
            Ok(device)
        };
        async { result }
    }
}

impl PortRepository for InMemoryStore {
    fn list_ports_by_host(
        &self,
        host_device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Port>, RoomDupError>> + Send {
        let state = self.state.lock().unwrap();
        let result = if state.failing_port_listings.contains(&host_device_id) {
            Err(RoomDupError::Storage(failure("port query rejected")))
        } else {
            Ok(state
                .ports
                .iter()
                .filter(|p| p.host_device_id == host_device_id)
                .cloned()
                .collect())
        };
        async { result }
    }

    fn create_port(&self, mut port: Port) -> impl Future<Output = Result<Port, RoomDupError>> + Send {
        let mut state = self.state.lock().unwrap();
        let result = if state.failing_port_sources.contains(&port.source_device_id) {
            Err(RoomDupError::Storage(failure("port insert rejected")))
        } else {
            port.id = PortId::new(state.next_port_id);
            state.next_port_id += 1;
            state.ports.push(port.clone());
            Ok(port)
        };
        async { result }
    }
}

/// DNS answers served from two lookup tables; anything else is a failure.
#[derive(Default)]
pub(crate) struct FakeResolver {
    forward: HashMap<String, Vec<IpAddr>>,
    reverse: HashMap<IpAddr, Vec<String>>,
    queried: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub(crate) fn with_host(mut self, name: &str, ip: IpAddr) -> Self {
        self.forward.entry(name.to_string()).or_default().push(ip);
        self
    }

    pub(crate) fn with_ptr(mut self, ip: IpAddr, host: &str) -> Self {
        self.reverse.entry(ip).or_default().push(host.to_string());
        self
    }

    /// Names passed to forward lookups, in call order.
    pub(crate) fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl AddressResolver for FakeResolver {
    fn lookup_ip(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, RoomDupError>> + Send {
        self.queried.lock().unwrap().push(name.to_string());
        let result = self
            .forward
            .get(name)
            .cloned()
            .ok_or_else(|| RoomDupError::Resolver(failure("no such host")));
        async { result }
    }

    fn reverse_lookup(
        &self,
        ip: IpAddr,
    ) -> impl Future<Output = Result<Vec<String>, RoomDupError>> + Send {
        let result = self
            .reverse
            .get(&ip)
            .cloned()
            .ok_or_else(|| RoomDupError::Resolver(failure("no PTR record")));
        async { result }
    }
}

/// UI configuration documents kept in a map keyed by room label.
#[derive(Default)]
pub(crate) struct InMemoryUiConfigs {
    files: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl InMemoryUiConfigs {
    pub(crate) fn with_file(self, label: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(label.to_string(), content.to_string());
        self
    }

    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn file(&self, label: &str) -> Option<String> {
        self.files.lock().unwrap().get(label).cloned()
    }
}

impl UiConfigRepository for InMemoryUiConfigs {
    fn load(&self, room: &RoomLabel) -> impl Future<Output = Result<String, RoomDupError>> + Send {
        let result = self
            .file(&room.to_string())
            .ok_or_else(|| RoomDupError::UiConfig(failure("no such file")));
        async { result }
    }

    fn save(
        &self,
        room: &RoomLabel,
        content: String,
    ) -> impl Future<Output = Result<(), RoomDupError>> + Send {
        let result = if self.fail_writes {
            Err(RoomDupError::UiConfig(failure("read-only filesystem")))
        } else {
            self.files.lock().unwrap().insert(room.to_string(), content);
            Ok(())
        };
        async { result }
    }
}
