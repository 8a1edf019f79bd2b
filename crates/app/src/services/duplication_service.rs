//! Duplication service — copies a room, its devices and their ports.
//!
//! The run is strictly sequential and has no rollback: once the target room
//! exists, every later failure is logged, counted in the
//! [`DuplicationReport`], and skipped.

use roomdup_domain::device::{Device, UNRESOLVED_ADDRESS};
use roomdup_domain::error::{NotFoundError, RoomDupError};
use roomdup_domain::label::RoomLabel;
use roomdup_domain::mapping::DeviceIdMapping;
use roomdup_domain::room::Room;

use crate::ports::{
    AddressResolver, BuildingRepository, DeviceRepository, PortRepository, RoomRepository,
    UiConfigRepository,
};
use crate::services::address_lookup::resolve_address;
use crate::services::port_copy::{PortCopyReport, copy_ports};
use crate::services::ui_config_copy::copy_ui_config;

/// What to duplicate, and which optional steps to run.
#[derive(Debug, Clone)]
pub struct DuplicationRequest {
    /// Room to copy from.
    pub old_room: RoomLabel,
    /// Room to create.
    pub new_room: RoomLabel,
    /// Resolve each new device's address through DNS.
    pub use_dns: bool,
    /// Copy the UI configuration file as well.
    pub duplicate_ui: bool,
}

/// Result of the optional UI configuration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCopyOutcome {
    Skipped,
    Copied,
    Failed,
}

/// Summary of a completed duplication run.
#[derive(Debug, Clone)]
pub struct DuplicationReport {
    /// The room created by the run, with its store-assigned id.
    pub room: Room,
    /// Source device id → id of its copy, for every device that was created.
    pub mapping: DeviceIdMapping,
    /// Devices the store refused to persist.
    pub devices_failed: usize,
    /// Outcome of the port copy pass.
    pub ports: PortCopyReport,
    /// Outcome of the UI configuration step.
    pub ui: UiCopyOutcome,
}

/// Application service duplicating rooms inside the configuration store.
pub struct DuplicationService<S, N, U> {
    store: S,
    resolver: Option<N>,
    ui: U,
}

impl<S, N, U> DuplicationService<S, N, U>
where
    S: BuildingRepository + RoomRepository + DeviceRepository + PortRepository,
    N: AddressResolver,
    U: UiConfigRepository,
{
    /// Create a new service.
    ///
    /// Without a resolver, DNS-enabled runs give every device the
    /// fallback address.
    pub fn new(store: S, resolver: Option<N>, ui: U) -> Self {
        Self {
            store,
            resolver,
            ui,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Duplicate `request.old_room` as `request.new_room`.
    ///
    /// Nothing is written unless the new room's building and the old room
    /// both exist. After the target room is created, device, port and UI
    /// failures only skip the affected item.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDupError::NotFound`] when the building or the source
    /// room is missing, or a storage error from the initial reads or from
    /// creating the target room.
    #[tracing::instrument(skip_all, fields(from = %request.old_room, to = %request.new_room))]
    pub async fn duplicate(
        &self,
        request: &DuplicationRequest,
    ) -> Result<DuplicationReport, RoomDupError> {
        let old = &request.old_room;
        let new = &request.new_room;
        tracing::info!("starting duplication of room");

        let building = self
            .store
            .find_building_by_shortname(new.building())
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Building",
                id: new.building().to_string(),
            })?;

        let source = self
            .store
            .find_room(old.building(), old.room())
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Room",
                id: old.to_string(),
            })?;
        let devices = self.store.list_devices_by_room(source.id).await?;

        let room = self
            .store
            .create_room(source.duplicate_as(new.room(), building.id))
            .await?;
        tracing::info!(room_id = %room.id, devices = devices.len(), "created room");

        let (mapping, devices_failed) = self.duplicate_devices(request, &room, &devices).await;
        let ports = copy_ports(&self.store, &mapping).await;
        tracing::info!("done copying room");

        let ui = if request.duplicate_ui {
            match copy_ui_config(&self.ui, old, new).await {
                Ok(()) => UiCopyOutcome::Copied,
                Err(err) => {
                    tracing::error!(%err, "problem copying the ui configuration");
                    UiCopyOutcome::Failed
                }
            }
        } else {
            UiCopyOutcome::Skipped
        };

        Ok(DuplicationReport {
            room,
            mapping,
            devices_failed,
            ports,
            ui,
        })
    }

    async fn duplicate_devices(
        &self,
        request: &DuplicationRequest,
        room: &Room,
        devices: &[Device],
    ) -> (DeviceIdMapping, usize) {
        let mut mapping = DeviceIdMapping::default();
        let mut failed = 0;

        for device in devices {
            tracing::info!(device = %request.old_room.device_hostname(&device.name), "working on device");
            let address = self.address_for(request, &device.name).await;
            let copy = device.duplicate_into(room.building_id, room.id, address);

            match self.store.create_device(copy).await {
                Ok(created) => {
                    tracing::info!(old_id = %device.id, new_id = %created.id, address = %created.address, "created device");
                    mapping.insert(device.id, created.id);
                }
                Err(err) => {
                    tracing::error!(%err, device = %device.name, "error adding device");
                    failed += 1;
                }
            }
        }

        (mapping, failed)
    }

    async fn address_for(&self, request: &DuplicationRequest, device_name: &str) -> String {
        if !request.use_dns {
            return UNRESOLVED_ADDRESS.to_string();
        }
        let Some(resolver) = &self.resolver else {
            tracing::warn!(device = %device_name, "no resolver available, using fallback address");
            return UNRESOLVED_ADDRESS.to_string();
        };
        resolve_address(resolver, &request.new_room.device_hostname(device_name)).await
    }
}
