//! sqlx implementation of [`DeviceRepository`].
//!
//! Roles and power states live in their own tables, one row per label.
//! Nothing here runs in a transaction: a device whose role insert fails
//! stays in the store without that role.

use std::future::Future;

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use roomdup_app::ports::DeviceRepository;
use roomdup_domain::device::Device;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::{BuildingId, DeviceId, RoomId};

use crate::SqlxConfigurationStore;
use crate::error::StorageError;
use crate::insert::insert_returning_id;

/// Wrapper for converting database rows into domain [`Device`], without
/// its roles and power states.
struct Wrapper(Device);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let input: i64 = row.try_get("input")?;
        let output: i64 = row.try_get("output")?;

        Ok(Self(Device {
            id: DeviceId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            display_name: row.try_get("display_name")?,
            address: row.try_get("address")?,
            device_type: row.try_get("device_type")?,
            device_class: row.try_get("device_class")?,
            input: input != 0,
            output: output != 0,
            building_id: BuildingId::new(row.try_get("building_id")?),
            room_id: RoomId::new(row.try_get("room_id")?),
            roles: Vec::new(),
            power_states: Vec::new(),
        }))
    }
}

const SELECT_BY_ROOM: &str = "SELECT id, name, display_name, address, device_type, device_class, \
     input, output, building_id, room_id FROM devices WHERE room_id = ? ORDER BY id";
const SELECT_ROLES: &str = "SELECT role FROM device_roles WHERE device_id = ?";
const SELECT_POWER_STATES: &str =
    "SELECT power_state FROM device_power_states WHERE device_id = ?";
const INSERT: &str = "INSERT INTO devices (name, display_name, address, device_type, device_class, \
     input, output, building_id, room_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const INSERT_ROLE: &str = "INSERT INTO device_roles (device_id, role) VALUES (?, ?)";
const INSERT_POWER_STATE: &str =
    "INSERT INTO device_power_states (device_id, power_state) VALUES (?, ?)";

async fn select_labels(
    pool: &AnyPool,
    query: &'static str,
    id: DeviceId,
) -> Result<Vec<String>, StorageError> {
    let rows: Vec<(String,)> = sqlx::query_as(query)
        .bind(id.get())
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(label,)| label).collect())
}

async fn insert_labels(
    pool: &AnyPool,
    query: &'static str,
    id: DeviceId,
    labels: &[String],
) -> Result<(), StorageError> {
    for label in labels {
        sqlx::query(query)
            .bind(id.get())
            .bind(label.clone())
            .execute(pool)
            .await?;
    }
    Ok(())
}

impl DeviceRepository for SqlxConfigurationStore {
    fn list_devices_by_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, RoomDupError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ROOM)
                .bind(room_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut devices = Vec::with_capacity(rows.len());
            for Wrapper(mut device) in rows {
                device.roles = select_labels(&pool, SELECT_ROLES, device.id).await?;
                device.power_states =
                    select_labels(&pool, SELECT_POWER_STATES, device.id).await?;
                devices.push(device);
            }
            Ok(devices)
        }
    }

    fn create_device(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, RoomDupError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = sqlx::query(INSERT)
                .bind(device.name.clone())
                .bind(device.display_name.clone())
                .bind(device.address.clone())
                .bind(device.device_type.clone())
                .bind(device.device_class.clone())
                .bind(i64::from(device.input))
                .bind(i64::from(device.output))
                .bind(device.building_id.get())
                .bind(device.room_id.get());
            let id = DeviceId::new(insert_returning_id(&pool, query, "device").await?);

            insert_labels(&pool, INSERT_ROLE, id, &device.roles).await?;
            insert_labels(&pool, INSERT_POWER_STATE, id, &device.power_states).await?;

            Ok(Device { id, ..device })
        }
    }
}
