//! sqlx implementation of [`PortRepository`].

use std::future::Future;

use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use roomdup_app::ports::PortRepository;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::{DeviceId, PortId};
use roomdup_domain::port::Port;

use crate::SqlxConfigurationStore;
use crate::error::StorageError;
use crate::insert::insert_returning_id;

/// Wrapper for converting database rows into domain [`Port`].
struct Wrapper(Port);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Port {
            id: PortId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            host_device_id: DeviceId::new(row.try_get("host_device_id")?),
            source_device_id: DeviceId::new(row.try_get("source_device_id")?),
            destination_device_id: DeviceId::new(row.try_get("destination_device_id")?),
        }))
    }
}

const SELECT_BY_HOST: &str = "SELECT id, name, host_device_id, source_device_id, destination_device_id \
     FROM ports WHERE host_device_id = ? ORDER BY id";
const INSERT: &str = "INSERT INTO ports (name, host_device_id, source_device_id, destination_device_id) \
     VALUES (?, ?, ?, ?)";

impl PortRepository for SqlxConfigurationStore {
    fn list_ports_by_host(
        &self,
        host_device_id: DeviceId,
    ) -> impl Future<Output = Result<Vec<Port>, RoomDupError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_HOST)
                .bind(host_device_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create_port(&self, port: Port) -> impl Future<Output = Result<Port, RoomDupError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = sqlx::query(INSERT)
                .bind(port.name.clone())
                .bind(port.host_device_id.get())
                .bind(port.source_device_id.get())
                .bind(port.destination_device_id.get());
            let id = insert_returning_id(&pool, query, "port").await?;

            Ok(Port {
                id: PortId::new(id),
                ..port
            })
        }
    }
}
