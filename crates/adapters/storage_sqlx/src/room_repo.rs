//! sqlx implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use roomdup_app::ports::RoomRepository;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::{BuildingId, RoomId};
use roomdup_domain::room::Room;

use crate::SqlxConfigurationStore;
use crate::error::StorageError;
use crate::insert::insert_returning_id;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Room {
            id: RoomId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            designation: row.try_get("designation")?,
            building_id: BuildingId::new(row.try_get("building_id")?),
        }))
    }
}

const SELECT_BY_BUILDING_AND_NAME: &str = "SELECT r.id, r.name, r.description, r.designation, r.building_id \
     FROM rooms r JOIN buildings b ON b.id = r.building_id \
     WHERE b.shortname = ? AND r.name = ?";
const INSERT: &str =
    "INSERT INTO rooms (name, description, designation, building_id) VALUES (?, ?, ?, ?)";

impl RoomRepository for SqlxConfigurationStore {
    fn find_room(
        &self,
        building: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Room>, RoomDupError>> + Send {
        let pool = self.pool.clone();
        let building = building.to_string();
        let name = name.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_BUILDING_AND_NAME)
                .bind(building)
                .bind(name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn create_room(&self, room: Room) -> impl Future<Output = Result<Room, RoomDupError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = sqlx::query(INSERT)
                .bind(room.name.clone())
                .bind(room.description.clone())
                .bind(room.designation.clone())
                .bind(room.building_id.get());
            let id = insert_returning_id(&pool, query, "room").await?;

            Ok(Room {
                id: RoomId::new(id),
                ..room
            })
        }
    }
}
