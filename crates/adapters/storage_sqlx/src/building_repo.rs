//! sqlx implementation of [`BuildingRepository`].

use std::future::Future;

use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use roomdup_app::ports::BuildingRepository;
use roomdup_domain::building::Building;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::id::BuildingId;

use crate::SqlxConfigurationStore;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Building`].
struct Wrapper(Building);

impl<'r> FromRow<'r, AnyRow> for Wrapper {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Building {
            id: BuildingId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            shortname: row.try_get("shortname")?,
            description: row.try_get("description")?,
        }))
    }
}

const SELECT_BY_SHORTNAME: &str =
    "SELECT id, name, shortname, description FROM buildings WHERE shortname = ?";

impl BuildingRepository for SqlxConfigurationStore {
    fn find_building_by_shortname(
        &self,
        shortname: &str,
    ) -> impl Future<Output = Result<Option<Building>, RoomDupError>> + Send {
        let pool = self.pool.clone();
        let shortname = shortname.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SHORTNAME)
                .bind(shortname)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}
