//! Inserts returning the id the store generated.
//!
//! `MySQL` reports the generated id through the `Any` driver's query result,
//! `SQLite` does not. In that case the id is read back on the same connection.

use sqlx::AnyPool;
use sqlx::any::{Any, AnyArguments};
use sqlx::query::Query;

use crate::error::StorageError;

/// Run `query` and return the id of the row it inserted.
///
/// # Errors
///
/// Returns [`StorageError::Database`] if a statement fails, or
/// [`StorageError::MissingInsertId`] if the backend gives no id back.
pub(crate) async fn insert_returning_id<'q>(
    pool: &AnyPool,
    query: Query<'q, Any, AnyArguments<'q>>,
    entity: &'static str,
) -> Result<i64, StorageError> {
    let mut conn = pool.acquire().await?;
    let result = query.execute(&mut *conn).await?;
    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    let select = match conn.backend_name() {
        "SQLite" => "SELECT last_insert_rowid()",
        "MySQL" => "SELECT CAST(LAST_INSERT_ID() AS SIGNED)",
        _ => return Err(StorageError::MissingInsertId(entity)),
    };
    let (id,): (i64,) = sqlx::query_as(select).fetch_one(&mut *conn).await?;
    if id == 0 {
        return Err(StorageError::MissingInsertId(entity));
    }
    Ok(id)
}
