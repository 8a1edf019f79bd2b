//! Storage-specific error type wrapping sqlx errors.

use roomdup_domain::error::RoomDupError;

/// Errors originating from the configuration store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The configuration schema could not be applied.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An insert succeeded but the driver reported no generated id.
    #[error("no id generated for inserted {0}")]
    MissingInsertId(&'static str),
}

impl From<StorageError> for RoomDupError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
