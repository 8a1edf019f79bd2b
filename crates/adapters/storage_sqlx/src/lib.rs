//! # roomdup-adapter-storage-sqlx
//!
//! Configuration store adapter using [sqlx](https://docs.rs/sqlx) through its
//! `Any` driver, so the same queries run against the production `MySQL`
//! database and against `SQLite` in tests.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `roomdup-app::ports::storage`
//! - Manage the connection pool lifecycle
//! - Map between domain types and database rows
//!
//! The store schema is owned by the configuration database; this crate never
//! migrates it. A `SQLite` rendition lives in `migrations/` and is applied
//! with the sqlx migrator behind the `test-support` feature.
//!
//! ## Dependency rule
//! Depends on `roomdup-app` (for port traits) and `roomdup-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod building_repo;
mod device_repo;
mod error;
mod insert;
mod pool;
mod port_repo;
mod room_repo;

pub use error::StorageError;
pub use pool::{Config, Database};

use sqlx::AnyPool;

/// The configuration store, implementing every storage port over one pool.
#[derive(Clone)]
pub struct SqlxConfigurationStore {
    pool: AnyPool,
}

impl SqlxConfigurationStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}
