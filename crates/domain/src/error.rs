//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoomDupError`] via `From`, boxing adapter-specific sources.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every fallible operation of the duplication tool.
#[derive(Debug, thiserror::Error)]
pub enum RoomDupError {
    /// A record or input violated a domain invariant.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A record the operation depends on does not exist in the store.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The configuration store failed.
    #[error("storage error: {0}")]
    Storage(#[source] BoxError),

    /// A DNS lookup failed.
    #[error("address resolution error: {0}")]
    Resolver(#[source] BoxError),

    /// Reading or writing a UI configuration file failed.
    #[error("ui configuration error: {0}")]
    UiConfig(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A record was built without a name.
    #[error("name must not be empty")]
    EmptyName,

    /// A room label did not split into `Building-Room`.
    #[error("invalid room label {label:?}, expected <Building>-<Room>")]
    InvalidRoomLabel { label: String },
}

/// A lookup by key found nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Human-readable key used for the lookup.
    pub id: String,
}
