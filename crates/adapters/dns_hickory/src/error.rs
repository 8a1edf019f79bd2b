//! Resolver-specific error type wrapping hickory errors.

use hickory_resolver::error::ResolveError;
use roomdup_domain::error::RoomDupError;

/// Errors specific to the DNS adapter.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// The system resolver configuration could not be loaded.
    #[error("failed to load system resolver configuration: {0}")]
    SystemConfig(#[source] ResolveError),

    /// A forward or reverse lookup failed.
    #[error("lookup of {name} failed: {source}")]
    Lookup {
        name: String,
        #[source]
        source: ResolveError,
    },
}

impl From<ResolverError> for RoomDupError {
    fn from(err: ResolverError) -> Self {
        Self::Resolver(Box::new(err))
    }
}
