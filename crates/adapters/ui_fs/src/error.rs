//! Filesystem error type for UI configuration files.

use std::path::PathBuf;

use roomdup_domain::error::RoomDupError;

/// Errors raised while reading or writing UI configuration files.
#[derive(Debug, thiserror::Error)]
pub enum UiConfigError {
    #[error("problem reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("problem creating {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("problem writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no parent directory", .0.display())]
    NoParent(PathBuf),
}

impl From<UiConfigError> for RoomDupError {
    fn from(err: UiConfigError) -> Self {
        Self::UiConfig(Box::new(err))
    }
}
