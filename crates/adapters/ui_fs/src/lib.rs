//! # roomdup-adapter-ui-fs
//!
//! Filesystem adapter for the per-room UI configuration documents.
//!
//! ## Responsibilities
//! - Implement the `UiConfigRepository` port defined in `roomdup-app::ports::ui_config`
//! - Lay files out as `<root>/<Building-Room>/config.json`
//!
//! ## Dependency rule
//! Depends on `roomdup-app` (for port traits) and `roomdup-domain` (for domain types).

mod error;

pub use error::UiConfigError;

use std::future::Future;
use std::path::{Path, PathBuf};

use roomdup_app::ports::UiConfigRepository;
use roomdup_domain::error::RoomDupError;
use roomdup_domain::label::RoomLabel;

const FILE_NAME: &str = "config.json";

/// Mode given to created directories and written files, matching what the
/// UI deployment expects.
#[cfg(unix)]
const MODE: u32 = 0o755;

/// UI configuration files stored below a root directory.
#[derive(Debug, Clone)]
pub struct FsUiConfigRepository {
    root: PathBuf,
}

impl FsUiConfigRepository {
    /// Create a repository rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the configuration file of `room`.
    #[must_use]
    pub fn path_for(&self, room: &RoomLabel) -> PathBuf {
        self.root.join(room.to_string()).join(FILE_NAME)
    }
}

/// Apply [`MODE`] to a path this adapter just created. A failure is logged
/// and does not fail the save.
#[cfg(unix)]
async fn set_mode(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(err) = tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(MODE)).await {
        tracing::warn!(%err, path = %path.display(), "could not set permissions");
    }
}

#[cfg(not(unix))]
async fn set_mode(_path: &Path) {}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

impl UiConfigRepository for FsUiConfigRepository {
    fn load(&self, room: &RoomLabel) -> impl Future<Output = Result<String, RoomDupError>> + Send {
        let path = self.path_for(room);
        async move {
            tracing::debug!(path = %path.display(), "reading ui configuration");
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| UiConfigError::Read { path, source })?;
            Ok(content)
        }
    }

    fn save(
        &self,
        room: &RoomLabel,
        content: String,
    ) -> impl Future<Output = Result<(), RoomDupError>> + Send {
        let path = self.path_for(room);
        async move {
            let Some(dir) = path.parent().map(Path::to_path_buf) else {
                return Err(UiConfigError::NoParent(path).into());
            };

            // Existing paths keep their owner's permissions.
            if !exists(&dir).await {
                tokio::fs::create_dir_all(&dir)
                    .await
                    .map_err(|source| UiConfigError::CreateDir {
                        path: dir.clone(),
                        source,
                    })?;
                set_mode(&dir).await;
            }

            let created = !exists(&path).await;
            tracing::debug!(path = %path.display(), "writing ui configuration");
            tokio::fs::write(&path, content)
                .await
                .map_err(|source| UiConfigError::Write {
                    path: path.clone(),
                    source,
                })?;
            if created {
                set_mode(&path).await;
            }
            Ok(())
        }
    }
}
