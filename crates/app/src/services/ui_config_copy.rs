//! UI configuration copy — clones a room's `config.json` under the new label.

use roomdup_domain::error::RoomDupError;
use roomdup_domain::label::RoomLabel;

use crate::ports::UiConfigRepository;

/// Replace every literal occurrence of `old` with `new` in `content`.
///
/// This is plain text substitution: the label is replaced wherever it
/// appears, including inside unrelated string values.
#[must_use]
pub fn relabel(content: &str, old: &RoomLabel, new: &RoomLabel) -> String {
    content.replace(&old.to_string(), &new.to_string())
}

/// Copy the UI configuration of `old` to `new`, relabelling its content.
///
/// # Errors
///
/// Returns [`RoomDupError::UiConfig`] when the source cannot be read or the
/// copy cannot be written.
pub async fn copy_ui_config<U: UiConfigRepository>(
    repo: &U,
    old: &RoomLabel,
    new: &RoomLabel,
) -> Result<(), RoomDupError> {
    tracing::info!(from = %old, to = %new, "copying the ui configuration");
    let content = repo.load(old).await?;
    repo.save(new, relabel(&content, old, new)).await?;
    tracing::info!(room = %new, "done copying ui configuration");
    Ok(())
}
