//! UI configuration port — the per-room `config.json` documents.

use std::future::Future;

use roomdup_domain::error::RoomDupError;
use roomdup_domain::label::RoomLabel;

/// Storage for the UI configuration of each room, keyed by room label.
pub trait UiConfigRepository {
    /// Read the raw configuration text of a room.
    fn load(&self, room: &RoomLabel) -> impl Future<Output = Result<String, RoomDupError>> + Send;

    /// Write the raw configuration text of a room, creating whatever
    /// container it lives in.
    fn save(
        &self,
        room: &RoomLabel,
        content: String,
    ) -> impl Future<Output = Result<(), RoomDupError>> + Send;
}
