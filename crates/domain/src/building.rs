//! Building — the top-level grouping that owns rooms.

use crate::id::BuildingId;

/// A building, addressed by its short name (e.g. `ITB`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub shortname: String,
    pub description: String,
}
