//! Old → new device id table built during one duplication run.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::id::DeviceId;

/// Maps each source device id to the id the store gave its copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceIdMapping(BTreeMap<DeviceId, DeviceId>);

impl DeviceIdMapping {
    /// Record that `old` was duplicated as `new`.
    pub fn insert(&mut self, old: DeviceId, new: DeviceId) {
        self.0.insert(old, new);
    }

    /// Look up the copy of `old`, if it was duplicated.
    #[must_use]
    pub fn get(&self, old: DeviceId) -> Option<DeviceId> {
        self.0.get(&old).copied()
    }

    /// Look up the copy of `old`, yielding [`DeviceId::UNASSIGNED`] when it
    /// was not duplicated.
    #[must_use]
    pub fn resolve(&self, old: DeviceId) -> DeviceId {
        self.get(old).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(old, new)` pairs in ascending order of the old id.
    pub fn iter(&self) -> impl Iterator<Item = (DeviceId, DeviceId)> + '_ {
        self.0.iter().map(|(old, new)| (*old, *new))
    }
}

impl FromIterator<(DeviceId, DeviceId)> for DeviceIdMapping {
    fn from_iter<I: IntoIterator<Item = (DeviceId, DeviceId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DeviceIdMapping {
    type Item = (DeviceId, DeviceId);
    type IntoIter = btree_map::IntoIter<DeviceId, DeviceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
