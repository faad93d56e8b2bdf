//! Item entity - a versioned template or dynamic content component
//!
//! Holds the `version -> published_environment` map for one item. Pure data;
//! persistence is handled by `PublishStoreRepository`.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::{PublishDeltas, PublishedEnvironments};
use crate::domain::value_objects::{Environment, Environments, ItemKind};

/// Errors raised while applying deltas to an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("version {version} does not exist")]
    UnknownVersion { version: u32 },

    #[error("version {version} would end up with invalid environment bits {bits}")]
    InvalidBits { version: u32, bits: i32 },
}

/// A publishable item and its versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
    id: u64,
    versions: BTreeMap<u32, Environments>,
}

impl Item {
    pub fn new(kind: ItemKind, id: u64) -> Self {
        Self {
            kind,
            id,
            versions: BTreeMap::new(),
        }
    }

    /// Restore an item from stored versions
    pub fn with_versions(
        kind: ItemKind,
        id: u64,
        versions: impl IntoIterator<Item = (u32, Environments)>,
    ) -> Self {
        Self {
            kind,
            id,
            versions: versions.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Versions with their bitmasks, ascending
    pub fn versions(&self) -> impl Iterator<Item = (u32, Environments)> + '_ {
        self.versions.iter().map(|(v, e)| (*v, *e))
    }

    pub fn has_version(&self, version: u32) -> bool {
        self.versions.contains_key(&version)
    }

    pub fn published(&self, version: u32) -> Option<Environments> {
        self.versions.get(&version).copied()
    }

    pub fn latest_version(&self) -> Option<u32> {
        self.versions.keys().next_back().copied()
    }

    /// Snapshot of which version holds each environment
    pub fn published_environments(&self) -> PublishedEnvironments {
        PublishedEnvironments::from_version_map(self.versions())
    }

    /// Version currently served in `environment`
    pub fn version_in(&self, environment: Environment) -> Option<u32> {
        self.versions
            .iter()
            .find(|(_, published)| published.contains(environment))
            .map(|(version, _)| *version)
    }

    /// Append a new, unpublished version and return its number.
    ///
    /// `None` once `u32::MAX` is taken; the item is left unchanged.
    pub fn create_version(&mut self) -> Option<u32> {
        let version = match self.latest_version() {
            Some(latest) => latest.checked_add(1)?,
            None => 1,
        };
        self.versions.insert(version, Environments::NONE);
        Some(version)
    }

    /// Apply `bitmask := bitmask + delta` for every real version.
    ///
    /// All-or-nothing: on error the item is unchanged.
    pub fn apply_deltas(&mut self, deltas: &PublishDeltas) -> Result<(), ApplyError> {
        let mut updated = self.versions.clone();

        for (version, delta) in deltas.effective() {
            let current = updated
                .get_mut(&version)
                .ok_or(ApplyError::UnknownVersion { version })?;
            let bits = i32::from(current.bits()) + delta;
            *current =
                Environments::from_bits(bits).ok_or(ApplyError::InvalidBits { version, bits })?;
        }

        self.versions = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: i32) -> Environments {
        Environments::from_bits(value).unwrap()
    }

    fn sample() -> Item {
        Item::with_versions(
            ItemKind::Template,
            42,
            [(1, bits(0)), (2, bits(1)), (3, bits(6))],
        )
    }

    #[test]
    fn create_version_starts_at_one() {
        let mut item = Item::new(ItemKind::Template, 1);
        assert_eq!(item.create_version(), Some(1));
        assert_eq!(item.create_version(), Some(2));
        assert_eq!(item.published(2), Some(Environments::NONE));
    }

    #[test]
    fn create_version_follows_latest() {
        let mut item = sample();
        assert_eq!(item.create_version(), Some(4));
        assert_eq!(item.latest_version(), Some(4));
    }

    #[test]
    fn create_version_stops_at_u32_max() {
        let mut item = Item::with_versions(ItemKind::Template, 1, [(u32::MAX, bits(4))]);
        let before = item.clone();

        assert_eq!(item.create_version(), None);
        assert_eq!(item, before);
        assert!(!item.has_version(0));
    }

    #[test]
    fn version_in_finds_flag_holder() {
        let item = sample();
        assert_eq!(item.version_in(Environment::Test), Some(2));
        assert_eq!(item.version_in(Environment::Live), Some(3));

        let fresh = Item::new(ItemKind::Template, 2);
        assert_eq!(fresh.version_in(Environment::Live), None);
    }

    #[test]
    fn published_environments_matches_versions() {
        let snapshot = sample().published_environments();
        assert_eq!(snapshot.test_version(), 2);
        assert_eq!(snapshot.accept_version(), 3);
        assert_eq!(snapshot.live_version(), 3);
        assert_eq!(snapshot.versions(), &[1, 2, 3]);
    }

    #[test]
    fn apply_deltas_adds_bits() {
        let mut item = sample();
        let mut deltas = PublishDeltas::new();
        deltas.add(1, 1);
        deltas.add(2, -1);
        deltas.add(0, -4);

        item.apply_deltas(&deltas).unwrap();

        assert_eq!(item.published(1), Some(bits(1)));
        assert_eq!(item.published(2), Some(bits(0)));
        assert_eq!(item.published(3), Some(bits(6)));
    }

    #[test]
    fn apply_deltas_rejects_unknown_version() {
        let mut item = sample();
        let mut deltas = PublishDeltas::new();
        deltas.add(1, 1);
        deltas.add(9, 4);

        let err = item.apply_deltas(&deltas).unwrap_err();

        assert_eq!(err, ApplyError::UnknownVersion { version: 9 });
        assert_eq!(item, sample());
    }

    #[test]
    fn apply_deltas_rejects_negative_bits() {
        let mut item = sample();
        let mut deltas = PublishDeltas::new();
        deltas.add(1, -1);

        let err = item.apply_deltas(&deltas).unwrap_err();

        assert_eq!(err, ApplyError::InvalidBits { version: 1, bits: -1 });
        assert_eq!(item, sample());
    }
}
