//! PublishDeltas entity - signed bitmask changes per version
//!
//! Consumers apply `bitmask := bitmask + delta` per version. Version `0`
//! stands for "no version" and is skipped when applying.

use std::collections::BTreeMap;

use crate::domain::value_objects::Environments;

/// Accumulated per-version deltas of one publish action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishDeltas {
    deltas: BTreeMap<u32, i32>,
}

impl PublishDeltas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to `version`, summing with any earlier delta for it
    pub fn add(&mut self, version: u32, delta: i32) {
        *self.deltas.entry(version).or_insert(0) += delta;
    }

    /// Add the bits of `environments` to `version`
    pub fn publish(&mut self, version: u32, environments: Environments) {
        self.add(version, i32::from(environments.bits()));
    }

    /// Remove the bits of `environments` from `version`
    pub fn unpublish(&mut self, version: u32, environments: Environments) {
        self.add(version, -i32::from(environments.bits()));
    }

    /// Net delta recorded for `version`
    pub fn get(&self, version: u32) -> Option<i32> {
        self.deltas.get(&version).copied()
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// All recorded entries, ascending by version (including zero nets)
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.deltas.iter().map(|(version, delta)| (*version, *delta))
    }

    /// Entries that change a real version's bitmask
    pub fn effective(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.iter()
            .filter(|(version, delta)| *version != 0 && *delta != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Environment;

    #[test]
    fn add_sums_on_collision() {
        let mut deltas = PublishDeltas::new();
        deltas.add(3, 1);
        deltas.add(3, -1);
        deltas.add(3, 4);

        assert_eq!(deltas.get(3), Some(4));
        assert_eq!(deltas.len(), 1);
    }

    #[test]
    fn zero_net_entries_are_kept() {
        let mut deltas = PublishDeltas::new();
        deltas.publish(5, Environment::Test.into());
        deltas.unpublish(5, Environment::Test.into());

        assert_eq!(deltas.get(5), Some(0));
        assert_eq!(deltas.effective().count(), 0);
    }

    #[test]
    fn effective_skips_version_zero() {
        let mut deltas = PublishDeltas::new();
        deltas.unpublish(0, Environment::Live.into());
        deltas.publish(2, Environment::Live.into());

        assert_eq!(deltas.iter().collect::<Vec<_>>(), vec![(0, -4), (2, 4)]);
        assert_eq!(deltas.effective().collect::<Vec<_>>(), vec![(2, 4)]);
    }

    #[test]
    fn missing_version_has_no_delta() {
        assert_eq!(PublishDeltas::new().get(1), None);
        assert!(PublishDeltas::new().is_empty());
    }
}
