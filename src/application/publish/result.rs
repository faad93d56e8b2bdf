//! Publish Result
//!
//! What a publish did (or would do, for a dry run).

use chrono::{DateTime, Utc};

use crate::domain::entities::{PublishDeltas, PublishLogEntry, PublishedEnvironments};
use crate::domain::value_objects::{Environment, ItemKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub kind: ItemKind,
    pub item_id: u64,
    pub version: u32,
    pub environment: Environment,
    /// Snapshot before the publish
    pub before: PublishedEnvironments,
    /// Snapshot after applying the deltas
    pub after: PublishedEnvironments,
    pub deltas: PublishDeltas,
    pub entry: PublishLogEntry,
    pub published_at: DateTime<Utc>,
    pub published_by: String,
    pub dry_run: bool,
}

impl PublishOutcome {
    /// Number of versions whose bitmask actually changed
    pub fn changed_versions(&self) -> usize {
        self.deltas.effective().count()
    }

    /// True when the publish moved no flag at all
    pub fn is_noop(&self) -> bool {
        self.changed_versions() == 0
    }

    /// Environments that now hold `version` because of a cascade
    pub fn cascaded(&self) -> Vec<Environment> {
        self.entry
            .touched()
            .filter(|env| *env != self.environment)
            .collect()
    }
}
