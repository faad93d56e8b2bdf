//! Publish audit trail entities
//!
//! `PublishLogEntry` is the before/after view of one publish action.
//! `PublishRecord` is what gets appended to the audit trail: the entry plus
//! who published and when, both supplied by the caller.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Environment, ItemKind};

/// Before/after version pointers for one publish action
///
/// The new side is 0 for environments the action did not touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishLogEntry {
    item_id: u64,
    old_live: u32,
    old_accept: u32,
    old_test: u32,
    new_live: u32,
    new_accept: u32,
    new_test: u32,
}

impl PublishLogEntry {
    /// Start an entry from the pointers before the action
    pub fn new(item_id: u64, old_live: u32, old_accept: u32, old_test: u32) -> Self {
        Self {
            item_id,
            old_live,
            old_accept,
            old_test,
            ..Self::default()
        }
    }

    /// Record `version` as the new holder of `environment`
    pub fn with_new(mut self, environment: Environment, version: u32) -> Self {
        match environment {
            Environment::Test => self.new_test = version,
            Environment::Acceptance => self.new_accept = version,
            Environment::Live => self.new_live = version,
        }
        self
    }

    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    pub fn old_live(&self) -> u32 {
        self.old_live
    }

    pub fn old_accept(&self) -> u32 {
        self.old_accept
    }

    pub fn old_test(&self) -> u32 {
        self.old_test
    }

    pub fn new_live(&self) -> u32 {
        self.new_live
    }

    pub fn new_accept(&self) -> u32 {
        self.new_accept
    }

    pub fn new_test(&self) -> u32 {
        self.new_test
    }

    pub fn old_version(&self, environment: Environment) -> u32 {
        match environment {
            Environment::Test => self.old_test,
            Environment::Acceptance => self.old_accept,
            Environment::Live => self.old_live,
        }
    }

    pub fn new_version(&self, environment: Environment) -> u32 {
        match environment {
            Environment::Test => self.new_test,
            Environment::Acceptance => self.new_accept,
            Environment::Live => self.new_live,
        }
    }

    /// Environments this action assigned a new version to
    pub fn touched(&self) -> impl Iterator<Item = Environment> + '_ {
        Environment::ORDERED
            .into_iter()
            .filter(move |env| self.new_version(*env) != 0)
    }
}

impl std::fmt::Display for PublishLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.item_id)?;
        let mut any = false;
        for env in self.touched() {
            write!(
                f,
                " {}: {} -> {}",
                env.as_str(),
                self.old_version(env),
                self.new_version(env)
            )?;
            any = true;
        }
        if !any {
            write!(f, " (no change)")?;
        }
        Ok(())
    }
}

/// An appended audit row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRecord {
    kind: ItemKind,
    entry: PublishLogEntry,
    published_at: DateTime<Utc>,
    published_by: String,
}

impl PublishRecord {
    pub fn new(
        kind: ItemKind,
        entry: PublishLogEntry,
        published_at: DateTime<Utc>,
        published_by: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entry,
            published_at,
            published_by: published_by.into(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn item_id(&self) -> u64 {
        self.entry.item_id()
    }

    pub fn entry(&self) -> &PublishLogEntry {
        &self.entry
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn published_by(&self) -> &str {
        &self.published_by
    }
}
