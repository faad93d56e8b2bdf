//! PublishedEnvironments entity - which version holds each environment flag
//!
//! Built fresh from an item's `version -> bitmask` map on every publish.
//! A pointer of `0` means no version holds that flag.

use thiserror::Error;

use crate::domain::value_objects::{Environment, Environments};

/// Snapshot construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// A flag points at a version the item does not have
    #[error("{environment} points at version {version}, which is not a known version")]
    UnknownVersion {
        environment: Environment,
        version: u32,
    },
}

/// Published-environment snapshot of one item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedEnvironments {
    live: u32,
    accept: u32,
    test: u32,
    versions: Vec<u32>,
}

impl PublishedEnvironments {
    /// Build a snapshot from explicit pointers.
    ///
    /// Every non-zero pointer must be one of `versions`.
    pub fn try_new(
        live: u32,
        accept: u32,
        test: u32,
        versions: impl IntoIterator<Item = u32>,
    ) -> Result<Self, SnapshotError> {
        let mut versions: Vec<u32> = versions.into_iter().collect();
        versions.sort_unstable();
        versions.dedup();

        let snapshot = Self {
            live,
            accept,
            test,
            versions,
        };

        for environment in Environment::ORDERED {
            let version = snapshot.version_for(environment);
            if version != 0 && snapshot.versions.binary_search(&version).is_err() {
                return Err(SnapshotError::UnknownVersion {
                    environment,
                    version,
                });
            }
        }

        Ok(snapshot)
    }

    /// Derive the snapshot from a `version -> bitmask` mapping.
    ///
    /// Input order does not matter. Unpublished versions carry no flag but
    /// still appear in the version list. If two versions claim the same flag
    /// the last one seen wins.
    pub fn from_version_map<I>(versions_and_published: I) -> Self
    where
        I: IntoIterator<Item = (u32, Environments)>,
    {
        let mut snapshot = Self::default();

        for (version, published) in versions_and_published {
            snapshot.versions.push(version);
            if published.is_empty() {
                continue;
            }
            for environment in published.iter() {
                *snapshot.pointer_mut(environment) = version;
            }
        }

        snapshot.versions.sort_unstable();
        snapshot.versions.dedup();
        snapshot
    }

    pub fn live_version(&self) -> u32 {
        self.live
    }

    pub fn accept_version(&self) -> u32 {
        self.accept
    }

    pub fn test_version(&self) -> u32 {
        self.test
    }

    /// Version currently holding `environment` (0 if none)
    pub fn version_for(&self, environment: Environment) -> u32 {
        match environment {
            Environment::Test => self.test,
            Environment::Acceptance => self.accept,
            Environment::Live => self.live,
        }
    }

    /// All known versions, ascending
    pub fn versions(&self) -> &[u32] {
        &self.versions
    }

    pub fn latest_version(&self) -> Option<u32> {
        self.versions.last().copied()
    }

    fn pointer_mut(&mut self, environment: Environment) -> &mut u32 {
        match environment {
            Environment::Test => &mut self.test,
            Environment::Acceptance => &mut self.accept,
            Environment::Live => &mut self.live,
        }
    }
}
