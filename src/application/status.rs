//! Status Use Case
//!
//! Reports which version serves each environment of one item.

use crate::domain::entities::PublishedEnvironments;
use crate::domain::ports::PublishStoreRepository;
use crate::domain::value_objects::{Environments, ItemKind};
use crate::error::{WiserError, WiserResult};

/// Current publish state of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStatus {
    pub kind: ItemKind,
    pub item_id: u64,
    pub snapshot: PublishedEnvironments,
    /// Every version with its bitmask, ascending
    pub versions: Vec<(u32, Environments)>,
}

impl ItemStatus {
    pub fn latest_version(&self) -> Option<u32> {
        self.snapshot.latest_version()
    }

    /// Versions newer than what is live
    pub fn unreleased(&self) -> impl Iterator<Item = u32> + '_ {
        let live = self.snapshot.live_version();
        self.versions
            .iter()
            .map(|(version, _)| *version)
            .filter(move |version| *version > live)
    }
}

pub struct StatusUseCase<R>
where
    R: PublishStoreRepository,
{
    repo: R,
}

impl<R> StatusUseCase<R>
where
    R: PublishStoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, kind: ItemKind, item_id: u64) -> WiserResult<ItemStatus> {
        let store = self.repo.load()?;
        let item = store
            .item(kind, item_id)
            .ok_or(WiserError::UnknownItem { kind, id: item_id })?;

        Ok(ItemStatus {
            kind,
            item_id,
            snapshot: item.published_environments(),
            versions: item.versions().collect(),
        })
    }
}
