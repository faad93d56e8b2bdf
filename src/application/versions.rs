//! Version Use Case
//!
//! Adds new, unpublished versions to items.

use crate::domain::ports::PublishStoreRepository;
use crate::domain::value_objects::ItemKind;
use crate::error::{WiserError, WiserResult};

pub struct VersionUseCase<R>
where
    R: PublishStoreRepository,
{
    repo: R,
}

impl<R> VersionUseCase<R>
where
    R: PublishStoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Append version `latest + 1` to an item, creating the item if needed
    pub fn create(&self, kind: ItemKind, item_id: u64) -> WiserResult<u32> {
        self.repo.transaction(|store| {
            store
                .item_or_insert(kind, item_id)
                .create_version()
                .ok_or(WiserError::VersionOverflow { kind, id: item_id })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Item, PublishStore};
    use crate::domain::value_objects::{Environment, Environments};
    use crate::infrastructure::TomlPublishStoreRepository;
    use tempfile::tempdir;

    #[test]
    fn create_starts_new_items_at_version_one() {
        let dir = tempdir().unwrap();
        let repo = TomlPublishStoreRepository::new(dir.path().join("publish.toml"));
        let use_case = VersionUseCase::new(repo);

        assert_eq!(use_case.create(ItemKind::Template, 3).unwrap(), 1);
        assert_eq!(use_case.create(ItemKind::Template, 3).unwrap(), 2);
        assert_eq!(use_case.create(ItemKind::DynamicContent, 3).unwrap(), 1);
    }

    #[test]
    fn created_versions_are_unpublished_and_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("publish.toml");
        let use_case = VersionUseCase::new(TomlPublishStoreRepository::new(&path));

        use_case.create(ItemKind::Template, 8).unwrap();

        let store = TomlPublishStoreRepository::new(&path).load().unwrap();
        let item = store.item(ItemKind::Template, 8).unwrap();
        assert_eq!(item.published(1), Some(Environments::NONE));
        assert_eq!(item.version_in(Environment::Live), None);
    }

    #[test]
    fn create_fails_when_version_numbers_run_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("publish.toml");
        let repo = TomlPublishStoreRepository::new(&path);
        let mut store = PublishStore::new();
        store.insert_item(Item::with_versions(
            ItemKind::Template,
            1,
            [(u32::MAX, Environments::NONE)],
        ));
        repo.save(&store).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = VersionUseCase::new(repo)
            .create(ItemKind::Template, 1)
            .unwrap_err();

        assert!(matches!(
            err,
            WiserError::VersionOverflow {
                kind: ItemKind::Template,
                id: 1
            }
        ));
        assert_eq!(err.to_string(), "template 1 has no version numbers left");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
