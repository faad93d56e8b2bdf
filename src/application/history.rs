//! History Use Case
//!
//! Reads the audit trail of one item.

use crate::domain::entities::PublishRecord;
use crate::domain::ports::PublishStoreRepository;
use crate::domain::value_objects::ItemKind;
use crate::error::WiserResult;

pub struct HistoryUseCase<R>
where
    R: PublishStoreRepository,
{
    repo: R,
}

impl<R> HistoryUseCase<R>
where
    R: PublishStoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records of an item, newest first, at most `limit` of them.
    ///
    /// An item that was never published has an empty history.
    pub fn execute(
        &self,
        kind: ItemKind,
        item_id: u64,
        limit: Option<usize>,
    ) -> WiserResult<Vec<PublishRecord>> {
        let store = self.repo.load()?;
        let records = store
            .history(kind, item_id)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PublishLogEntry, PublishStore};
    use crate::domain::ports::StoreError;
    use crate::domain::value_objects::Environment;
    use chrono::{TimeZone, Utc};

    struct FixedRepo(PublishStore);

    impl PublishStoreRepository for FixedRepo {
        fn load(&self) -> Result<PublishStore, StoreError> {
            Ok(self.0.clone())
        }

        fn save(&self, _store: &PublishStore) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn store_with_three_publishes() -> PublishStore {
        let mut store = PublishStore::new();
        for version in 1..=3 {
            store.append_record(PublishRecord::new(
                ItemKind::Template,
                PublishLogEntry::new(5, 0, 0, version - 1).with_new(Environment::Test, version),
                Utc.with_ymd_and_hms(2024, 3, version, 9, 0, 0).unwrap(),
                "alice",
            ));
        }
        store.append_record(PublishRecord::new(
            ItemKind::DynamicContent,
            PublishLogEntry::new(5, 0, 0, 0).with_new(Environment::Live, 1),
            Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap(),
            "bob",
        ));
        store
    }

    #[test]
    fn history_is_newest_first_and_per_kind() {
        let use_case = HistoryUseCase::new(FixedRepo(store_with_three_publishes()));

        let records = use_case.execute(ItemKind::Template, 5, None).unwrap();

        let tests: Vec<u32> = records.iter().map(|r| r.entry().new_test()).collect();
        assert_eq!(tests, vec![3, 2, 1]);
        assert!(records.iter().all(|r| r.published_by() == "alice"));
    }

    #[test]
    fn history_respects_limit() {
        let use_case = HistoryUseCase::new(FixedRepo(store_with_three_publishes()));

        let records = use_case.execute(ItemKind::Template, 5, Some(2)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entry().new_test(), 3);
    }

    #[test]
    fn history_of_unknown_item_is_empty() {
        let use_case = HistoryUseCase::new(FixedRepo(store_with_three_publishes()));

        let records = use_case.execute(ItemKind::Template, 99, None).unwrap();

        assert!(records.is_empty());
    }
}
