//! PublishStoreRepository port - abstraction for publish store persistence
//!
//! Lets the application layer read and write items and the audit trail
//! without knowing the on-disk format.

use std::path::PathBuf;

use crate::domain::entities::PublishStore;

/// Publish store operation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access publish store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize publish store: {message}")]
    SerializationError { message: String },

    #[error(
        "publish store corrupted: {}\n  → Fix: restore it from a backup or move it aside\n  → Details: {message}",
        path.display()
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("publish store format incompatible: found version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Abstract repository for the publish store
///
/// Implemented by the infrastructure layer.
pub trait PublishStoreRepository {
    /// Load the store, or an empty one if nothing has been saved yet
    fn load(&self) -> Result<PublishStore, StoreError>;

    /// Persist the whole store
    fn save(&self, store: &PublishStore) -> Result<(), StoreError>;

    /// Read-modify-write the store as one unit.
    ///
    /// The store is saved only when `f` succeeds. Implementations that can be
    /// shared between processes hold an exclusive lock for the duration.
    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut PublishStore) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut store = self.load()?;
        let value = f(&mut store)?;
        self.save(&store)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ItemKind;
    use std::cell::RefCell;

    struct MemoryRepository {
        store: RefCell<PublishStore>,
        saves: RefCell<usize>,
    }

    impl PublishStoreRepository for MemoryRepository {
        fn load(&self) -> Result<PublishStore, StoreError> {
            Ok(self.store.borrow().clone())
        }

        fn save(&self, store: &PublishStore) -> Result<(), StoreError> {
            *self.store.borrow_mut() = store.clone();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn repo() -> MemoryRepository {
        MemoryRepository {
            store: RefCell::new(PublishStore::new()),
            saves: RefCell::new(0),
        }
    }

    #[test]
    fn transaction_saves_on_success() {
        let repo = repo();
        let version: Result<Option<u32>, StoreError> = repo.transaction(|store| {
            Ok(store.item_or_insert(ItemKind::Template, 1).create_version())
        });

        assert_eq!(version, Ok(Some(1)));
        assert_eq!(*repo.saves.borrow(), 1);
        assert!(repo.store.borrow().item(ItemKind::Template, 1).is_some());
    }

    #[test]
    fn transaction_discards_on_error() {
        let repo = repo();
        let result: Result<(), StoreError> = repo.transaction(|store| {
            store.item_or_insert(ItemKind::Template, 1).create_version();
            Err(StoreError::AccessError {
                message: "boom".to_string(),
            })
        });

        assert!(result.is_err());
        assert_eq!(*repo.saves.borrow(), 0);
        assert!(repo.store.borrow().is_empty());
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::VersionMismatch {
            found: 9,
            expected: 1,
        };
        assert!(err.to_string().contains("found version 9"));

        let err = StoreError::Corrupted {
            path: PathBuf::from("wiser.toml"),
            message: "bad toml".to_string(),
        };
        assert!(err.to_string().contains("wiser.toml"));
        assert!(err.to_string().contains("bad toml"));
    }
}
