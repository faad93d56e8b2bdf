//! TOML Publish Store Repository
//!
//! Persists items, versions and the audit trail in a single TOML file
//! (default `.wiser/publish.toml`). Writes go through a temp file that is
//! renamed over the store; read-modify-write cycles hold an exclusive lock
//! on a sibling `.lock` file.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Item, PublishLogEntry, PublishRecord, PublishStore, STORE_FORMAT_VERSION,
};
use crate::domain::ports::{PublishStoreRepository, StoreError};
use crate::domain::value_objects::{Environment, Environments, ItemKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlVersion {
    version: u32,
    #[serde(default)]
    published_environment: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlItem {
    kind: ItemKind,
    id: u64,
    #[serde(default)]
    versions: Vec<TomlVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLogRecord {
    kind: ItemKind,
    item_id: u64,
    #[serde(default)]
    old_live: u32,
    #[serde(default)]
    old_accept: u32,
    #[serde(default)]
    old_test: u32,
    #[serde(default)]
    new_live: u32,
    #[serde(default)]
    new_accept: u32,
    #[serde(default)]
    new_test: u32,
    published_at: DateTime<Utc>,
    published_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlStore {
    version: u32,
    #[serde(default)]
    items: Vec<TomlItem>,
    #[serde(default)]
    log: Vec<TomlLogRecord>,
}

/// TOML-based publish store repository
pub struct TomlPublishStoreRepository {
    path: PathBuf,
}

impl TomlPublishStoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn access_error(e: impl std::fmt::Display) -> StoreError {
        StoreError::AccessError {
            message: e.to_string(),
        }
    }

    fn lock(&self) -> Result<fs::File, StoreError> {
        fs::create_dir_all(self.parent_dir()).map_err(Self::access_error)?;
        let lock_file = fs::File::create(self.lock_path()).map_err(Self::access_error)?;
        lock_file.lock_exclusive().map_err(Self::access_error)?;
        Ok(lock_file)
    }

    fn load_from_disk(&self) -> Result<PublishStore, StoreError> {
        if !self.path.exists() {
            return Ok(PublishStore::new());
        }

        let content = fs::read_to_string(&self.path).map_err(Self::access_error)?;
        let toml_store: TomlStore =
            toml::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if toml_store.version != STORE_FORMAT_VERSION {
            return Err(StoreError::VersionMismatch {
                found: toml_store.version,
                expected: STORE_FORMAT_VERSION,
            });
        }

        from_toml(toml_store).map_err(|message| StoreError::Corrupted {
            path: self.path.clone(),
            message,
        })
    }

    fn save_to_disk(&self, store: &PublishStore) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(Self::access_error)?;

        let content =
            toml::to_string_pretty(&to_toml(store)).map_err(|e| StoreError::SerializationError {
                message: e.to_string(),
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(Self::access_error)?;
        tmp.write_all(content.as_bytes())
            .map_err(Self::access_error)?;
        tmp.as_file().sync_all().map_err(Self::access_error)?;
        tmp.persist(&self.path)
            .map_err(|e| Self::access_error(e.error))?;

        Ok(())
    }
}

impl PublishStoreRepository for TomlPublishStoreRepository {
    fn load(&self) -> Result<PublishStore, StoreError> {
        self.load_from_disk()
    }

    fn save(&self, store: &PublishStore) -> Result<(), StoreError> {
        let lock_file = self.lock()?;
        let result = self.save_to_disk(store);
        let _ = lock_file.unlock();
        result
    }

    fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut PublishStore) -> Result<T, E>,
        E: From<StoreError>,
    {
        let lock_file = self.lock()?;

        let result = self
            .load_from_disk()
            .map_err(E::from)
            .and_then(|mut store| {
                let value = f(&mut store)?;
                self.save_to_disk(&store)?;
                Ok(value)
            });

        let _ = lock_file.unlock();
        result
    }
}

fn from_toml(toml_store: TomlStore) -> Result<PublishStore, String> {
    let mut store = PublishStore::new();

    for item in toml_store.items {
        let mut versions = BTreeMap::new();
        let mut held = Environments::NONE;
        for v in item.versions {
            if v.version == 0 {
                return Err(format!(
                    "{} {} has version 0, which is reserved for \"no version\"",
                    item.kind, item.id
                ));
            }
            let published = Environments::from_bits(i32::from(v.published_environment))
                .ok_or_else(|| {
                    format!(
                        "{} {} version {} has invalid published_environment {}",
                        item.kind, item.id, v.version, v.published_environment
                    )
                })?;
            if let Some(env) = published.iter().find(|env| held.contains(*env)) {
                return Err(format!(
                    "{} {} has more than one version published to {}",
                    item.kind, item.id, env
                ));
            }
            if versions.insert(v.version, published).is_some() {
                return Err(format!(
                    "{} {} lists version {} more than once",
                    item.kind, item.id, v.version
                ));
            }
            held = held | published;
        }
        store.insert_item(Item::with_versions(item.kind, item.id, versions));
    }

    for record in toml_store.log {
        let entry = PublishLogEntry::new(
            record.item_id,
            record.old_live,
            record.old_accept,
            record.old_test,
        )
        .with_new(Environment::Live, record.new_live)
        .with_new(Environment::Acceptance, record.new_accept)
        .with_new(Environment::Test, record.new_test);

        store.append_record(PublishRecord::new(
            record.kind,
            entry,
            record.published_at,
            record.published_by,
        ));
    }

    Ok(store)
}

fn to_toml(store: &PublishStore) -> TomlStore {
    let items = store
        .items()
        .map(|item| TomlItem {
            kind: item.kind(),
            id: item.id(),
            versions: item
                .versions()
                .map(|(version, published)| TomlVersion {
                    version,
                    published_environment: published.bits(),
                })
                .collect(),
        })
        .collect();

    let log = store
        .records()
        .iter()
        .map(|record| {
            let entry = record.entry();
            TomlLogRecord {
                kind: record.kind(),
                item_id: entry.item_id(),
                old_live: entry.old_live(),
                old_accept: entry.old_accept(),
                old_test: entry.old_test(),
                new_live: entry.new_live(),
                new_accept: entry.new_accept(),
                new_test: entry.new_test(),
                published_at: record.published_at(),
                published_by: record.published_by().to_string(),
            }
        })
        .collect();

    TomlStore {
        version: store.version(),
        items,
        log,
    }
}
