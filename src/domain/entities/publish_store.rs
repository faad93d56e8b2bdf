//! PublishStore entity - every item plus the publish audit trail
//!
//! A pure data structure; `PublishStoreRepository` loads and saves it.

use std::collections::BTreeMap;

use crate::domain::entities::{Item, PublishRecord};
use crate::domain::value_objects::ItemKind;

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PublishStore {
    version: u32,
    items: BTreeMap<(ItemKind, u64), Item>,
    records: Vec<PublishRecord>,
}

impl Default for PublishStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishStore {
    pub fn new() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            items: BTreeMap::new(),
            records: Vec::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.records.is_empty()
    }

    pub fn item(&self, kind: ItemKind, id: u64) -> Option<&Item> {
        self.items.get(&(kind, id))
    }

    pub fn item_mut(&mut self, kind: ItemKind, id: u64) -> Option<&mut Item> {
        self.items.get_mut(&(kind, id))
    }

    /// Get an item, creating an empty one if missing
    pub fn item_or_insert(&mut self, kind: ItemKind, id: u64) -> &mut Item {
        self.items
            .entry((kind, id))
            .or_insert_with(|| Item::new(kind, id))
    }

    /// Insert or replace an item
    pub fn insert_item(&mut self, item: Item) {
        self.items.insert((item.kind(), item.id()), item);
    }

    /// All items, ordered by kind then id
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Append to the audit trail. Records are never edited afterwards.
    pub fn append_record(&mut self, record: PublishRecord) {
        self.records.push(record);
    }

    /// Whole audit trail, oldest first
    pub fn records(&self) -> &[PublishRecord] {
        &self.records
    }

    /// Audit trail of one item, newest first
    pub fn history(&self, kind: ItemKind, id: u64) -> Vec<&PublishRecord> {
        self.records
            .iter()
            .rev()
            .filter(|record| record.kind() == kind && record.item_id() == id)
            .collect()
    }
}
