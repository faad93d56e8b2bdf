//! Publish Options
//!
//! Request type for the publish use case.

use crate::domain::value_objects::ItemKind;

/// A request to publish one version of an item to an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub kind: ItemKind,
    pub item_id: u64,
    pub version: u32,
    /// Raw environment token (`test`, `accept` or `live`)
    pub environment: String,
    /// User recorded in the audit trail
    pub user: String,
    /// Compute the outcome without writing anything
    pub dry_run: bool,
}

impl PublishRequest {
    pub fn new(kind: ItemKind, item_id: u64, version: u32, environment: impl Into<String>) -> Self {
        Self {
            kind,
            item_id,
            version,
            environment: environment.into(),
            user: "unknown".to_string(),
            dry_run: false,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
