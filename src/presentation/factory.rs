//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{HistoryUseCase, PublishUseCase, StatusUseCase, VersionUseCase};
use crate::infrastructure::TomlPublishStoreRepository;

/// Type alias for the concrete PublishUseCase
pub type ConcretePublishUseCase = PublishUseCase<TomlPublishStoreRepository>;

pub type ConcreteStatusUseCase = StatusUseCase<TomlPublishStoreRepository>;

pub type ConcreteHistoryUseCase = HistoryUseCase<TomlPublishStoreRepository>;

pub type ConcreteVersionUseCase = VersionUseCase<TomlPublishStoreRepository>;

/// Create a publish use case backed by the TOML store at `store`
pub fn create_publish_use_case(store: &Path) -> ConcretePublishUseCase {
    PublishUseCase::new(TomlPublishStoreRepository::new(store))
}

pub fn create_status_use_case(store: &Path) -> ConcreteStatusUseCase {
    StatusUseCase::new(TomlPublishStoreRepository::new(store))
}

pub fn create_history_use_case(store: &Path) -> ConcreteHistoryUseCase {
    HistoryUseCase::new(TomlPublishStoreRepository::new(store))
}

pub fn create_version_use_case(store: &Path) -> ConcreteVersionUseCase {
    VersionUseCase::new(TomlPublishStoreRepository::new(store))
}
