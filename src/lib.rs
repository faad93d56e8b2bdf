//! Wiser - version publishing across Test, Acceptance and Live
//!
//! Templates and dynamic content components are versioned. Publishing a
//! version to an environment moves that environment's flag to it, and lower
//! environments follow when they would otherwise serve an older version.
//! Every publish is written to an audit trail.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    HistoryUseCase, ItemStatus, PublishOutcome, PublishRequest, PublishUseCase, StatusUseCase,
    VersionUseCase,
};
pub use config::Config;
pub use domain::entities::{PublishDeltas, PublishLogEntry, PublishedEnvironments};
pub use domain::services::{build_audit_log, compute_deltas};
pub use domain::value_objects::{Environment, Environments, ItemKind};
pub use error::{WiserError, WiserResult};
