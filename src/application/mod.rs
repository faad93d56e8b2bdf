//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PublishUseCase` - Publish a version to an environment (snapshot, deltas, apply, audit)
//! - `StatusUseCase` - Which version serves each environment
//! - `HistoryUseCase` - Audit trail of an item, newest first
//! - `VersionUseCase` - Add new versions to an item

pub mod history;
pub mod publish;
pub mod status;
pub mod versions;

pub use history::HistoryUseCase;
pub use publish::{PublishOutcome, PublishRequest, PublishUseCase};
pub use status::{ItemStatus, StatusUseCase};
pub use versions::VersionUseCase;
