//! Domain Entities
//!
//! Core business objects of the publish flow.

mod item;
mod publish_deltas;
mod publish_log;
mod publish_store;
mod published_environments;

pub use item::{ApplyError, Item};
pub use publish_deltas::PublishDeltas;
pub use publish_log::{PublishLogEntry, PublishRecord};
pub use publish_store::{PublishStore, STORE_FORMAT_VERSION};
pub use published_environments::{PublishedEnvironments, SnapshotError};
