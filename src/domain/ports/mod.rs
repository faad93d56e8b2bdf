//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod publish_events;
pub mod publish_store_repository;

pub use publish_events::{NoopEventSink, PublishEvent, PublishEventSink};
pub use publish_store_repository::{PublishStoreRepository, StoreError};
