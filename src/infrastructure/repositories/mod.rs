//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod publish_store;

pub use publish_store::TomlPublishStoreRepository;
