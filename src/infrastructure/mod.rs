//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Publish store persistence (TOML)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod repositories;

pub use events::JsonEventSink;
pub use repositories::TomlPublishStoreRepository;
