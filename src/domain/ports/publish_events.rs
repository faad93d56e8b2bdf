//! Publish Event Port
//!
//! Provides an observable interface for publish operations.
//! Enables JSON event streams and debugging output.

use crate::domain::entities::PublishLogEntry;
use crate::domain::value_objects::{Environment, ItemKind};

/// Event emitted during publish operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    /// Publish request accepted
    Started {
        kind: ItemKind,
        item_id: u64,
        version: u32,
        environment: Environment,
    },

    /// Deltas computed from the current snapshot
    DeltasComputed { deltas: Vec<(u32, i32)> },

    /// Deltas applied to the item
    Applied { changed_versions: usize },

    /// Audit entry appended
    Logged { entry: PublishLogEntry },

    /// Publish finished
    Completed {
        kind: ItemKind,
        item_id: u64,
        dry_run: bool,
    },

    /// Publish rejected; nothing was written
    Failed { error: String },
}

/// Trait for receiving publish events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PublishEventSink: Send + Sync {
    /// Handle a publish event
    fn on_event(&self, event: PublishEvent);

    /// Check if this sink wants detailed events (deltas, audit entries)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
