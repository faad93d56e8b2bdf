//! Event Sink Implementations
//!
//! Provides concrete implementations of PublishEventSink:
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::JsonEventSink;
