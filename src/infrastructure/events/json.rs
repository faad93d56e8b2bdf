//! JSON Event Sink
//!
//! Outputs publish events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let json = match event {
            PublishEvent::Started {
                kind,
                item_id,
                version,
                environment,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "publish",
                    "kind": kind.as_str(),
                    "item_id": item_id,
                    "version": version,
                    "environment": environment.as_str(),
                })
            }

            PublishEvent::DeltasComputed { deltas } => {
                let deltas: Vec<serde_json::Value> = deltas
                    .into_iter()
                    .map(|(version, delta)| {
                        serde_json::json!({ "version": version, "delta": delta })
                    })
                    .collect();
                serde_json::json!({
                    "event": "deltas",
                    "command": "publish",
                    "deltas": deltas,
                })
            }

            PublishEvent::Applied { changed_versions } => {
                serde_json::json!({
                    "event": "applied",
                    "command": "publish",
                    "changed_versions": changed_versions,
                })
            }

            PublishEvent::Logged { entry } => {
                serde_json::json!({
                    "event": "logged",
                    "command": "publish",
                    "item_id": entry.item_id(),
                    "old": {
                        "live": entry.old_live(),
                        "accept": entry.old_accept(),
                        "test": entry.old_test(),
                    },
                    "new": {
                        "live": entry.new_live(),
                        "accept": entry.new_accept(),
                        "test": entry.new_test(),
                    },
                })
            }

            PublishEvent::Completed {
                kind,
                item_id,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "publish",
                    "status": "success",
                    "kind": kind.as_str(),
                    "item_id": item_id,
                    "dry_run": dry_run,
                })
            }

            PublishEvent::Failed { error } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "publish",
                    "status": "error",
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
