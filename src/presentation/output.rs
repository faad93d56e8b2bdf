//! Output Rendering
//!
//! Human-readable text for the terminal and JSON documents for scripting.
//! Renderers return strings; the binary decides where they go.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::application::{ItemStatus, PublishOutcome};
use crate::config::Verbosity;
use crate::domain::entities::{PublishRecord, PublishedEnvironments};
use crate::domain::value_objects::{Environment, ItemKind};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    arrow: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            arrow: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            arrow: "->",
            skip: "[ ]",
        }
    }
}

/// Environments top-down, the way people read a release pipeline
const TOP_DOWN: [Environment; 3] = [
    Environment::Live,
    Environment::Acceptance,
    Environment::Test,
];

/// Text renderer for command results
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    pub verbosity: Verbosity,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    pub fn publish(&self, outcome: &PublishOutcome) -> String {
        let icons = self.icons();
        let mut lines = Vec::new();

        let subject = format!(
            "{} {} version {}",
            outcome.kind, outcome.item_id, outcome.version
        );
        if outcome.dry_run {
            lines.push(format!(
                "{} Dry run: {} {} {} (store not written)",
                icons.skip,
                subject,
                icons.arrow,
                outcome.environment.display_name()
            ));
        } else if outcome.is_noop() {
            lines.push(format!(
                "{} {} already serves {}",
                icons.check,
                subject,
                outcome.environment.display_name()
            ));
        } else {
            lines.push(format!(
                "{} Published {} to {}",
                icons.check,
                subject,
                outcome.environment.display_name()
            ));
        }

        if self.verbosity == Verbosity::Quiet {
            return lines.join("\n");
        }

        for env in TOP_DOWN {
            let old = outcome.before.version_for(env);
            let new = outcome.after.version_for(env);
            if old == new {
                lines.push(format!("  {:<11} {}", env.display_name(), pointer(new)));
            } else {
                lines.push(format!(
                    "  {:<11} {} {} {}",
                    env.display_name(),
                    pointer(old),
                    icons.arrow,
                    pointer(new)
                ));
            }
        }

        let cascaded = outcome.cascaded();
        if !cascaded.is_empty() {
            let names: Vec<&str> = cascaded.iter().map(|env| env.display_name()).collect();
            lines.push(format!("  Cascaded to: {}", names.join(", ")));
        }

        if self.verbosity >= Verbosity::Verbose {
            lines.push("  Deltas:".to_string());
            for (version, delta) in outcome.deltas.iter() {
                lines.push(format!("    v{}: {:+}", version, delta));
            }
            lines.push(format!(
                "  Logged by {} at {}",
                outcome.published_by,
                timestamp(outcome.published_at)
            ));
        }

        lines.join("\n")
    }

    pub fn status(&self, status: &ItemStatus) -> String {
        let mut lines = vec![format!(
            "{} {}",
            status.kind.display_name(),
            status.item_id
        )];

        for env in TOP_DOWN {
            lines.push(format!(
                "  {:<11} {}",
                env.display_name(),
                pointer(status.snapshot.version_for(env))
            ));
        }

        if self.verbosity >= Verbosity::Verbose || status.versions.len() <= 10 {
            let versions: Vec<String> = status
                .versions
                .iter()
                .map(|(version, published)| format!("{} [{}]", version, published))
                .collect();
            lines.push(format!("  Versions: {}", versions.join(" ")));
        } else {
            lines.push(format!(
                "  Versions: {} (latest {})",
                status.versions.len(),
                pointer(status.latest_version().unwrap_or(0))
            ));
        }

        lines.join("\n")
    }

    pub fn history(&self, kind: ItemKind, item_id: u64, records: &[PublishRecord]) -> String {
        if records.is_empty() {
            return format!("No publish history for {} {}", kind, item_id);
        }

        records
            .iter()
            .map(|record| {
                format!(
                    "{}  {}  {}",
                    timestamp(record.published_at()),
                    record.published_by(),
                    record.entry()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn new_version(&self, kind: ItemKind, item_id: u64, version: u32) -> String {
        format!(
            "{} Created {} {} version {}",
            self.icons().check,
            kind,
            item_id,
            version
        )
    }
}

fn pointer(version: u32) -> String {
    if version == 0 {
        "-".to_string()
    } else {
        format!("v{}", version)
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn snapshot_json(snapshot: &PublishedEnvironments) -> Value {
    json!({
        "live": snapshot.live_version(),
        "accept": snapshot.accept_version(),
        "test": snapshot.test_version(),
    })
}

/// JSON document for a publish (dry runs included)
pub fn publish_json(outcome: &PublishOutcome) -> Value {
    json!({
        "kind": outcome.kind.as_str(),
        "item_id": outcome.item_id,
        "version": outcome.version,
        "environment": outcome.environment.as_str(),
        "dry_run": outcome.dry_run,
        "before": snapshot_json(&outcome.before),
        "after": snapshot_json(&outcome.after),
        "deltas": outcome
            .deltas
            .iter()
            .map(|(version, delta)| json!({ "version": version, "delta": delta }))
            .collect::<Vec<_>>(),
        "published_by": outcome.published_by,
        "published_at": outcome.published_at.to_rfc3339(),
    })
}

pub fn status_json(status: &ItemStatus) -> Value {
    json!({
        "kind": status.kind.as_str(),
        "item_id": status.item_id,
        "environments": snapshot_json(&status.snapshot),
        "versions": status
            .versions
            .iter()
            .map(|(version, published)| json!({
                "version": version,
                "published_environment": published.bits(),
            }))
            .collect::<Vec<_>>(),
    })
}

pub fn history_json(kind: ItemKind, item_id: u64, records: &[PublishRecord]) -> Value {
    json!({
        "kind": kind.as_str(),
        "item_id": item_id,
        "records": records
            .iter()
            .map(|record| {
                let entry = record.entry();
                json!({
                    "published_at": record.published_at().to_rfc3339(),
                    "published_by": record.published_by(),
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
            })
            .collect::<Vec<_>>(),
    })
}

pub fn new_version_json(kind: ItemKind, item_id: u64, version: u32) -> Value {
    json!({
        "kind": kind.as_str(),
        "item_id": item_id,
        "version": version,
    })
}
