//! Publication calculator
//!
//! Pure domain logic for publishing a version to an environment. Given the
//! current snapshot of an item it works out which bitmasks change and by how
//! much, and what the audit trail should record. No I/O.
//!
//! Publishing to a tier also publishes to every lower tier whose current
//! version is older than the one being published. Each lower tier is compared
//! against its own pointer, independently of the others.

use crate::domain::entities::{PublishDeltas, PublishLogEntry, PublishedEnvironments};
use crate::domain::value_objects::{Environment, Environments};

/// Compute the bitmask deltas for publishing `version` to `environment`.
///
/// Removal deltas are recorded even when they target version 0 or cancel
/// out against the addition (republishing the current holder nets to 0).
pub fn compute_deltas(
    snapshot: &PublishedEnvironments,
    version: u32,
    environment: Environment,
) -> PublishDeltas {
    let mut deltas = PublishDeltas::new();
    let mut to_publish = Environments::from(environment);

    for lower in environment.below() {
        let current = snapshot.version_for(lower);
        if version > current {
            to_publish |= lower;
            deltas.unpublish(current, lower.into());
        }
    }

    deltas.publish(version, to_publish);
    deltas.unpublish(snapshot.version_for(environment), environment.into());

    deltas
}

/// Build the audit entry for a publish action.
///
/// Only positive deltas count as new assignments; a single delta may set
/// several environments at once when the publish cascaded.
pub fn build_audit_log(
    item_id: u64,
    before: &PublishedEnvironments,
    deltas: &PublishDeltas,
) -> PublishLogEntry {
    let mut entry = PublishLogEntry::new(
        item_id,
        before.live_version(),
        before.accept_version(),
        before.test_version(),
    );

    for (version, delta) in deltas.iter().filter(|(_, delta)| *delta > 0) {
        for environment in Environment::ORDERED {
            if delta & i32::from(environment.bit()) != 0 {
                entry = entry.with_new(environment, version);
            }
        }
    }

    entry
}
