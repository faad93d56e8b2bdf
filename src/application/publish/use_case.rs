//! Publish Use Case
//!
//! Orchestrates the publish flow:
//! 1. Parse the environment (an invalid name fails before any I/O)
//! 2. Read the item's versions and build the snapshot
//! 3. Compute the deltas and the audit entry
//! 4. Apply the deltas and append the audit record
//! 5. Persist steps 2-4 as one unit
//!
//! This use case is pure orchestration - the cascade rules live in
//! `domain::services`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{PublishRecord, PublishStore};
use crate::domain::ports::{NoopEventSink, PublishEvent, PublishEventSink, PublishStoreRepository};
use crate::domain::services::{build_audit_log, compute_deltas};
use crate::domain::value_objects::Environment;
use crate::error::{WiserError, WiserResult};

use super::options::PublishRequest;
use super::result::PublishOutcome;

/// Publish use case - parameterized by its store repository
pub struct PublishUseCase<R>
where
    R: PublishStoreRepository,
{
    repo: R,
    clock: fn() -> DateTime<Utc>,
}

impl<R> PublishUseCase<R>
where
    R: PublishStoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: Utc::now,
        }
    }

    /// Replace the clock used to timestamp audit records
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Execute the publish use case
    pub fn execute(&self, request: &PublishRequest) -> WiserResult<PublishOutcome> {
        self.execute_with_events(request, Arc::new(NoopEventSink))
    }

    /// Execute the publish use case with event reporting
    pub fn execute_with_events(
        &self,
        request: &PublishRequest,
        event_sink: Arc<dyn PublishEventSink>,
    ) -> WiserResult<PublishOutcome> {
        let result = self.run(request, event_sink.as_ref());

        match &result {
            Ok(outcome) => {
                if event_sink.wants_detailed_events() {
                    event_sink.on_event(PublishEvent::DeltasComputed {
                        deltas: outcome.deltas.iter().collect(),
                    });
                    event_sink.on_event(PublishEvent::Applied {
                        changed_versions: outcome.changed_versions(),
                    });
                    event_sink.on_event(PublishEvent::Logged {
                        entry: outcome.entry,
                    });
                }
                event_sink.on_event(PublishEvent::Completed {
                    kind: outcome.kind,
                    item_id: outcome.item_id,
                    dry_run: outcome.dry_run,
                });
            }
            Err(err) => event_sink.on_event(PublishEvent::Failed {
                error: err.to_string(),
            }),
        }

        result
    }

    fn run(
        &self,
        request: &PublishRequest,
        event_sink: &dyn PublishEventSink,
    ) -> WiserResult<PublishOutcome> {
        let environment = Environment::parse(&request.environment)?;

        event_sink.on_event(PublishEvent::Started {
            kind: request.kind,
            item_id: request.item_id,
            version: request.version,
            environment,
        });

        let published_at = (self.clock)();

        if request.dry_run {
            let mut store = self.repo.load()?;
            return publish_in(&mut store, request, environment, published_at);
        }

        self.repo
            .transaction(|store| publish_in(store, request, environment, published_at))
    }
}

/// Apply one publish to an in-memory store
fn publish_in(
    store: &mut PublishStore,
    request: &PublishRequest,
    environment: Environment,
    published_at: DateTime<Utc>,
) -> WiserResult<PublishOutcome> {
    let item = store
        .item_mut(request.kind, request.item_id)
        .ok_or(WiserError::UnknownItem {
            kind: request.kind,
            id: request.item_id,
        })?;

    if !item.has_version(request.version) {
        return Err(WiserError::UnknownVersion {
            kind: request.kind,
            id: request.item_id,
            version: request.version,
        });
    }

    let before = item.published_environments();
    let deltas = compute_deltas(&before, request.version, environment);
    item.apply_deltas(&deltas)?;
    let after = item.published_environments();

    let entry = build_audit_log(request.item_id, &before, &deltas);
    store.append_record(PublishRecord::new(
        request.kind,
        entry,
        published_at,
        request.user.clone(),
    ));

    Ok(PublishOutcome {
        kind: request.kind,
        item_id: request.item_id,
        version: request.version,
        environment,
        before,
        after,
        deltas,
        entry,
        published_at,
        published_by: request.user.clone(),
        dry_run: request.dry_run,
    })
}
