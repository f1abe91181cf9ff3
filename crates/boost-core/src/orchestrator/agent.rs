use std::future::Future;

use crate::activity::{Activity, ActivityLog};
use crate::config::AgentConfig;
use crate::cursor::{self, CursorInit};
use crate::error::Result;
use crate::policy::{should_act, Decision};
use crate::prune::prune;
use crate::remote::{Clock, EventSource, ReactionSink};
use crate::state::{StateDocument, StateStore};
use crate::types::{Event, EventId};

// ---------------------------------------------------------------------------
// Phase / CycleOutcome
// ---------------------------------------------------------------------------

/// Where the loop currently is. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Processing,
    Persisting,
    Sleeping,
}

/// What a single cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetch (or the startup snapshot) failed; state untouched.
    FetchFailed,
    /// Cursor jumped past pre-existing events; nothing processed.
    FastForwarded(EventId),
    /// Skip mode waiting for a non-empty snapshot.
    FastForwardDeferred,
    Processed { fetched: usize, acted: usize },
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

pub struct Agent<S, R, C, L> {
    config: AgentConfig,
    store: StateStore,
    doc: StateDocument,
    self_identity: String,
    source: S,
    sink: R,
    clock: C,
    log: L,
    phase: Phase,
}

impl<S, R, C, L> Agent<S, R, C, L>
where
    S: EventSource,
    R: ReactionSink,
    C: Clock,
    L: ActivityLog,
{
    /// Build an agent around an already loaded document.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: AgentConfig,
        store: StateStore,
        doc: StateDocument,
        self_identity: impl Into<String>,
        source: S,
        sink: R,
        clock: C,
        log: L,
    ) -> Self {
        Self {
            config,
            store,
            doc,
            self_identity: self_identity.into(),
            source,
            sink,
            clock,
            log,
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> &StateDocument {
        &self.doc
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run cycles until `shutdown` resolves. Shutdown is only observed while
    /// sleeping between cycles; a cycle in progress always completes.
    ///
    /// Returns an error only for fatal faults (a failed save).
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            self.run_cycle().await?;

            self.phase = Phase::Sleeping;
            tokio::select! {
                _ = &mut shutdown => {
                    self.phase = Phase::Idle;
                    tracing::info!("shutdown requested; stopping between cycles");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
            self.phase = Phase::Idle;
        }
    }

    /// One pass of `prune → fetch → process → persist`.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let min_interval = self.config.min_interval_secs();

        self.phase = Phase::Fetching;
        let mut next = self.doc.clone();
        let removed = prune(&mut next, self.clock.now(), min_interval);
        if removed > 0 {
            self.log.record(&Activity::Pruned { removed });
        }

        match cursor::initialize(&mut next, self.config.skip_existing, &self.source).await {
            Err(e) => return Ok(self.fetch_failed(e)),
            Ok(CursorInit::FastForwarded(cursor)) => {
                self.doc = next;
                self.persist()?;
                self.log.record(&Activity::FastForwarded {
                    cursor: cursor.clone(),
                });
                self.phase = Phase::Idle;
                return Ok(CycleOutcome::FastForwarded(cursor));
            }
            Ok(CursorInit::Deferred) => {
                self.doc = next;
                self.log.record(&Activity::FastForwardDeferred);
                self.phase = Phase::Idle;
                return Ok(CycleOutcome::FastForwardDeferred);
            }
            Ok(CursorInit::Resumed | CursorInit::FromBeginning) => {}
        }

        let since = next.last_event_id.clone();
        let mut events = match self.source.fetch(since.as_ref()).await {
            Ok(events) => events,
            Err(e) => return Ok(self.fetch_failed(e)),
        };
        self.log.record(&Activity::Fetched {
            count: events.len(),
            since,
        });

        self.phase = Phase::Processing;
        events.sort_by(|a, b| a.id.cmp(&b.id));
        let mut acted = 0;
        for event in &events {
            if cursor::advance(&mut next, &event.id) {
                self.log.record(&Activity::CursorAdvanced {
                    event_id: event.id.clone(),
                });
            }
            if self.process(&mut next, event, min_interval).await {
                acted += 1;
            }
        }
        self.doc = next;

        if !events.is_empty() {
            self.persist()?;
        }
        self.phase = Phase::Idle;
        Ok(CycleOutcome::Processed {
            fetched: events.len(),
            acted,
        })
    }

    /// Apply the policy to one event and react if allowed. Returns `true`
    /// when a reaction succeeded and was recorded.
    async fn process(&self, doc: &mut StateDocument, event: &Event, min_interval: f64) -> bool {
        let now = self.clock.now();
        let decision = should_act(event, doc, &self.self_identity, now, min_interval);

        let (Decision::Act, Some(item_id), Some(actor)) = (decision, event.item_id(), event.actor())
        else {
            self.log.record(&Activity::Skipped {
                event_id: event.id.clone(),
                item_id: event.item_id().map(str::to_string),
                actor: event.actor().map(str::to_string),
                decision,
                since_last_action: event
                    .actor()
                    .and_then(|a| doc.last_action_at(a))
                    .map(|last| now - last),
            });
            return false;
        };

        match self.sink.perform_reaction(item_id).await {
            Ok(()) => {
                doc.record_action(actor, item_id, now);
                self.log.record(&Activity::Acted {
                    event_id: event.id.clone(),
                    item_id: item_id.to_string(),
                    actor: actor.to_string(),
                });
                true
            }
            Err(e) => {
                self.log.record(&Activity::ReactionFailed {
                    event_id: event.id.clone(),
                    item_id: item_id.to_string(),
                    actor: actor.to_string(),
                    error: e.to_string(),
                });
                false
            }
        }
    }

    fn fetch_failed(&mut self, error: impl std::fmt::Display) -> CycleOutcome {
        self.log.record(&Activity::FetchFailed {
            error: error.to_string(),
        });
        self.phase = Phase::Idle;
        CycleOutcome::FetchFailed
    }

    fn persist(&mut self) -> Result<()> {
        self.phase = Phase::Persisting;
        self.store.save(&self.doc)?;
        self.log.record(&Activity::Persisted {
            cursor: self.doc.last_event_id.clone(),
        });
        Ok(())
    }
}
