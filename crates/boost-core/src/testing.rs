//! In-memory collaborators for unit tests.

use crate::activity::{Activity, ActivityLog};
use crate::remote::{Clock, EventSource, ReactionSink};
use crate::types::{Event, EventId};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("simulated fault: {0}")]
pub struct FakeError(pub &'static str);

/// Scripted event source and reaction sink.
///
/// `fetch` pops queued batches in order and returns an empty batch once the
/// queue is drained.
#[derive(Default)]
pub struct FakeRemote {
    batches: Mutex<VecDeque<Result<Vec<Event>, FakeError>>>,
    snapshot: Mutex<Option<Result<Vec<Event>, FakeError>>>,
    snapshot_calls: Mutex<usize>,
    fetched_since: Mutex<Vec<Option<EventId>>>,
    failing_items: Mutex<HashSet<String>>,
    reactions: Mutex<Vec<String>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(&self, batch: Result<Vec<Event>, FakeError>) {
        self.batches.lock().unwrap().push_back(batch);
    }

    pub fn set_snapshot(&self, snapshot: Result<Vec<Event>, FakeError>) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn fail_reaction_for(&self, item_id: &str) {
        self.failing_items.lock().unwrap().insert(item_id.to_string());
    }

    pub fn snapshot_calls(&self) -> usize {
        *self.snapshot_calls.lock().unwrap()
    }

    pub fn fetched_since(&self) -> Vec<Option<EventId>> {
        self.fetched_since.lock().unwrap().clone()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.reactions.lock().unwrap().clone()
    }
}

impl EventSource for FakeRemote {
    type Error = FakeError;

    async fn fetch(&self, since: Option<&EventId>) -> Result<Vec<Event>, FakeError> {
        self.fetched_since.lock().unwrap().push(since.cloned());
        self.batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_latest(&self) -> Result<Vec<Event>, FakeError> {
        *self.snapshot_calls.lock().unwrap() += 1;
        self.snapshot
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

impl ReactionSink for FakeRemote {
    type Error = FakeError;

    async fn perform_reaction(&self, item_id: &str) -> Result<(), FakeError> {
        if self.failing_items.lock().unwrap().contains(item_id) {
            return Err(FakeError("reblog rejected"));
        }
        self.reactions.lock().unwrap().push(item_id.to_string());
        Ok(())
    }
}

/// A clock that only moves when told to.
pub struct ManualClock(Mutex<f64>);

impl ManualClock {
    pub fn at(now: f64) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, secs: f64) {
        *self.0.lock().unwrap() += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        *self.0.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingLog(Mutex<Vec<Activity>>);

impl RecordingLog {
    pub fn entries(&self) -> Vec<Activity> {
        self.0.lock().unwrap().clone()
    }
}

impl ActivityLog for RecordingLog {
    fn record(&self, activity: &Activity) {
        self.0.lock().unwrap().push(activity.clone());
    }
}
