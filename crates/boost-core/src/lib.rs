//! Core of the boost agent: the durable cursor, per-actor rate limit and
//! dedup state machine, and the poll loop that drives it.
//!
//! ```text
//! StateStore ── load/save (atomic) ──► StateDocument
//!                                         │
//! Agent::run_cycle:  prune ─► cursor::initialize / EventSource::fetch
//!                    ─► cursor::advance ─► policy::should_act
//!                    ─► ReactionSink::perform_reaction ─► StateStore::save
//! ```

pub mod activity;
pub mod config;
pub mod cursor;
pub mod error;
pub mod io;
pub mod orchestrator;
pub mod policy;
pub mod prune;
pub mod remote;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use activity::{Activity, ActivityLog, TracingActivityLog, ACTION_TARGET};
pub use config::AgentConfig;
pub use error::{BoostError, Result};
pub use orchestrator::{Agent, CycleOutcome, Phase};
pub use policy::Decision;
pub use remote::{Clock, EventSource, ReactionSink, SystemClock};
pub use state::{StateDocument, StateStore};
pub use types::{Event, EventId, EventKind, Item};
