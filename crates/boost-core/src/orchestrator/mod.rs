//! The poll loop.
//!
//! One [`Agent`] owns the in-memory [`StateDocument`](crate::state::StateDocument)
//! and drives `prune → fetch → process → persist → sleep` until told to stop.
//! Each cycle works on a copy of the document and only commits it once the
//! fetch succeeded, so a failed fetch leaves state exactly as it was.

pub mod agent;


pub use agent::{Agent, CycleOutcome, Phase};
