//! Boundary traits for the collaborators the poll loop drives.
//!
//! The network client lives in another crate; the core only sees these
//! contracts so cycles can run against in-memory fakes.

use crate::types::{Event, EventId};
use std::future::Future;
use std::sync::Arc;

/// Where events come from.
pub trait EventSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Events strictly newer than `since` (all available history when `None`).
    /// Order is not guaranteed.
    fn fetch(
        &self,
        since: Option<&EventId>,
    ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send;

    /// The current snapshot of outstanding events. Used only to fast-forward
    /// the cursor on first start.
    fn fetch_latest(&self) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send;
}

/// The side effect performed for an `Act` decision.
pub trait ReactionSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn perform_reaction(&self, item_id: &str)
        -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Wall-clock source, in seconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

impl<T: EventSource> EventSource for Arc<T> {
    type Error = T::Error;

    fn fetch(
        &self,
        since: Option<&EventId>,
    ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send {
        (**self).fetch(since)
    }

    fn fetch_latest(&self) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send {
        (**self).fetch_latest()
    }
}

impl<T: ReactionSink> ReactionSink for Arc<T> {
    type Error = T::Error;

    fn perform_reaction(
        &self,
        item_id: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).perform_reaction(item_id)
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
