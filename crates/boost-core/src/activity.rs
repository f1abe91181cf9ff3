//! Decision records emitted by the poll loop.
//!
//! The loop reports what it did through an [`ActivityLog`] handle it is
//! given at construction. [`TracingActivityLog`] turns records into
//! `tracing` events; action records go to [`ACTION_TARGET`] so a subscriber
//! can route them to their own sink without looking at message text.

use crate::policy::Decision;
use crate::types::EventId;
use std::sync::Arc;

/// `tracing` target carrying only action records.
pub const ACTION_TARGET: &str = "boostbot::action";

#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Pruned {
        removed: usize,
    },
    Fetched {
        count: usize,
        since: Option<EventId>,
    },
    FetchFailed {
        error: String,
    },
    FastForwarded {
        cursor: EventId,
    },
    FastForwardDeferred,
    CursorAdvanced {
        event_id: EventId,
    },
    Skipped {
        event_id: EventId,
        item_id: Option<String>,
        actor: Option<String>,
        decision: Decision,
        /// Seconds since the actor's last recorded action, if any.
        since_last_action: Option<f64>,
    },
    Acted {
        event_id: EventId,
        item_id: String,
        actor: String,
    },
    ReactionFailed {
        event_id: EventId,
        item_id: String,
        actor: String,
        error: String,
    },
    Persisted {
        cursor: Option<EventId>,
    },
}

impl Activity {
    /// `true` for records of a reaction actually performed.
    pub fn is_action_record(&self) -> bool {
        matches!(self, Activity::Acted { .. })
    }
}

pub trait ActivityLog {
    fn record(&self, activity: &Activity);
}

impl<T: ActivityLog + ?Sized> ActivityLog for Arc<T> {
    fn record(&self, activity: &Activity) {
        (**self).record(activity)
    }
}

/// Forwards every record to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, activity: &Activity) {
        match activity {
            Activity::Acted {
                event_id,
                item_id,
                actor,
            } => {
                tracing::info!(
                    target: ACTION_TARGET,
                    event_id = %event_id,
                    item_id = %item_id,
                    actor = %actor,
                    "Boosted {item_id} from {actor}"
                );
            }
            Activity::Pruned { removed } => {
                tracing::debug!(removed, "pruned expired state entries");
            }
            Activity::Fetched { count, since } => {
                tracing::info!(
                    count,
                    since_id = since.as_ref().map(|s| s.as_str()).unwrap_or("none"),
                    "Fetched {count} notifications"
                );
            }
            Activity::FetchFailed { error } => {
                tracing::warn!(error = %error, "Notification fetch failed");
            }
            Activity::FastForwarded { cursor } => {
                tracing::info!(
                    cursor = %cursor,
                    "Startup skip enabled, setting last_event_id={cursor}"
                );
            }
            Activity::FastForwardDeferred => {
                tracing::info!("Startup skip enabled but no notifications yet; will retry");
            }
            Activity::CursorAdvanced { event_id } => {
                tracing::debug!(event_id = %event_id, "cursor advanced");
            }
            Activity::Skipped {
                event_id,
                item_id,
                actor,
                decision,
                since_last_action,
            } => {
                let item_id = item_id.as_deref().unwrap_or("-");
                let actor = actor.as_deref().unwrap_or("-");
                match decision {
                    Decision::SkipRateLimited | Decision::SkipDuplicate => tracing::info!(
                        event_id = %event_id,
                        item_id,
                        actor,
                        reason = %decision,
                        since_last_action = since_last_action.map(|s| s as i64),
                        "Skipping {item_id} from {actor}: {decision}"
                    ),
                    _ => tracing::debug!(
                        event_id = %event_id,
                        item_id,
                        actor,
                        reason = %decision,
                        "skipping event"
                    ),
                }
            }
            Activity::ReactionFailed {
                event_id,
                item_id,
                actor,
                error,
            } => {
                tracing::warn!(
                    event_id = %event_id,
                    item_id = %item_id,
                    actor = %actor,
                    error = %error,
                    "Boost failed for {item_id}"
                );
            }
            Activity::Persisted { cursor } => {
                tracing::debug!(
                    cursor = cursor.as_ref().map(|c| c.as_str()).unwrap_or("none"),
                    "state saved"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_acted_is_an_action_record() {
        let acted = Activity::Acted {
            event_id: EventId::from("1"),
            item_id: "10".into(),
            actor: "alice".into(),
        };
        let skipped = Activity::Skipped {
            event_id: EventId::from("2"),
            item_id: Some("10".into()),
            actor: Some("alice".into()),
            decision: Decision::SkipDuplicate,
            since_last_action: Some(12.0),
        };
        let failed = Activity::ReactionFailed {
            event_id: EventId::from("3"),
            item_id: "11".into(),
            actor: "bob".into(),
            error: "timeout".into(),
        };
        assert!(acted.is_action_record());
        assert!(!skipped.is_action_record());
        assert!(!failed.is_action_record());
    }
}
