//! Retention for the rate-limit and dedup tables.

use crate::state::StateDocument;

/// How long an acted-on item stays in the dedup table.
pub const ACTED_ITEM_HORIZON_SECS: f64 = 24.0 * 3600.0;

/// Drop rate-limit entries older than `2 * min_interval` and dedup entries
/// older than [`ACTED_ITEM_HORIZON_SECS`]. Entries exactly at the horizon
/// are kept.
///
/// Returns the number of entries removed.
pub fn prune(doc: &mut StateDocument, now: f64, min_interval: f64) -> usize {
    let actor_horizon = min_interval * 2.0;
    let before = doc.last_action_per_actor.len() + doc.acted_item_ids.len();

    doc.last_action_per_actor
        .retain(|_, ts| now - *ts <= actor_horizon);
    doc.acted_item_ids
        .retain(|_, ts| now - *ts <= ACTED_ITEM_HORIZON_SECS);

    before - (doc.last_action_per_actor.len() + doc.acted_item_ids.len())
}
