//! Per-event reaction policy.

use crate::state::StateDocument;
use crate::types::{Event, EventKind};
use std::fmt;

/// Outcome of [`should_act`]. Everything but `Act` is a skip reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Act,
    SkipType,
    SkipSelf,
    SkipRateLimited,
    SkipDuplicate,
    SkipNoReferencedItem,
}

impl Decision {
    pub fn is_act(self) -> bool {
        matches!(self, Decision::Act)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Act => "act",
            Decision::SkipType => "not_a_mention",
            Decision::SkipSelf => "self_authored",
            Decision::SkipRateLimited => "rate_limited",
            Decision::SkipDuplicate => "already_acted",
            Decision::SkipNoReferencedItem => "no_referenced_item",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether to react to `event`.
///
/// Checks run in a fixed order and the first failing one wins: structural
/// checks (type, referenced item) come before identity, rate limit and
/// dedup, so malformed events never consult policy state.
///
/// An actor with no rate-limit entry always passes the interval check.
pub fn should_act(
    event: &Event,
    doc: &StateDocument,
    self_identity: &str,
    now: f64,
    min_interval: f64,
) -> Decision {
    if event.kind != EventKind::Mention {
        return Decision::SkipType;
    }
    let Some(item) = &event.item else {
        return Decision::SkipNoReferencedItem;
    };
    let actor = match item.actor.as_deref() {
        Some(actor) if !actor.is_empty() => actor,
        _ => return Decision::SkipNoReferencedItem,
    };
    if actor == self_identity {
        return Decision::SkipSelf;
    }
    if let Some(last) = doc.last_action_at(actor) {
        if now - last < min_interval {
            return Decision::SkipRateLimited;
        }
    }
    if doc.has_acted_on(&item.id) {
        return Decision::SkipDuplicate;
    }
    Decision::Act
}
