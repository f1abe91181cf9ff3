//! The event cursor: the id of the last event *seen* (not acted on).

use crate::remote::EventSource;
use crate::state::StateDocument;
use crate::types::EventId;

/// What [`initialize`] did with a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorInit {
    /// A cursor was already set; nothing to do.
    Resumed,
    /// Jumped past all pre-existing events to this id. Caller must persist.
    FastForwarded(EventId),
    /// Skip mode is on but the snapshot was empty; try again next cycle.
    Deferred,
    /// Skip mode is off; history is processed from the start.
    FromBeginning,
}

/// Decide where a fresh document starts reading the stream.
///
/// Only fetches when the cursor is unset and `skip_existing` is on. In that
/// case none of the snapshot's events are processed.
pub async fn initialize<S: EventSource>(
    doc: &mut StateDocument,
    skip_existing: bool,
    source: &S,
) -> Result<CursorInit, S::Error> {
    if doc.last_event_id.is_some() {
        return Ok(CursorInit::Resumed);
    }
    if !skip_existing {
        return Ok(CursorInit::FromBeginning);
    }

    let snapshot = source.fetch_latest().await?;
    match snapshot.into_iter().map(|e| e.id).max() {
        Some(max_id) => {
            doc.last_event_id = Some(max_id.clone());
            Ok(CursorInit::FastForwarded(max_id))
        }
        None => Ok(CursorInit::Deferred),
    }
}

/// Move the cursor to `id` unless it is already at or past it.
///
/// Returns `true` when the cursor moved.
pub fn advance(doc: &mut StateDocument, id: &EventId) -> bool {
    match &doc.last_event_id {
        Some(current) if current >= id => false,
        _ => {
            doc.last_event_id = Some(id.clone());
            true
        }
    }
}
