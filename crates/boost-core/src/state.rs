use crate::error::{BoostError, Result};
use crate::types::EventId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// StateDocument
// ---------------------------------------------------------------------------

/// The single persisted aggregate: cursor, per-actor rate-limit table and
/// the dedup table of items already acted on.
///
/// Timestamps are seconds since the Unix epoch. Maps are ordered so that two
/// saves of an unchanged document produce identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    #[serde(default, alias = "last_notification_id")]
    pub last_event_id: Option<EventId>,
    #[serde(default, alias = "last_boost_per_user")]
    pub last_action_per_actor: BTreeMap<String, f64>,
    #[serde(default, alias = "boosted_status_ids")]
    pub acted_item_ids: BTreeMap<String, f64>,
}

impl StateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the agent last reacted on behalf of `actor`, if it still remembers.
    pub fn last_action_at(&self, actor: &str) -> Option<f64> {
        self.last_action_per_actor.get(actor).copied()
    }

    pub fn has_acted_on(&self, item_id: &str) -> bool {
        self.acted_item_ids.contains_key(item_id)
    }

    /// Record a confirmed reaction. Only call after the remote call succeeded.
    pub fn record_action(&mut self, actor: &str, item_id: &str, now: f64) {
        self.last_action_per_actor.insert(actor.to_string(), now);
        self.acted_item_ids.insert(item_id.to_string(), now);
    }
}

// ---------------------------------------------------------------------------
// StateStore
// ---------------------------------------------------------------------------

/// Owns the backing file of a [`StateDocument`]. Nothing else writes it.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document, or a fresh one if no file exists yet.
    ///
    /// A file that exists but does not parse is [`BoostError::CorruptState`];
    /// it is never silently replaced by an empty document.
    pub fn load(&self) -> Result<StateDocument> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StateDocument::new());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&data).map_err(|source| BoostError::CorruptState {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, doc: &StateDocument) -> Result<()> {
        let data = serde_json::to_vec_pretty(doc)?;
        crate::io::atomic_write(&self.path, &data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (StateStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        (store, dir)
    }

    #[test]
    fn load_missing_file_returns_empty_document() {
        let (store, _dir) = store();
        let doc = store.load().unwrap();
        assert_eq!(doc.last_event_id, None);
        assert!(doc.last_action_per_actor.is_empty());
        assert!(doc.acted_item_ids.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _dir) = store();
        let mut doc = StateDocument::new();
        doc.last_event_id = Some(EventId::from("1200"));
        doc.record_action("alice", "109", 1_700_000_000.5);
        store.save(&doc).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_reset() {
        let (store, _dir) = store();
        std::fs::write(store.path(), b"{\"last_event_id\": ").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, BoostError::CorruptState { .. }));
        // The damaged file is left for the operator.
        assert_eq!(
            std::fs::read(store.path()).unwrap(),
            b"{\"last_event_id\": "
        );
    }

    #[test]
    fn interrupted_save_leaves_previous_document() {
        use std::io::Write;

        let (store, dir) = store();
        let mut doc = StateDocument::new();
        doc.last_event_id = Some(EventId::from("7"));
        store.save(&doc).unwrap();

        // Same steps as `atomic_write`, stopped before the rename: the next
        // document is half written into a tempfile that is never persisted.
        let mut next = doc.clone();
        next.last_event_id = Some(EventId::from("8"));
        let bytes = serde_json::to_vec_pretty(&next).unwrap();
        let mut tmp = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        tmp.write_all(&bytes[..bytes.len() / 2]).unwrap();
        let (_file, leftover) = tmp.keep().unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);

        // The leftover does not get in the way of the next save.
        store.save(&next).unwrap();
        assert_eq!(store.load().unwrap(), next);
        assert!(leftover.exists());
    }

    #[test]
    fn accepts_legacy_field_names_and_numeric_cursor() {
        let (store, _dir) = store();
        std::fs::write(
            store.path(),
            r#"{
                "last_notification_id": 314,
                "last_boost_per_user": {"bob@example.social": 1700000000.0},
                "boosted_status_ids": {"555": 1700000000.0}
            }"#,
        )
        .unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc.last_event_id, Some(EventId::from("314")));
        assert_eq!(doc.last_action_at("bob@example.social"), Some(1_700_000_000.0));
        assert!(doc.has_acted_on("555"));

        store.save(&doc).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"last_event_id\": \"314\""));
        assert!(!raw.contains("last_notification_id"));
    }

    #[test]
    fn unchanged_document_saves_identical_bytes() {
        let (store, _dir) = store();
        let mut doc = StateDocument::new();
        doc.record_action("zed", "2", 10.0);
        doc.record_action("amy", "1", 20.0);
        store.save(&doc).unwrap();
        let first = std::fs::read(store.path()).unwrap();
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(std::fs::read(store.path()).unwrap(), first);
    }
}
