use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// EventId
// ---------------------------------------------------------------------------

/// Opaque identifier of an upstream event.
///
/// Decimal digit strings (of any length) compare by value and sort before
/// every other id; the rest compare lexicographically. Ties fall back to the
/// raw string so the ordering stays consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric_digits(&self) -> Option<&str> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = self.0.trim_start_matches('0');
        Some(if trimmed.is_empty() { "0" } else { trimmed })
    }
}

impl Ord for EventId {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.numeric_digits(), other.numeric_digits()) {
            (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for EventId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for EventId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Older state files (and some servers) carry ids as JSON numbers.
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }
        Ok(match Raw::deserialize(d)? {
            Raw::Text(s) => EventId(s),
            Raw::Number(n) => EventId(n.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// The type tag of an event. Only mentions qualify for a reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Mention,
    Other(String),
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "mention" => EventKind::Mention,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Mention => "mention",
            EventKind::Other(tag) => tag,
        }
    }
}

/// The content an event points at, with the actor who authored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub actor: Option<String>,
}

/// One record from the upstream stream. Never persisted as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub item: Option<Item>,
}

impl Event {
    /// A mention event referencing `item_id` authored by `actor`.
    pub fn mention(id: impl Into<EventId>, item_id: &str, actor: &str) -> Self {
        Self {
            id: id.into(),
            kind: EventKind::Mention,
            item: Some(Item {
                id: item_id.to_string(),
                actor: Some(actor.to_string()),
            }),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.item.as_ref().and_then(|i| i.actor.as_deref())
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.id.as_str())
    }
}
