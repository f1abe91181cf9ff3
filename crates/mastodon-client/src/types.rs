use serde::{Deserialize, Deserializer};

// ─── Accounts ─────────────────────────────────────────────────────────────

/// An account. `acct` is `user` for local accounts and `user@host` for
/// remote ones.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub acct: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

// ─── Statuses ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub reblogged: Option<bool>,
}

// ─── Notifications ────────────────────────────────────────────────────────

/// `GET /api/v1/notifications` entry. `kind` is the raw `type` tag
/// (`mention`, `reblog`, `favourite`, `follow`, …).
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub status: Option<Status>,
}

/// Ids are strings in the API, but some servers and proxies emit numbers.
fn id_string<'de, D>(d: D) -> Result<String, D::Error>
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
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
