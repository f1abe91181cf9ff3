//! HTTP client for the Mastodon REST API.

use crate::error::MastodonError;
use crate::types::{Account, Notification, Status};
use crate::Result;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 8;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Mastodon API client bound to one instance and one access token.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct MastodonClient {
    base_url: String,
    access_token: String,
    http: Client,
}

impl std::fmt::Debug for MastodonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MastodonClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Error body returned by Mastodon on 4xx/5xx.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl MastodonClient {
    /// Create a client for `base_url` (e.g. `https://mastodon.social`).
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(MastodonError::InvalidBaseUrl(base_url));
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("boostbot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: trimmed.to_string(),
            access_token: access_token.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The account that owns the access token.
    pub async fn verify_credentials(&self) -> Result<Account> {
        let resp = self
            .http
            .get(self.url("/api/v1/accounts/verify_credentials"))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        read_json(resp).await
    }

    /// Notifications newer than `since_id`, newest first as the server
    /// returns them. With `None`, the most recent page.
    pub async fn notifications(&self, since_id: Option<&str>) -> Result<Vec<Notification>> {
        let mut req = self
            .http
            .get(self.url("/api/v1/notifications"))
            .bearer_auth(&self.access_token);
        if let Some(since_id) = since_id {
            req = req.query(&[("since_id", since_id)]);
        }
        let notifications: Vec<Notification> = read_json(req.send().await?).await?;
        tracing::debug!(
            count = notifications.len(),
            since_id = since_id.unwrap_or("none"),
            "notifications fetched"
        );
        Ok(notifications)
    }

    /// Reblog (boost) a status. Returns the reblog wrapper status.
    pub async fn reblog(&self, status_id: &str) -> Result<Status> {
        let resp = self
            .http
            .post(self.url(&format!("/api/v1/statuses/{status_id}/reblog")))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        let error = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.chars().take(200).collect());
        return Err(MastodonError::Api {
            status: status.as_u16(),
            error,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

// ─── Tests ────────────────────────────────────────────────────────────────
