use thiserror::Error;

#[derive(Debug, Error)]
pub enum MastodonError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {error}")]
    Api { status: u16, error: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl MastodonError {
    /// `true` when the server rejected the access token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, MastodonError::Api { status: 401 | 403, .. })
    }
}
