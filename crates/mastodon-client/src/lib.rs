//! `mastodon-client` — the three Mastodon REST calls the boost agent needs.
//!
//! ```text
//! MastodonClient
//!     ├── verify_credentials()  GET  /api/v1/accounts/verify_credentials
//!     ├── notifications(since)  GET  /api/v1/notifications?since_id=…
//!     └── reblog(status_id)     POST /api/v1/statuses/{id}/reblog
//! ```
//!
//! Every request carries a bearer token and is bounded by a request timeout,
//! so a hung server cannot stall the caller indefinitely.

pub mod client;
pub mod error;
pub mod types;

pub use client::MastodonClient;
pub use error::MastodonError;
pub use types::{Account, Notification, Status};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, MastodonError>;
