use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoostError {
    #[error("state file {path} is corrupt; refusing to start: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoostError>;
