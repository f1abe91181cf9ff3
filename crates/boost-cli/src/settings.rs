use boost_core::config::{DEFAULT_MIN_INTERVAL_SECS, DEFAULT_POLL_INTERVAL_SECS};
use boost_core::AgentConfig;
use clap::{ArgAction, Args};
use std::path::PathBuf;
use std::str::FromStr;

/// Process configuration. Every flag can also come from the environment
/// (or a `.env` file in the working directory).
#[derive(Debug, Args)]
pub struct Settings {
    /// Instance base URL, e.g. https://mastodon.social
    #[arg(long, global = true, env = "MASTODON_BASE_URL")]
    pub base_url: Option<String>,

    /// Access token of the bot account
    #[arg(long, global = true, env = "ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Seconds to sleep between polls
    #[arg(long, global = true, env = "POLL_INTERVAL_SECONDS", default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub poll_interval: u64,

    /// Minimum seconds between two boosts for the same account
    #[arg(long, global = true, env = "MIN_BOOST_INTERVAL_SECONDS", default_value_t = DEFAULT_MIN_INTERVAL_SECS)]
    pub min_interval: u64,

    /// Path of the JSON state file
    #[arg(long, global = true, env = "STATE_FILE", default_value = "state.json")]
    pub state_file: PathBuf,

    /// File receiving one line per boost performed
    #[arg(long, global = true, env = "LOG_FILE", default_value = "bot.log")]
    pub log_file: PathBuf,

    /// Console log level (ERROR, WARNING, INFO, DEBUG)
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// On first start, skip notifications that already exist
    #[arg(
        long,
        global = true,
        env = "STARTUP_SKIP_EXISTING",
        default_value = "true",
        value_parser = parse_flag,
        action = ArgAction::Set
    )]
    pub skip_existing: bool,
}

/// Credentials are required for `run` only, so they are checked late.
#[derive(Debug, thiserror::Error)]
#[error("missing config: MASTODON_BASE_URL and ACCESS_TOKEN are required")]
pub struct MissingConfig;

#[derive(Debug)]
pub struct Credentials {
    pub base_url: String,
    pub access_token: String,
}

impl Settings {
    pub fn credentials(&self) -> Result<Credentials, MissingConfig> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        match (present(&self.base_url), present(&self.access_token)) {
            (Some(base_url), Some(access_token)) => Ok(Credentials {
                base_url,
                access_token,
            }),
            _ => Err(MissingConfig),
        }
    }

    pub fn agent_config(&self) -> boost_core::Result<AgentConfig> {
        AgentConfig::new(self.poll_interval, self.min_interval, self.skip_existing)
    }

    /// Map the configured level name onto a `tracing` level. Accepts the
    /// `WARNING` / `CRITICAL` spellings as well.
    pub fn log_level(&self) -> anyhow::Result<tracing::Level> {
        let name = self.log_level.trim().to_ascii_lowercase();
        let name = match name.as_str() {
            "warning" => "warn",
            "critical" | "fatal" => "error",
            other => other,
        };
        tracing::Level::from_str(name)
            .map_err(|_| anyhow::anyhow!("invalid LOG_LEVEL '{}'", self.log_level))
    }
}

/// Truthy iff one of `1`, `true`, `yes`, `on` (case-insensitive); anything
/// else is false rather than an error.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    ))
}
