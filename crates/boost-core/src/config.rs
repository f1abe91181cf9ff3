use crate::error::{BoostError, Result};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_MIN_INTERVAL_SECS: u64 = 3600;

/// Loop tuning handed to the agent after the process config is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Sleep between cycles.
    pub poll_interval: Duration,
    /// Minimum gap between two reactions for the same actor.
    pub min_interval: Duration,
    /// Fast-forward past pre-existing events when no cursor is stored.
    pub skip_existing: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            min_interval: Duration::from_secs(DEFAULT_MIN_INTERVAL_SECS),
            skip_existing: true,
        }
    }
}

impl AgentConfig {
    pub fn new(poll_interval_secs: u64, min_interval_secs: u64, skip_existing: bool) -> Result<Self> {
        if poll_interval_secs == 0 {
            return Err(BoostError::InvalidConfig(
                "poll interval must be at least 1 second".into(),
            ));
        }
        Ok(Self {
            poll_interval: Duration::from_secs(poll_interval_secs),
            min_interval: Duration::from_secs(min_interval_secs),
            skip_existing,
        })
    }

    pub fn min_interval_secs(&self) -> f64 {
        self.min_interval.as_secs_f64()
    }
}
