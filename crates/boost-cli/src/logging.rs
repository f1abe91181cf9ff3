//! Subscriber setup.
//!
//! Everything goes to stderr at the configured level. Records emitted on
//! [`ACTION_TARGET`] are additionally appended to the action log file.

use anyhow::Context;
use boost_core::ACTION_TARGET;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::filter::{filter_fn, EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, Layer};

/// `RUST_LOG` directives, when set, refine `level`.
pub fn init(level: Level, action_log: Option<&Path>) -> anyhow::Result<()> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let actions = match action_log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(filter_fn(is_action_record)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(actions)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn is_action_record(meta: &tracing::Metadata<'_>) -> bool {
    meta.target() == ACTION_TARGET && *meta.level() <= Level::INFO
}
