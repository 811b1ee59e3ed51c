//! Diagnostic logging to disk.
//!
//! The terminal owns stdout while the UI is running, so `tracing` output goes
//! to a daily file named `crabtodo_<date>.log` in the configured log directory
//! (default: `~/.local/share/crabtodo/logs/`). `RUST_LOG` overrides the
//! configured level.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    expand_home(&config.log_dir).join(format!("crabtodo_{}.log", date))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. No-op if logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
