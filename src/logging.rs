use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::{Result, ScrapeError};

/// `RUST_LOG` if set, otherwise the configured level.
pub fn filter(config: &LogConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ScrapeError::Config(format!("bad log level `{}`: {e}", config.level)))
}

/// Installs the global subscriber. Call once, from the binary.
pub fn init(config: &LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| ScrapeError::Config(format!("logging already initialised: {e}")))
}
