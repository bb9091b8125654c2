//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG`, when set, wins over
//! the configured level so a single run can be made more verbose without
//! touching config files.

use hrms_domain::{HrmsError, LogFormat, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`
///
/// # Errors
/// Returns `HrmsError::Config` if the level directive is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
        }
    };

    installed.map_err(|e| HrmsError::Config(format!("Failed to install tracing subscriber: {e}")))?;
    tracing::debug!(level = %config.level, format = ?config.format, "tracing initialised");
    Ok(())
}

/// Parse a filter directive such as `info` or `hrms_core=debug,warn`
///
/// # Errors
/// Returns `HrmsError::Config` for directives `tracing-subscriber` rejects.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| HrmsError::Config(format!("Invalid log level '{level}': {e}")))
}
