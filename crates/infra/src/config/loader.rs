//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `HRMS_EMPLOYEES_DIR` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Without any config file, the defaults apply
//!
//! ## Environment Variables
//! - `HRMS_EMPLOYEES_DIR`: Directory of exported employee snapshots (required
//!   for environment loading)
//! - `HRMS_MASTER_DATA_PATH`: Master-data export file
//! - `HRMS_LOG_LEVEL`: `tracing` filter directive (default `info`)
//! - `HRMS_LOG_FORMAT`: `pretty` or `json`
//! - `HRMS_FIXED_DATE`: Pin "today" to a `YYYY-MM-DD` date
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./hrms.json` or `./hrms.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hrms_domain::{
    ClockConfig, DataConfig, HrmsConfig, HrmsError, LogFormat, LoggingConfig, Result,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables, then from the first
/// config file found. With neither present, returns the defaults.
///
/// # Errors
/// Returns `HrmsError::Config` if an environment value or the file found is
/// invalid.
pub fn load() -> Result<HrmsConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match find_config_file() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration file found, using defaults");
                    Ok(HrmsConfig::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `HRMS_EMPLOYEES_DIR` must be present; every other variable is optional.
///
/// # Errors
/// Returns `HrmsError::Config` if the required variable is missing or a
/// value cannot be parsed.
pub fn load_from_env() -> Result<HrmsConfig> {
    let employees_dir = PathBuf::from(env_var("HRMS_EMPLOYEES_DIR")?);
    let master_data_path = std::env::var("HRMS_MASTER_DATA_PATH").ok().map(PathBuf::from);

    let defaults = LoggingConfig::default();
    let level = std::env::var("HRMS_LOG_LEVEL").unwrap_or(defaults.level);
    let format = match std::env::var("HRMS_LOG_FORMAT") {
        Ok(raw) => parse_log_format(&raw)?,
        Err(_) => defaults.format,
    };

    let fixed_date = std::env::var("HRMS_FIXED_DATE")
        .ok()
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| HrmsError::Config(format!("Invalid fixed date '{raw}': {e}")))
        })
        .transpose()?;

    Ok(HrmsConfig {
        logging: LoggingConfig { level, format },
        clock: ClockConfig { fixed_date },
        data: DataConfig { employees_dir, master_data_path },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HrmsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<HrmsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HrmsError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            HrmsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HrmsError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<HrmsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HrmsError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HrmsError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(HrmsError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join("config.json"),
        base.join("config.toml"),
        base.join("hrms.json"),
        base.join("hrms.toml"),
        base.join("../config.json"),
        base.join("../config.toml"),
        base.join("../../config.json"),
        base.join("../../config.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| HrmsError::Config(format!("Missing required environment variable: {key}")))
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(HrmsError::Config(format!("Unsupported log format: {other}"))),
    }
}
