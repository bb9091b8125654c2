//! Configuration management

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrmsConfig {
    pub logging: LoggingConfig,
    pub clock: ClockConfig,
    pub data: DataConfig,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive, e.g. `info` or `hrms_core=debug`
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which date counts as "today"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pin every duration to this date instead of the system calendar
    pub fixed_date: Option<NaiveDate>,
}

/// Where exported snapshots are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding one `<employee id>.json` per employee
    pub employees_dir: PathBuf,
    /// Optional master-data export; names fall back to raw ids without it
    pub master_data_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Pretty }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { employees_dir: PathBuf::from("data/employees"), master_data_path: None }
    }
}
