//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the HRMS crates
///
/// The profile engine itself never fails; these errors come from the adapters
/// that load configuration and employee snapshots.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HrmsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for HRMS operations
pub type Result<T> = std::result::Result<T, HrmsError>;

impl From<serde_json::Error> for HrmsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for HrmsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
