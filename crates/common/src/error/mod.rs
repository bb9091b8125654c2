//! Error classification shared by the HRMS adapters
//!
//! Module errors stay concrete `thiserror` enums and implement
//! [`ErrorClassification`] so callers can pick a log level and decide whether
//! a reload is worth attempting without matching on the concrete type:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum SnapshotError {
//!     #[error("Employee record has no id: {0}")]
//!     MissingId(String),
//!
//!     #[error("Failed to read snapshot: {0}")]
//!     Read(#[from] std::io::Error),
//! }
//!
//! impl ErrorClassification for SnapshotError {
//!     fn is_retryable(&self) -> bool {
//!         matches!(self, Self::Read(_))
//!     }
//!     // ... implement other trait methods
//! }
//! ```
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Employee not found, empty snapshot |
//! | **Warning** | Degraded but operational | Unreadable optional file |
//! | **Error** | Failure requiring attention | Invalid config, malformed JSON |
//! | **Critical** | System integrity at risk | Internal invariant violations |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error classification trait for consistent error handling across modules
///
/// Lets callers decide on logging level and whether a reload is worth
/// attempting without matching on concrete error types.
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
