//! Errors raised while loading snapshots from disk
//!
//! [`LoadError`] keeps the path context the adapters know about, classifies
//! itself through [`ErrorClassification`], and converts into the domain
//! [`HrmsError`] at the crate boundary.

use std::io;
use std::path::PathBuf;

use hrms_common::{ErrorClassification, ErrorSeverity};
use hrms_domain::HrmsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Employee snapshot not found: {0}")]
    EmployeeNotFound(String),

    #[error("Invalid employee id: {0:?}")]
    InvalidEmployeeId(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse { path: path.into(), source }
    }
}

impl ErrorClassification for LoadError {
    fn is_retryable(&self) -> bool {
        match self {
            // the export may still be being written
            Self::Read { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            Self::EmployeeNotFound(_) | Self::InvalidEmployeeId(_) | Self::Parse { .. } => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmployeeNotFound(_) => ErrorSeverity::Info,
            Self::Read { .. } => ErrorSeverity::Warning,
            Self::InvalidEmployeeId(_) | Self::Parse { .. } => ErrorSeverity::Error,
        }
    }
}

impl From<LoadError> for HrmsError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::EmployeeNotFound(id) => Self::NotFound(format!("employee {id}")),
            LoadError::InvalidEmployeeId(_) => Self::InvalidInput(err.to_string()),
            LoadError::Read { .. } => Self::Io(err.to_string()),
            LoadError::Parse { .. } => Self::Serialization(err.to_string()),
        }
    }
}
