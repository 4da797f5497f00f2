//! Error handling module for clipbatch

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::errors::{DomainError, ErrorKind};

/// Main error type for clipbatch operations
#[derive(Error, Debug)]
pub enum ClipBatchError {
    /// Job, configuration or execution failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// File could not be read or written
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Job document is not valid YAML
    #[error("invalid job document {}: {source}", path.display())]
    JobSyntax {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Preferences file is not valid or has unknown keys
    #[error("invalid preferences file {}: {source}", path.display())]
    Prefs {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ClipBatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClipBatchError::Io {
            path: path.into(),
            source,
        }
    }

    /// Error kind for domain failures; unreadable or malformed files are
    /// reported as validation failures
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClipBatchError::Domain(e) => e.kind(),
            ClipBatchError::Io { .. } => ErrorKind::Resource,
            ClipBatchError::JobSyntax { .. } | ClipBatchError::Prefs { .. } => {
                ErrorKind::Validation
            }
        }
    }
}

/// Result type alias for clipbatch operations
pub type ClipBatchResult<T> = std::result::Result<T, ClipBatchError>;
