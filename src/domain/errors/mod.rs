// Domain errors - Error types for the domain layer

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed timestamp or duration string
    #[error("error parsing {what}: {value:?}")]
    Parse { what: &'static str, value: String },

    /// Well-formed but semantically invalid record
    #[error("invalid job: {0}")]
    Validation(String),

    /// Source recording is not a regular file on disk
    #[error("missing video file: {}", path.display())]
    MissingSource { path: PathBuf },

    /// The trim operation failed to start or exited unsuccessfully
    #[error("trim failed: {0}")]
    ExternalTool(String),

    /// Error attributed to a location inside the job document
    #[error("{location}: {source}")]
    Located {
        location: String,
        #[source]
        source: Box<DomainError>,
    },
}

/// The four error kinds a job run can fail with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Validation,
    Resource,
    ExternalTool,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse error",
            ErrorKind::Validation => "validation error",
            ErrorKind::Resource => "resource error",
            ErrorKind::ExternalTool => "external tool error",
        };
        f.write_str(name)
    }
}

impl DomainError {
    pub fn parse(what: &'static str, value: impl Into<String>) -> Self {
        DomainError::Parse {
            what,
            value: value.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// Prefix the error with a document location. Nested locations are joined,
    /// so `videos[0]` wrapping `clips[2]` reads `videos[0].clips[2]`.
    pub fn at(self, location: impl Into<String>) -> Self {
        let location = location.into();
        match self {
            DomainError::Located {
                location: inner,
                source,
            } => DomainError::Located {
                location: format!("{}.{}", location, inner),
                source,
            },
            other => DomainError::Located {
                location,
                source: Box::new(other),
            },
        }
    }

    /// Error kind, looking through any location wrappers
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Parse { .. } => ErrorKind::Parse,
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::MissingSource { .. } => ErrorKind::Resource,
            DomainError::ExternalTool(_) => ErrorKind::ExternalTool,
            DomainError::Located { source, .. } => source.kind(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
