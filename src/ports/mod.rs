// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::TrimRequest;

/// Port for the external trim operation
#[async_trait]
pub trait TrimPort: Send + Sync {
    /// Stream-copy `request.duration_seconds` of `request.source`, starting at
    /// `request.start_seconds`, into `request.destination`. Returns once the
    /// operation has finished.
    async fn trim(&self, request: &TrimRequest) -> Result<(), DomainError>;
}

/// Port for file system queries
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if `path` is an existing regular file
    async fn is_file(&self, path: &Path) -> Result<bool, DomainError>;

    /// Regular files directly inside `dir`, sorted by name
    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError>;
}
