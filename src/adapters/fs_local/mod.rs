// Local filesystem adapter - File queries through std::fs and walkdir

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;
use crate::utils::path::is_regular_file;

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn is_file(&self, path: &Path) -> Result<bool, DomainError> {
        Ok(is_regular_file(path))
    }

    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                DomainError::validation(format!("cannot read {}: {}", dir.display(), e))
            })?;
            if is_regular_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.mkv"), b"").unwrap();
        std::fs::write(dir.path().join("a.mkv"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.mkv"), b"").unwrap();

        let files = FsLocalAdapter::new().list_files(dir.path()).await.unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.mkv"), dir.path().join("b.mkv")]
        );
    }

    #[tokio::test]
    async fn test_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.mkv");
        std::fs::write(&file, b"").unwrap();
        let fs = FsLocalAdapter::new();
        assert!(fs.is_file(&file).await.unwrap());
        assert!(!fs.is_file(dir.path()).await.unwrap());
        assert!(!fs.is_file(&dir.path().join("missing.mkv")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FsLocalAdapter::new()
            .list_files(&dir.path().join("missing"))
            .await;
        assert!(result.is_err());
    }
}
