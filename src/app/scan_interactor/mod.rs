// Scan interactor - Lists recordings found in a video directory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::domain::errors::*;
use crate::domain::model::Video;
use crate::ports::*;

/// A file recognised as a source recording
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recording {
    pub date: NaiveDateTime,
    pub path: PathBuf,
}

/// Interactor for the recording scan use case
pub struct ScanInteractor {
    fs_port: Arc<dyn FsPort>,
}

impl ScanInteractor {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self { fs_port }
    }

    /// Recordings in `dir` matching the configured filename layout, oldest first
    pub async fn scan(&self, dir: &Path, config: &Config) -> Result<Vec<Recording>, DomainError> {
        let mut recordings: Vec<Recording> = Vec::new();
        for path in self.fs_port.list_files(dir).await? {
            match Video::from_path(config, &path) {
                Ok(video) => recordings.push(Recording {
                    date: video.date(),
                    path,
                }),
                Err(e) => debug!(path = %path.display(), "skipping: {}", e),
            }
        }
        recordings.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
        Ok(recordings)
    }
}
