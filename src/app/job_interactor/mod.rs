// Job interactor - Plans and runs a batch job

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub videos: usize,
    pub clips_written: Vec<PathBuf>,
}

/// Outcome of a dry run: every planned trim plus the sources not on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub plan: Vec<TrimRequest>,
    pub missing_sources: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.missing_sources.is_empty()
    }
}

/// Interactor for the batch clipping use case
pub struct JobInteractor {
    trim_port: Arc<dyn TrimPort>,
    fs_port: Arc<dyn FsPort>,
}

impl JobInteractor {
    /// Create new job interactor with injected ports
    pub fn new(trim_port: Arc<dyn TrimPort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self { trim_port, fs_port }
    }

    /// Run every clip of every video, in document order.
    ///
    /// Each source is checked right before its clips are cut. The first
    /// failure stops the run; clips already written stay on disk.
    pub async fn run(&self, job: &Job, config: &Config) -> Result<RunReport, DomainError> {
        let mut clips_written = Vec::with_capacity(job.clip_count());

        for (i, video) in job.videos().iter().enumerate() {
            let source = job
                .source_path(config, video)
                .map_err(|e| e.at(format!("videos[{}]", i)))?;
            if !self.fs_port.is_file(&source).await? {
                error!(source = %source.display(), "missing video file");
                return Err(DomainError::MissingSource { path: source });
            }
            info!(
                source = %source.display(),
                title = video.title(),
                clips = video.clips().len(),
                "processing video"
            );

            for (j, clip) in video.clips().iter().enumerate() {
                let request = TrimRequest::for_clip(job, config, &source, video, clip)
                    .map_err(|e| e.at(format!("videos[{}].clips[{}]", i, j)))?;
                info!(
                    destination = %request.destination.display(),
                    start = request.start_seconds,
                    duration = request.duration_seconds,
                    "writing clip"
                );
                self.trim_port.trim(&request).await?;
                clips_written.push(request.destination);
            }
        }

        info!(clips = clips_written.len(), "job finished");
        Ok(RunReport {
            videos: job.videos().len(),
            clips_written,
        })
    }

    /// Resolve the whole plan and report missing sources without trimming
    pub async fn check(&self, job: &Job, config: &Config) -> Result<CheckReport, DomainError> {
        let plan = job.plan(config)?;

        let mut missing_sources = Vec::new();
        for video in job.videos() {
            let source = job.source_path(config, video)?;
            if !self.fs_port.is_file(&source).await? && !missing_sources.contains(&source) {
                warn!(source = %source.display(), "missing video file");
                missing_sources.push(source);
            }
        }

        Ok(CheckReport {
            plan,
            missing_sources,
        })
    }
}
