//! FFmpeg execution adapter
//!
//! Runs `ffmpeg` as a child process to stream-copy one clip window.

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

use crate::config::Config;
use crate::domain::errors::*;
use crate::domain::model::TrimRequest;
use crate::ports::*;

/// FFmpeg-based trim adapter
pub struct FFmpegAdapter {
    program: PathBuf,
    overwrite: bool,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            program: program.into(),
            overwrite,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ffmpeg.clone(), config.overwrite)
    }

    /// Command-line arguments for a single stream-copy trim
    pub fn build_args(&self, request: &TrimRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(if self.overwrite { "-y" } else { "-n" }.into());
        args.push("-ss".into());
        args.push(request.start_seconds.to_string().into());
        args.push("-i".into());
        args.push(request.source.clone().into_os_string());
        for arg in [
            "-c:v", "copy", "-c:a", "copy", "-map", "0:v:0", "-map", "0:a:0", "-t",
        ] {
            args.push(arg.into());
        }
        args.push(request.duration_seconds.to_string().into());
        args.push(request.destination.clone().into_os_string());
        args
    }
}

#[async_trait]
impl TrimPort for FFmpegAdapter {
    async fn trim(&self, request: &TrimRequest) -> Result<(), DomainError> {
        let args = self.build_args(request);
        debug!(program = %self.program.display(), ?args, "spawning ffmpeg");

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .await
            .map_err(|e| {
                DomainError::ExternalTool(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !status.success() {
            error!(%status, destination = %request.destination.display(), "ffmpeg failed");
            return Err(DomainError::ExternalTool(format!(
                "{} exited with {} while writing {}",
                self.program.display(),
                status,
                request.destination.display()
            )));
        }

        Ok(())
    }
}
