//! CLI module for clipbatch
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::tracing_log::LogFormat;

pub mod args;
pub mod commands;

/// clipbatch - cut lossless clips from timestamp-named recordings
///
/// Reads a YAML job listing source recordings (by start time) and the clips to
/// cut from each, then stream-copies every clip with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "clipbatch")]
#[command(about = "Batch-generate lossless clips from timestamp-named recordings")]
#[command(version)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    /// Preferences file (TOML)
    #[arg(long, env = "CLIPBATCH_PREFS", global = true)]
    pub prefs: Option<PathBuf>,

    /// Job document path
    #[arg(short = 'j', long, env = "CLIPBATCH_JOB", global = true)]
    pub job_path: Option<PathBuf>,

    /// Source recording directory used when the job does not set one
    #[arg(short = 'i', long, env = "CLIPBATCH_VIDEO_DIR", global = true)]
    pub video_dir: Option<PathBuf>,

    /// Clip directory used when the job does not set one
    #[arg(short = 'o', long, env = "CLIPBATCH_OUTPUT_DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Filename replacement KEY=VALUE (repeatable; `==VALUE` maps `=`, an
    /// empty value resets to the preferences mapping)
    #[arg(short = 'r', long = "filename-replace", value_name = "KEY=VALUE", global = true)]
    pub filename_replace: Vec<String>,

    /// ffmpeg executable
    #[arg(long, env = "CLIPBATCH_FFMPEG", global = true)]
    pub ffmpeg: Option<PathBuf>,

    /// Overwrite existing clips
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut every clip listed in the job
    Run,
    /// Validate the job and show the planned clips without cutting
    Check(args::CheckArgs),
    /// List recordings in the video directory
    Scan(args::ScanArgs),
    /// Write a template job document
    Init,
}
