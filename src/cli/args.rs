//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan (default: the configured video directory)
    pub dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
