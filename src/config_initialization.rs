//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI > environment > preferences file > defaults. Environment
//! variables are folded into the CLI values by clap.

use tracing::{debug, info};

use crate::adapters::TomlPrefsLoader;
use crate::cli::Cli;
use crate::config::{Config, Prefs, Replace};
use crate::domain::errors::{DomainError, DomainResult};
use crate::error::ClipBatchResult;

/// Load preferences and apply command-line overrides
pub fn initialize_configuration(cli: &Cli) -> ClipBatchResult<Config> {
    let prefs = TomlPrefsLoader::load_or_default(cli.prefs.as_deref())?;
    let config = apply_cli_overrides(&prefs, cli)?;
    info!(
        job = %config.job_path.display(),
        replacements = config.filename_replace.len(),
        "configuration initialized"
    );
    Ok(config)
}

/// Layer CLI values over the preferences
pub fn apply_cli_overrides(prefs: &Prefs, cli: &Cli) -> DomainResult<Config> {
    let mut config = Config::from_prefs(prefs);
    let mut overrides = 0;

    if let Some(path) = &cli.job_path {
        config.job_path = path.clone();
        overrides += 1;
    }
    if let Some(dir) = &cli.video_dir {
        config.video_dir = dir.clone();
        overrides += 1;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
        overrides += 1;
    }
    if let Some(ffmpeg) = &cli.ffmpeg {
        config.ffmpeg = ffmpeg.clone();
        overrides += 1;
    }
    if cli.overwrite {
        config.overwrite = true;
        overrides += 1;
    }
    let defaults = config.filename_replace.clone();
    for arg in &cli.filename_replace {
        apply_replace_arg(&mut config.filename_replace, arg, &defaults)?;
        overrides += 1;
    }

    if overrides > 0 {
        debug!("applied {} command-line overrides", overrides);
    }
    Ok(config)
}

/// Apply one `-r` argument to the mapping
fn apply_replace_arg(replace: &mut Replace, arg: &str, defaults: &Replace) -> DomainResult<()> {
    if arg.is_empty() {
        *replace = defaults.clone();
        return Ok(());
    }
    if let Some(value) = arg.strip_prefix("==") {
        return replace.insert("=", value);
    }
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => replace.insert(key, value),
        _ => Err(DomainError::validation(format!(
            "invalid replacement: {:?}",
            arg
        ))),
    }
}
