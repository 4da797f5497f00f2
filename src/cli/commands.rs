//! Command implementations

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::adapters::YamlJobLoader;
use crate::app::container::AppContainer;
use crate::app::{CheckReport, Recording};
use crate::cli::args::{CheckArgs, ScanArgs};
use crate::config::Config;

/// Execute the run command
pub async fn run(container: &dyn AppContainer, config: &Config) -> Result<()> {
    let job = YamlJobLoader::load(config, &config.job_path)?;
    let report = container.job_interactor().run(&job, config).await?;

    println!(
        "wrote {} clip(s) from {} video(s) to {}",
        report.clips_written.len(),
        report.videos,
        job.output_dir().display()
    );
    Ok(())
}

/// Execute the check command
pub async fn check(container: &dyn AppContainer, config: &Config, args: CheckArgs) -> Result<()> {
    let job = YamlJobLoader::load(config, &config.job_path)?;
    let report = container.job_interactor().check(&job, config).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize check report to JSON")?;
        println!("{}", json);
    } else {
        display_check_report(&report);
    }

    if !report.is_ok() {
        bail!(
            "{} missing video file(s), first: {}",
            report.missing_sources.len(),
            report.missing_sources[0].display()
        );
    }
    info!("job is valid");
    Ok(())
}

/// Execute the scan command
pub async fn scan(container: &dyn AppContainer, config: &Config, args: ScanArgs) -> Result<()> {
    let dir = args.dir.as_deref().unwrap_or(&config.video_dir);
    let recordings = container.scan_interactor().scan(dir, config).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&recordings)
            .context("Failed to serialize recordings to JSON")?;
        println!("{}", json);
    } else {
        display_recordings(&recordings);
    }
    Ok(())
}

/// Execute the init command
pub fn init(config: &Config) -> Result<()> {
    YamlJobLoader::write_template(&config.job_path)
        .with_context(|| format!("Failed to create job template {}", config.job_path.display()))?;
    println!("created {}", config.job_path.display());
    Ok(())
}

fn display_check_report(report: &CheckReport) {
    for request in &report.plan {
        println!(
            "{} [{} +{}s] -> {}",
            request.source.display(),
            request.start_seconds,
            request.duration_seconds,
            request.destination.display()
        );
    }
    for source in &report.missing_sources {
        println!("missing: {}", source.display());
    }
    println!("{} clip(s) planned", report.plan.len());
}

fn display_recordings(recordings: &[Recording]) {
    for recording in recordings {
        println!("{}  {}", recording.date.format("%Y-%m-%d %H:%M:%S"), recording.path.display());
    }
}
