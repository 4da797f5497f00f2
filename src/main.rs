//! clipbatch
//!
//! Batch-generates lossless clips from timestamp-named recordings, driven by a
//! YAML job document.
//!
//! # Usage
//!
//! ```bash
//! clipbatch init                  # write a template clip.yaml
//! clipbatch check                 # validate clip.yaml and show the plan
//! clipbatch run                   # cut every clip
//! clipbatch scan -i "captures"    # list recordings
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clipbatch::adapters::tracing_log::init_logging;
use clipbatch::app::container::DefaultAppContainer;
use clipbatch::cli::{commands, Cli, Commands};
use clipbatch::config_initialization::initialize_configuration;

/// Main entry point for the clipbatch CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let config = initialize_configuration(&cli)?;
    let container = DefaultAppContainer::new(&config);

    match cli.command {
        Commands::Run => {
            info!("Executing run command");
            commands::run(&container, &config).await?;
        }
        Commands::Check(args) => {
            info!("Executing check command");
            commands::check(&container, &config, args).await?;
        }
        Commands::Scan(args) => {
            info!("Executing scan command");
            commands::scan(&container, &config, args).await?;
        }
        Commands::Init => {
            info!("Executing init command");
            commands::init(&config)?;
        }
    }

    Ok(())
}
