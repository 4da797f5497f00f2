// Tracing log adapter - Structured logging set-up using tracing-subscriber

use tracing_subscriber::EnvFilter;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Build the event filter: `RUST_LOG` wins over the command-line level
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber, writing to stderr. Calling this twice is a
/// no-op.
pub fn init_logging(level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
