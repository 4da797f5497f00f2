//! clipbatch library
//!
//! Turns a declarative job (recordings identified by their start time, plus
//! clip windows inside each) into deterministic clip filenames and lossless
//! ffmpeg stream-copy invocations.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, Replace};
pub use domain::errors::{DomainError, ErrorKind};
pub use domain::model::{Clip, Job, TrimRequest, Video};
pub use error::{ClipBatchError, ClipBatchResult};
