// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_local;
pub mod toml_prefs;
pub mod tracing_log;
pub mod yaml_job;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::FsLocalAdapter;
pub use toml_prefs::TomlPrefsLoader;
pub use yaml_job::YamlJobLoader;
