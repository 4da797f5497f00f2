//! Runtime configuration
//!
//! `Config` is built once per invocation (see `config_initialization`) and
//! passed by reference to everything that formats or resolves filenames.

use std::fmt;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;

use crate::domain::errors::{DomainError, DomainResult};

/// Ordered string replacement mapping applied to filenames.
///
/// Entries apply in insertion order; re-inserting a key replaces its value
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replace {
    entries: Vec<(String, String)>,
}

impl Replace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from pairs, rejecting empty keys
    pub fn from_pairs<K, V, I>(pairs: I) -> DomainResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut replace = Self::new();
        for (key, value) in pairs {
            replace.insert(key, value)?;
        }
        Ok(replace)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> DomainResult<()> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(DomainError::validation(format!(
                "mapping key cannot be empty: {:?}: {:?}",
                key, value
            )));
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply every entry, in order, as a literal substring replacement
    pub fn apply(&self, s: &str) -> String {
        self.iter()
            .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
    }

    /// Characters most filesystems refuse, each mapped to `-`
    pub fn filesystem_safe() -> Self {
        Self {
            entries: ["\\", "*", "?", "\"", "<", ">", "|"]
                .iter()
                .map(|c| (c.to_string(), "-".to_string()))
                .collect(),
        }
    }
}

impl Serialize for Replace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Replace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReplaceVisitor;

        impl<'de> Visitor<'de> for ReplaceVisitor {
            type Value = Replace;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of strings to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Replace, A::Error> {
                let mut replace = Replace::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    replace.insert(key, value).map_err(serde::de::Error::custom)?;
                }
                Ok(replace)
            }
        }

        deserializer.deserialize_map(ReplaceVisitor)
    }
}

/// Resolved configuration for a single invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Path to the job document
    pub job_path: PathBuf,
    /// Default clip directory when the job omits `output-dir`
    pub output_dir: PathBuf,
    /// Default recording directory when the job omits `video-dir`
    pub video_dir: PathBuf,
    /// Replacements applied to source and destination filenames
    pub filename_replace: Replace,
    /// Extension of written clips
    pub output_ext: String,
    /// Extension of source recordings
    pub video_ext: String,
    /// strftime layout of source recording names
    pub video_filename_format: String,
    /// ffmpeg executable
    pub ffmpeg: PathBuf,
    /// Overwrite existing clips instead of failing
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_prefs(&Prefs::default())
    }
}

impl Config {
    /// Config with every unset preference at its default
    pub fn from_prefs(prefs: &Prefs) -> Self {
        Self {
            job_path: prefs.job_path.clone().unwrap_or_else(|| PathBuf::from("clip.yaml")),
            output_dir: prefs.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            video_dir: prefs.video_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            filename_replace: prefs
                .filename_replace
                .clone()
                .unwrap_or_else(Replace::filesystem_safe),
            output_ext: prefs.output_ext.clone().unwrap_or_else(|| "mkv".to_string()),
            video_ext: prefs.video_ext.clone().unwrap_or_else(|| "mkv".to_string()),
            video_filename_format: prefs
                .video_filename_format
                .clone()
                .unwrap_or_else(|| "%Y-%m-%d %H-%M-%S".to_string()),
            ffmpeg: prefs.ffmpeg.clone().unwrap_or_else(|| PathBuf::from("ffmpeg")),
            overwrite: prefs.overwrite.unwrap_or(false),
        }
    }
}

/// User preferences file contents; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Prefs {
    pub filename_replace: Option<Replace>,
    pub job_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub video_dir: Option<PathBuf>,
    pub output_ext: Option<String>,
    pub video_ext: Option<String>,
    pub video_filename_format: Option<String>,
    pub ffmpeg: Option<PathBuf>,
    pub overwrite: Option<bool>,
}
