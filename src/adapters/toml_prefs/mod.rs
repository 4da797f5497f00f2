// TOML preferences adapter - Reads the user preferences file

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Prefs;
use crate::error::{ClipBatchError, ClipBatchResult};

/// Preferences file loader
pub struct TomlPrefsLoader;

impl TomlPrefsLoader {
    /// Default preferences location: `<config dir>/clipbatch/prefs.toml`
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("APPDATA").map(PathBuf::from))
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(config_dir.join("clipbatch").join("prefs.toml"))
    }

    /// Parse preferences from a TOML string
    pub fn from_str(path: &Path, content: &str) -> ClipBatchResult<Prefs> {
        toml::from_str(content).map_err(|source| ClipBatchError::Prefs {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load preferences from `path`
    pub fn load(path: &Path) -> ClipBatchResult<Prefs> {
        let content = std::fs::read_to_string(path).map_err(|e| ClipBatchError::io(path, e))?;
        let prefs = Self::from_str(path, &content)?;
        info!(path = %path.display(), "loaded preferences");
        Ok(prefs)
    }

    /// Load the explicit preferences file if one is given, else the default
    /// one if it exists, else empty preferences.
    pub fn load_or_default(explicit: Option<&Path>) -> ClipBatchResult<Prefs> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "no preferences file");
                Ok(Prefs::default())
            }
            None => Ok(Prefs::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_prefs_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(
            &path,
            "video-dir = \"captures\"\noverwrite = true\n\n[filename-replace]\n\" \" = \"_\"\n",
        )
        .unwrap();

        let prefs = TomlPrefsLoader::load_or_default(Some(&path)).unwrap();
        assert_eq!(prefs.video_dir, Some(PathBuf::from("captures")));
        assert_eq!(prefs.overwrite, Some(true));
        assert_eq!(prefs.filename_replace.unwrap().len(), 1);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TomlPrefsLoader::load_or_default(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ClipBatchError::Io { .. }));
    }

    #[test]
    fn test_unknown_key_names_file() {
        let err = TomlPrefsLoader::from_str(Path::new("prefs.toml"), "jobpath = \"x\"").unwrap_err();
        assert!(err.to_string().contains("prefs.toml"), "{}", err);
    }
}
