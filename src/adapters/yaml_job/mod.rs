// YAML job adapter - Loads job documents

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::model::Job;
use crate::error::{ClipBatchError, ClipBatchResult};

/// Template written by `clipbatch init`
pub const JOB_TEMPLATE: &str = r#"# Directory holding the source recordings (named after their start time)
video-dir: "."

# Directory clips are written to (must already exist)
output-dir: "."

# Source recordings, identified by their recording start time
videos: []
#  - date: "2020-01-01T00:00:00"
#    # Virtual start time inside the recording (shifts output names)
#    epoch: "0"
#    # Base title shared by every clip of this recording
#    title: "video 1"
#    clips:
#      - time: "0 - 5:00"
#        title: "first five minutes"
#      - time: "1:30:00 - 1:30:01"
#        title: "one second long"
"#;

/// Job document loader
pub struct YamlJobLoader;

impl YamlJobLoader {
    /// Parse and validate a job document held in memory
    pub fn from_str(config: &Config, path: &Path, document: &str) -> ClipBatchResult<Job> {
        if document.trim().is_empty() {
            return Ok(Job::from_value(config, &Value::Null)?);
        }
        let value: Value =
            serde_yaml::from_str(document).map_err(|source| ClipBatchError::JobSyntax {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Job::from_value(config, &value)?)
    }

    /// Read, parse and validate the job document at `path`
    pub fn load(config: &Config, path: &Path) -> ClipBatchResult<Job> {
        debug!(path = %path.display(), "reading job document");
        let document =
            std::fs::read_to_string(path).map_err(|e| ClipBatchError::io(path, e))?;
        let job = Self::from_str(config, path, &document)?;
        info!(
            path = %path.display(),
            videos = job.videos().len(),
            clips = job.clip_count(),
            "loaded job"
        );
        Ok(job)
    }

    /// Write the job template to `path`, refusing to replace an existing file
    pub fn write_template(path: &Path) -> ClipBatchResult<()> {
        use std::io::Write;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| ClipBatchError::io(path, e))?;
        file.write_all(JOB_TEMPLATE.as_bytes())
            .map_err(|e| ClipBatchError::io(path, e))?;
        info!(path = %path.display(), "wrote job template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;

    #[test]
    fn test_template_is_a_valid_empty_job() {
        let job = YamlJobLoader::from_str(&Config::default(), Path::new("clip.yaml"), JOB_TEMPLATE)
            .unwrap();
        assert!(job.videos().is_empty());
        assert_eq!(job.video_dir(), Path::new("."));
    }

    #[test]
    fn test_syntax_error_names_file() {
        let err = YamlJobLoader::from_str(&Config::default(), Path::new("bad.yaml"), "videos: [")
            .unwrap_err();
        assert!(err.to_string().contains("bad.yaml"), "{}", err);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_empty_document_is_empty_job() {
        let job = YamlJobLoader::from_str(&Config::default(), Path::new("clip.yaml"), "").unwrap();
        assert!(job.videos().is_empty());
    }

    #[test]
    fn test_write_template_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.yaml");
        YamlJobLoader::write_template(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), JOB_TEMPLATE);
        assert!(YamlJobLoader::write_template(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = YamlJobLoader::load(&Config::default(), &dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ClipBatchError::Io { .. }));
    }
}
