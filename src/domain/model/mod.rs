// Domain models - Job, Video and Clip

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::config::Config;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::rules::FilenameRules;
use crate::utils::path::split_extension;
use crate::utils::time::{
    duration_to_seconds, format_duration_for_display, format_duration_for_path, parse_duration,
    parse_timestamp,
};


/// A single trim request relative to its video's recording start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    start: TimeDelta,
    end: TimeDelta,
    title: String,
}

impl Clip {
    /// Create a clip, enforcing a non-negative start, `end > start` and a
    /// non-empty title
    pub fn new(start: TimeDelta, end: TimeDelta, title: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        let describe = || {
            format!(
                "time {:?}, title {:?}",
                format!(
                    "{} - {}",
                    format_duration_for_display(start),
                    format_duration_for_display(end)
                ),
                title
            )
        };

        if title.is_empty() {
            return Err(DomainError::validation(format!(
                "clip title cannot be empty: {}",
                describe()
            )));
        }
        if start < TimeDelta::zero() {
            return Err(DomainError::validation(format!(
                "clip cannot start before the recording: {}",
                describe()
            )));
        }
        if end <= start {
            return Err(DomainError::validation(format!(
                "bad clip start/end: {}",
                describe()
            )));
        }

        Ok(Self { start, end, title })
    }

    /// Build a clip from a raw `{time, title}` record
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let record = as_record(value, "clip")?;

        let title = required_string(record, "title", "clip")?;
        if title.is_empty() {
            return Err(DomainError::validation("clip title cannot be empty"));
        }

        let time = required_string(record, "time", "clip")?;
        let (start, end) = split_clip_time(&time).ok_or_else(|| {
            DomainError::validation(format!(
                "clip time must look like \"<start> - <end>\": {:?}",
                time
            ))
        })?;

        Self::new(parse_duration(start)?, parse_duration(end)?, title)
    }

    pub fn start(&self) -> TimeDelta {
        self.start
    }

    pub fn end(&self) -> TimeDelta {
        self.end
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Destination filename for this clip:
    /// `<date+epoch> - T+<start-epoch> - <video title> - <clip title>.<ext>`,
    /// case-folded and munged.
    pub fn path_str(
        &self,
        config: &Config,
        video_date: NaiveDateTime,
        video_epoch: TimeDelta,
        video_title: &str,
    ) -> DomainResult<String> {
        let base = video_date.checked_add_signed(video_epoch).ok_or_else(|| {
            DomainError::validation(format!(
                "epoch {} moves {} out of range",
                format_duration_for_display(video_epoch),
                video_date
            ))
        })?;
        let relative_start = self.start.checked_sub(&video_epoch).ok_or_else(|| {
            DomainError::validation(format!(
                "epoch {} is out of range for clip {:?}",
                format_duration_for_display(video_epoch),
                self.title
            ))
        })?;

        let base = base.format("%Y-%m-%d %H-%M-%S").to_string();
        let relative_start = format!("T+{}", format_duration_for_path(relative_start));
        let file_name = format!("{}.{}", self.title, config.output_ext);

        let joined = FilenameRules::join_fields([
            base.as_str(),
            relative_start.as_str(),
            video_title,
            file_name.as_str(),
        ]);
        Ok(FilenameRules::munge(&joined, &config.filename_replace))
    }
}

/// Split `"<start> - <end>"` at the first `-` that leaves a non-empty start.
///
/// A leading sign on either side stays attached to its duration, so
/// `"-1 - 0"` yields `("-1", "0")` and `"1--2"` yields `("1", "-2")`.
pub fn split_clip_time(time: &str) -> Option<(&str, &str)> {
    let time = time.trim();
    time.match_indices('-').find_map(|(i, _)| {
        let start = time[..i].trim();
        let end = time[i + 1..].trim();
        (!start.is_empty()).then_some((start, end))
    })
}

/// One source recording and the clips to cut from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    date: NaiveDateTime,
    title: String,
    epoch: TimeDelta,
    clips: Vec<Clip>,
}

impl Video {
    pub fn new(
        date: NaiveDateTime,
        title: impl Into<String>,
        epoch: TimeDelta,
        clips: Vec<Clip>,
    ) -> Self {
        Self {
            date,
            title: title.into(),
            epoch,
            clips,
        }
    }

    /// Build a video from a raw `{date, title, epoch?, clips?}` record
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let record = as_record(value, "video")?;

        let date = parse_timestamp(&required_string(record, "date", "video")?)?;
        let title = required_string(record, "title", "video")?;
        let epoch = match optional_string(record, "epoch")? {
            Some(epoch) => parse_duration(&epoch)?,
            None => TimeDelta::zero(),
        };

        let clips = match record.get("clips") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(clips)) => clips
                .iter()
                .enumerate()
                .map(|(i, clip)| Clip::from_value(clip).map_err(|e| e.at(format!("clips[{}]", i))))
                .collect::<DomainResult<Vec<_>>>()?,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "clips must be a list, got {}",
                    describe_value(other)
                )))
            }
        };

        Ok(Self::new(date, title, epoch, clips))
    }

    /// Recognise a source recording by its filename.
    ///
    /// The configured mapping is applied to the filename format, so a
    /// `{" ": "_"}` mapping turns `%Y %m %d` into `%Y_%m_%d` before parsing.
    pub fn from_path(config: &Config, path: &Path) -> DomainResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| DomainError::parse("video filename", path.display().to_string()))?;
        let (stem, ext) = split_extension(file_name);
        if ext != Some(config.video_ext.as_str()) {
            return Err(DomainError::parse("video filename", file_name));
        }

        let format = FilenameRules::munge_source(&config.video_filename_format, &config.filename_replace);
        let date = NaiveDateTime::parse_from_str(stem, &format)
            .map_err(|_| DomainError::parse("video filename", file_name))?;

        Ok(Self::new(date, stem, TimeDelta::zero(), Vec::new()))
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn epoch(&self) -> TimeDelta {
        self.epoch
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Expected filename of the source recording
    pub fn source_filename(&self, config: &Config) -> DomainResult<String> {
        let format = &config.video_filename_format;
        let items: Vec<Item> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(DomainError::validation(format!(
                "invalid video filename format: {:?}",
                format
            )));
        }

        let mut name = String::new();
        write!(name, "{}.{}", self.date.format_with_items(items.into_iter()), config.video_ext)
            .map_err(|_| {
                DomainError::validation(format!(
                    "video filename format {:?} cannot render {}",
                    format, self.date
                ))
            })?;
        Ok(FilenameRules::munge_source(&name, &config.filename_replace))
    }

    /// Destination filename of one of this video's clips
    pub fn clip_filename(&self, config: &Config, clip: &Clip) -> DomainResult<String> {
        clip.path_str(config, self.date, self.epoch, &self.title)
    }
}

/// The full unit of work loaded from a job document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    output_dir: PathBuf,
    video_dir: PathBuf,
    videos: Vec<Video>,
}

impl Job {
    pub fn new(output_dir: impl Into<PathBuf>, video_dir: impl Into<PathBuf>, videos: Vec<Video>) -> Self {
        Self {
            output_dir: output_dir.into(),
            video_dir: video_dir.into(),
            videos,
        }
    }

    /// Build a job from a parsed document. Directories default to the
    /// configured ones; an empty document is an empty job.
    pub fn from_value(config: &Config, value: &Value) -> DomainResult<Self> {
        let empty = Mapping::new();
        let record = match value {
            Value::Null => &empty,
            other => as_record(other, "job")?,
        };

        let output_dir = optional_string(record, "output-dir")?
            .map(PathBuf::from)
            .unwrap_or_else(|| config.output_dir.clone());
        let video_dir = optional_string(record, "video-dir")?
            .map(PathBuf::from)
            .unwrap_or_else(|| config.video_dir.clone());

        let videos = match record.get("videos") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(videos)) => videos
                .iter()
                .enumerate()
                .map(|(i, video)| Video::from_value(video).map_err(|e| e.at(format!("videos[{}]", i))))
                .collect::<DomainResult<Vec<_>>>()?,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "videos must be a list, got {}",
                    describe_value(other)
                )))
            }
        };

        Ok(Self::new(output_dir, video_dir, videos))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn clip_count(&self) -> usize {
        self.videos.iter().map(|v| v.clips().len()).sum()
    }

    /// Source path of a video inside this job's video directory
    pub fn source_path(&self, config: &Config, video: &Video) -> DomainResult<PathBuf> {
        Ok(self.video_dir.join(video.source_filename(config)?))
    }

    /// Every trim request in processing order, without touching the filesystem
    pub fn plan(&self, config: &Config) -> DomainResult<Vec<TrimRequest>> {
        let mut plan = Vec::with_capacity(self.clip_count());
        for (i, video) in self.videos.iter().enumerate() {
            let source = self
                .source_path(config, video)
                .map_err(|e| e.at(format!("videos[{}]", i)))?;
            for (j, clip) in video.clips().iter().enumerate() {
                let request = TrimRequest::for_clip(self, config, &source, video, clip)
                    .map_err(|e| e.at(format!("videos[{}].clips[{}]", i, j)))?;
                plan.push(request);
            }
        }
        Ok(plan)
    }
}

/// Arguments of one trim operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimRequest {
    pub source: PathBuf,
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub destination: PathBuf,
}

impl TrimRequest {
    pub fn for_clip(
        job: &Job,
        config: &Config,
        source: &Path,
        video: &Video,
        clip: &Clip,
    ) -> DomainResult<Self> {
        Ok(Self {
            source: source.to_path_buf(),
            start_seconds: duration_to_seconds(clip.start()),
            duration_seconds: duration_to_seconds(clip.duration()),
            destination: job.output_dir.join(video.clip_filename(config, clip)?),
        })
    }
}

fn as_record<'a>(value: &'a Value, what: &str) -> DomainResult<&'a Mapping> {
    value.as_mapping().ok_or_else(|| {
        DomainError::validation(format!(
            "{} must be a mapping, got {}",
            what,
            describe_value(value)
        ))
    })
}

fn required_string(record: &Mapping, key: &str, what: &str) -> DomainResult<String> {
    optional_string(record, key)?
        .ok_or_else(|| DomainError::validation(format!("{} is missing `{}`", what, key)))
}

/// Scalar field coerced to a string; null counts as absent
fn optional_string(record: &Mapping, key: &str) -> DomainResult<Option<String>> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(DomainError::validation(format!(
            "`{}` must be a scalar, got {}",
            key,
            describe_value(other)
        ))),
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
