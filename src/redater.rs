use crate::adapters::MetadataTool;
use crate::error::MediaRedateError;
use crate::policy::{PolicyError, TimestampPolicy};
use crate::structs::{BatchReport, FileResult, MediaFile, MediaKind, Outcome};
use crate::time::filename_parsing::parse_datetime_from_filename;
use crate::time::parsing::parse_probed;
use crate::utils::list_media_files;
use bon::bon;
use chrono_tz::Tz;
use std::fs;
use std::path::Path;

/// The main entry point for a batch run.
///
/// Holds one metadata tool per media kind plus the zone filename timestamps
/// are interpreted in. It is designed to be created once and reused across
/// directories. A kind whose tool is absent is excluded from every batch;
/// construction with no tools at all is allowed but `run` will refuse it.
///
/// Use the builder pattern to construct an instance:
/// ```rust,no_run
/// # use media_redate::adapters::ffmpeg::FfmpegTool;
/// # use media_redate::redater::MediaRedater;
/// let redater = MediaRedater::builder()
///     .maybe_video_tool(FfmpegTool::detect(None).map(|t| Box::new(t) as _))
///     .timezone(chrono_tz::America::Sao_Paulo)
///     .build();
/// ```
pub struct MediaRedater {
    video_tool: Option<Box<dyn MetadataTool>>,
    photo_tool: Option<Box<dyn MetadataTool>>,
    timezone: Tz,
}

#[bon]
impl MediaRedater {
    /// Constructs a `MediaRedater` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `video_tool: Option<Box<dyn MetadataTool>>` - The collaborator
    ///   handling video files, typically
    ///   [`crate::adapters::ffmpeg::FfmpegTool`]. `None` excludes videos.
    /// * `photo_tool: Option<Box<dyn MetadataTool>>` - The collaborator
    ///   handling photo files, typically
    ///   [`crate::adapters::exiftool::ExifToolAdapter`]. `None` excludes
    ///   photos.
    /// * `timezone: Tz` - (Default: `America/Sao_Paulo`) The zone a
    ///   filename-derived civil timestamp is interpreted in.
    #[builder]
    pub fn new(
        video_tool: Option<Box<dyn MetadataTool>>,
        photo_tool: Option<Box<dyn MetadataTool>>,
        #[builder(default = chrono_tz::America::Sao_Paulo)] timezone: Tz,
    ) -> Self {
        Self {
            video_tool,
            photo_tool,
            timezone,
        }
    }

    pub fn video_tool_available(&self) -> bool {
        self.video_tool.is_some()
    }

    pub fn photo_tool_available(&self) -> bool {
        self.photo_tool.is_some()
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Runs one batch over the immediate files of `directory`.
    ///
    /// Re-stamped copies land in a subdirectory under `directory`; source
    /// files are never mutated. Each completed [`FileResult`] is handed to
    /// `progress` before the next file starts. Per-file collaborator
    /// failures become `Outcome::Error` and never abort the batch; only
    /// pre-flight problems (not a directory, no tools, unreadable listing)
    /// return an `Err`.
    pub fn run(
        &mut self,
        directory: &Path,
        policy: &TimestampPolicy,
        progress: &mut dyn FnMut(&FileResult),
    ) -> Result<BatchReport, MediaRedateError> {
        if !directory.is_dir() {
            return Err(MediaRedateError::NotADirectory(directory.to_path_buf()));
        }
        if self.video_tool.is_none() && self.photo_tool.is_none() {
            return Err(MediaRedateError::NoToolsAvailable);
        }

        let mut files = list_media_files(directory)?;
        // A kind without a tool is not attempted: neither success nor error.
        files.retain(|f| match f.kind {
            MediaKind::Video => self.video_tool.is_some(),
            MediaKind::Photo => self.photo_tool.is_some(),
        });

        let output_dir = directory.join(policy.output_subdir());
        fs::create_dir_all(&output_dir)?;

        let mut report = BatchReport::new(output_dir.clone());
        for file in files {
            let outcome = self.process_file(&file, policy, &output_dir);
            let result = FileResult {
                path: file.path,
                kind: file.kind,
                outcome,
            };
            progress(&result);
            report.push(result);
        }
        Ok(report)
    }

    /// Processes a single file to a terminal outcome. Every failure is
    /// converted here; nothing escapes to abort the batch.
    fn process_file(
        &mut self,
        file: &MediaFile,
        policy: &TimestampPolicy,
        output_dir: &Path,
    ) -> Outcome {
        let timezone = self.timezone;
        let file_name = file.path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        // Extraction happens before any probe: a file outside the naming
        // convention is skipped without touching the collaborator.
        let filename_ts = if matches!(policy, TimestampPolicy::FromFilename) {
            match parse_datetime_from_filename(file_name) {
                Some(ts) => Some(ts),
                None => {
                    return Outcome::Skipped {
                        reason: PolicyError::NoFilenameDate.to_string(),
                    };
                }
            }
        } else {
            None
        };

        let tool = match file.kind {
            MediaKind::Video => self.video_tool.as_mut(),
            MediaKind::Photo => self.photo_tool.as_mut(),
        };
        let Some(tool) = tool else {
            return Outcome::Skipped {
                reason: "no metadata tool for this media kind".to_string(),
            };
        };

        let probed_raw = match policy {
            TimestampPolicy::Offset { .. } => match tool.probe(&file.path) {
                Ok(value) => value,
                Err(e) => {
                    return Outcome::Error {
                        detail: e.to_string(),
                    };
                }
            },
            // Best-effort, reporting only: a probe failure here is not an
            // error and the prior value is simply unknown.
            TimestampPolicy::FromFilename => tool.probe(&file.path).ok().flatten(),
            TimestampPolicy::ExactDate { .. } => None,
        };
        let probed_ts = probed_raw.as_deref().and_then(parse_probed);

        let target = match policy.resolve(probed_ts, filename_ts, timezone) {
            Ok(target) => target,
            Err(e @ (PolicyError::MissingMetadata | PolicyError::NoFilenameDate)) => {
                return Outcome::Skipped {
                    reason: e.to_string(),
                };
            }
            Err(e) => {
                return Outcome::Error {
                    detail: e.to_string(),
                };
            }
        };

        let output_path = output_dir.join(file.path.file_name().unwrap_or_default());
        if let Err(e) = tool.write(&file.path, &output_path, target) {
            return Outcome::Error {
                detail: e.to_string(),
            };
        }

        let original = match (probed_raw, policy) {
            (Some(raw), _) => raw,
            (None, TimestampPolicy::ExactDate { .. }) => "(not probed)".to_string(),
            (None, _) => "(none)".to_string(),
        };
        Outcome::Success {
            original,
            new: target.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}
