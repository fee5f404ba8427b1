//! Video collaborator: probes and rewrites `creation_time` through ffmpeg.

use super::MetadataTool;
use super::error::AdapterError;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

static RE_CREATION_TIME: OnceLock<Regex> = OnceLock::new();

pub struct FfmpegTool {
    executable: PathBuf,
}

impl FfmpegTool {
    /// Returns the tool if an ffmpeg executable can be started, else `None`.
    pub fn detect(executable: Option<PathBuf>) -> Option<Self> {
        let executable = executable.unwrap_or_else(|| PathBuf::from("ffmpeg"));
        let available = Command::new(&executable)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        available.then_some(Self { executable })
    }
}

impl MetadataTool for FfmpegTool {
    fn probe(&mut self, file: &Path) -> Result<Option<String>, AdapterError> {
        // `ffmpeg -i` without an output target exits non-zero; the metadata
        // dump still lands on stderr, so only a spawn failure is an error.
        let output = Command::new(&self.executable)
            .arg("-i")
            .arg(file)
            .output()
            .map_err(|source| AdapterError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let re = RE_CREATION_TIME
            .get_or_init(|| Regex::new(r"creation_time\s*:\s*(.+)").unwrap());
        Ok(re
            .captures(&stderr)
            .map(|caps| caps[1].trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    fn write(
        &mut self,
        input: &Path,
        output_path: &Path,
        timestamp: DateTime<Utc>,
    ) -> Result<(), AdapterError> {
        let stamp = timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let output = Command::new(&self.executable)
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-map_metadata", "0", "-metadata"])
            .arg(format!("creation_time={stamp}"))
            .arg("-y")
            .arg(output_path)
            .output()
            .map_err(|source| AdapterError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("unknown failure")
                .trim()
                .to_string();
            Err(AdapterError::ToolFailure {
                tool: "ffmpeg",
                detail,
            })
        }
    }
}
