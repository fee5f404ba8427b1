//! Photo collaborator: probes through the persistent exiftool process and
//! rewrites the EXIF date tags on a copy of the file.

use super::MetadataTool;
use super::error::AdapterError;
use chrono::{DateTime, Utc};
use exiftool::ExifTool;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct ExifToolAdapter {
    exiftool: ExifTool,
    executable: PathBuf,
}

impl ExifToolAdapter {
    /// Starts the persistent exiftool process. Fails when the executable
    /// cannot be found or started, which callers treat as "photos cannot be
    /// processed in this run".
    pub fn new(executable: Option<PathBuf>) -> Result<Self, AdapterError> {
        let (exiftool, executable) = match executable {
            Some(path) => (ExifTool::with_executable(&path)?, path),
            None => (ExifTool::new()?, PathBuf::from("exiftool")),
        };
        Ok(Self {
            exiftool,
            executable,
        })
    }
}

impl MetadataTool for ExifToolAdapter {
    fn probe(&mut self, file: &Path) -> Result<Option<String>, AdapterError> {
        let exif: Value = self.exiftool.json(file, &["-g2"])?;
        // Some cameras leave the tag present but blank.
        Ok(exif
            .get("Time")
            .and_then(|time| time.get("DateTimeOriginal"))
            .and_then(|value| value.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }

    fn write(
        &mut self,
        input: &Path,
        output_path: &Path,
        timestamp: DateTime<Utc>,
    ) -> Result<(), AdapterError> {
        fs::copy(input, output_path)?;

        let stamp = timestamp.format("%Y:%m:%d %H:%M:%S").to_string();
        let output = Command::new(&self.executable)
            .arg("-overwrite_original")
            .arg(format!("-DateTimeOriginal={stamp}"))
            .arg(format!("-CreateDate={stamp}"))
            .arg(format!("-ModifyDate={stamp}"))
            .arg(output_path)
            .output()
            .map_err(|source| AdapterError::Spawn {
                tool: "exiftool",
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AdapterError::ToolFailure {
                tool: "exiftool",
                detail: stderr.trim().to_string(),
            })
        }
    }
}
