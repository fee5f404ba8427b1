//! External metadata tools the batch calls into.
//!
//! The core never shells out directly: it talks to a [`MetadataTool`] and
//! tests substitute doubles with fixed responses.
pub mod error;
pub mod exiftool;
pub mod ffmpeg;

use chrono::{DateTime, Utc};
use error::AdapterError;
use std::path::Path;

/// Narrow contract to an external metadata collaborator.
pub trait MetadataTool {
    /// Reads the file's currently embedded creation-timestamp string.
    /// `Ok(None)` means the field is absent or blank; `Err` means the tool
    /// itself could not be invoked or failed.
    fn probe(&mut self, file: &Path) -> Result<Option<String>, AdapterError>;

    /// Writes a copy of `input` to `output` with `timestamp` stamped into
    /// its metadata, formatted however this collaborator expects. The
    /// original file is never mutated.
    fn write(
        &mut self,
        input: &Path,
        output: &Path,
        timestamp: DateTime<Utc>,
    ) -> Result<(), AdapterError>;
}
