use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the media-redate crate.
///
/// Per-file failures never surface here; they are converted into
/// [`crate::structs::Outcome`] values at the file boundary. Only pre-flight
/// conditions that invalidate the whole batch become a `MediaRedateError`.
#[derive(Error, Debug)]
pub enum MediaRedateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to enumerate directory contents: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no metadata tool is available; install ffmpeg (videos) or exiftool (photos)")]
    NoToolsAvailable,
}
