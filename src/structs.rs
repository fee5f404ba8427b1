use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What kind of media a file holds, decided from its extension.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Video,
    Photo,
}

/// A candidate file discovered in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Terminal classification of processing one file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// The file was re-stamped and written to the output directory.
    /// `original` is the collaborator's raw probed string (or a placeholder
    /// when no probe was made), `new` the target instant as UTC ISO-8601.
    Success { original: String, new: String },
    /// No timestamp could be determined for this file; expected and benign.
    Skipped { reason: String },
    /// A collaborator call failed; the batch continues with the next file.
    Error { detail: String },
}

/// One processed file together with its outcome, in batch order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub path: PathBuf,
    pub kind: MediaKind,
    pub outcome: Outcome,
}

/// Accumulated results of one batch run.
///
/// Holds the ordered per-file results plus the output directory the
/// re-stamped copies were written to. Counts always sum to `results.len()`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub results: Vec<FileResult>,
    pub output_dir: PathBuf,
}

impl BatchReport {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            results: Vec::new(),
            output_dir,
        }
    }

    pub fn push(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn success_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Success { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Skipped { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Error { .. }))
            .count()
    }
}
