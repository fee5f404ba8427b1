//! The rule governing how a file's target timestamp is computed.

use crate::time::error::TimeError;
use crate::time::zone::civil_to_utc;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// One policy governs an entire batch run; the variants are mutually
/// exclusive and validated before any file is touched. Adding a policy is a
/// compile-time exhaustiveness change, not a copy-pasted script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Shift each file's existing embedded timestamp by a fixed delta.
    /// At least one component must be non-zero; components may be negative.
    Offset { days: i64, hours: i64, minutes: i64 },
    /// Stamp every file with the same fully-specified civil instant,
    /// taken verbatim as UTC. No probe is made.
    ExactDate { instant: NaiveDateTime },
    /// Derive each file's timestamp from its filename, interpreted as local
    /// wall-clock time in the configured zone.
    FromFilename,
}

#[derive(Error, Debug, PartialEq)]
pub enum PolicyError {
    #[error("offset must have at least one non-zero component")]
    ZeroOffset,

    #[error("no usable creation timestamp in metadata")]
    MissingMetadata,

    #[error("no date in filename")]
    NoFilenameDate,

    #[error("offset is out of the representable range")]
    OffsetOutOfRange,

    #[error(transparent)]
    Time(#[from] TimeError),
}

impl TimestampPolicy {
    /// Pre-flight validation, run once before any file is touched.
    pub fn validate(&self) -> Result<(), PolicyError> {
        match self {
            Self::Offset {
                days: 0,
                hours: 0,
                minutes: 0,
            } => Err(PolicyError::ZeroOffset),
            _ => Ok(()),
        }
    }

    /// Whether resolving this policy requires the file's embedded timestamp.
    pub fn needs_probe(&self) -> bool {
        matches!(self, Self::Offset { .. })
    }

    /// Name of the output subdirectory created under the source directory.
    pub fn output_subdir(&self) -> &'static str {
        match self {
            Self::Offset { .. } | Self::ExactDate { .. } => "updated",
            Self::FromFilename => "dated",
        }
    }

    /// Computes the target UTC instant for one file.
    ///
    /// `probed` is the parsed embedded timestamp (when the policy needs
    /// one), `filename_ts` the civil timestamp extracted from the filename.
    /// An offset is a pure delta: the result stays in the frame of the
    /// probed source and is not zone-normalized. Filename timestamps encode
    /// local wall-clock time and go through the timezone normalizer.
    pub fn resolve(
        &self,
        probed: Option<NaiveDateTime>,
        filename_ts: Option<NaiveDateTime>,
        timezone: Tz,
    ) -> Result<DateTime<Utc>, PolicyError> {
        match self {
            Self::Offset {
                days,
                hours,
                minutes,
            } => {
                let base = probed.ok_or(PolicyError::MissingMetadata)?;
                let delta = TimeDelta::try_days(*days)
                    .zip(TimeDelta::try_hours(*hours))
                    .zip(TimeDelta::try_minutes(*minutes))
                    .map(|((d, h), m)| d + h + m)
                    .ok_or(PolicyError::OffsetOutOfRange)?;
                let shifted = base
                    .checked_add_signed(delta)
                    .ok_or(PolicyError::OffsetOutOfRange)?;
                Ok(shifted.and_utc())
            }
            Self::ExactDate { instant } => Ok(instant.and_utc()),
            Self::FromFilename => {
                let civil = filename_ts.ok_or(PolicyError::NoFilenameDate)?;
                Ok(civil_to_utc(civil, timezone)?)
            }
        }
    }
}
