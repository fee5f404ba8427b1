//! Utility functions for parsing collaborator timestamp strings into chrono types.

use chrono::NaiveDateTime;

/// Parses the raw creation-timestamp string a probe collaborator returned.
///
/// Accepts the formats the two collaborators actually produce, plus common
/// close variants:
/// - ffmpeg `creation_time`: `2022-01-01T00:00:00.000000Z`
/// - exiftool `DateTimeOriginal`: `2022:03:10 08:15:00`
///
/// Fractional seconds are parsed but truncated downstream; an unrecognized
/// string is `None` (the caller treats it the same as an absent field).
pub fn parse_probed(s: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    let trimmed = s.trim();
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Parses the `--exact-date` CLI value: an ISO-8601-like civil timestamp,
/// accepting both the `T`-separated and the space-separated form.
pub fn parse_exact_date(s: &str) -> Option<NaiveDateTime> {
    let formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    let trimmed = s.trim();
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    None
}
