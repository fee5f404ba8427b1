//! Converts naive civil timestamps to UTC instants in a named zone.
//!
//! The configured zone is injected by the caller; nothing here assumes a
//! particular region even though the CLI defaults to America/Sao_Paulo.

use super::error::TimeError;
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Interprets `civil` as wall-clock time in `tz` and resolves it to UTC.
///
/// The zone database decides the offset for that specific date, so DST is
/// handled per date. Ambiguous readings during a fall-back overlap take the
/// earliest mapping; a reading inside a spring-forward gap does not exist
/// and is an error.
pub fn civil_to_utc(civil: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>, TimeError> {
    match tz.from_local_datetime(&civil) {
        LocalResult::Single(zoned) | LocalResult::Ambiguous(zoned, _) => {
            Ok(zoned.with_timezone(&Utc))
        }
        LocalResult::None => Err(TimeError::NonexistentLocalTime(civil, tz.name().to_string())),
    }
}

/// Human-readable offset label for `civil` in `tz`, e.g. `UTC-03:00`.
///
/// Reporting convenience only. For a nonexistent local time the label falls
/// back to the offset the zone has when reading `civil` as UTC.
pub fn offset_label(civil: NaiveDateTime, tz: Tz) -> String {
    let offset_seconds = match tz.from_local_datetime(&civil) {
        LocalResult::Single(zoned) | LocalResult::Ambiguous(zoned, _) => {
            zoned.offset().fix().local_minus_utc()
        }
        LocalResult::None => tz.offset_from_utc_datetime(&civil).fix().local_minus_utc(),
    };
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono_tz::America::Sao_Paulo;

    fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_sao_paulo_standard_time_is_utc_minus_3() {
        // July is winter in Brazil: no DST, UTC-03:00.
        let utc = civil_to_utc(civil(2018, 7, 15, 12, 0, 0), Sao_Paulo).unwrap();
        assert_eq!(utc.to_rfc3339(), "2018-07-15T15:00:00+00:00");
        assert_eq!(offset_label(civil(2018, 7, 15, 12, 0, 0), Sao_Paulo), "UTC-03:00");
    }

    #[test]
    fn test_sao_paulo_summer_time_is_utc_minus_2() {
        // January 2018 is inside the historical Brazilian DST window.
        let utc = civil_to_utc(civil(2018, 1, 15, 12, 0, 0), Sao_Paulo).unwrap();
        assert_eq!(utc.to_rfc3339(), "2018-01-15T14:00:00+00:00");
        assert_eq!(offset_label(civil(2018, 1, 15, 12, 0, 0), Sao_Paulo), "UTC-02:00");
    }

    #[test]
    fn test_round_trip_across_dst_boundary() {
        for reading in [
            civil(2018, 1, 15, 12, 0, 0), // summer time
            civil(2018, 7, 15, 12, 0, 0), // standard time
        ] {
            let utc = civil_to_utc(reading, Sao_Paulo).unwrap();
            let back = utc.with_timezone(&Sao_Paulo).naive_local();
            assert_eq!(back, reading);
        }
    }

    #[test]
    fn test_spring_forward_gap_is_an_error() {
        // Brazilian DST 2017 started at midnight 2017-10-15; 00:30 never existed.
        let gap = civil(2017, 10, 15, 0, 30, 0);
        assert!(matches!(
            civil_to_utc(gap, Sao_Paulo),
            Err(TimeError::NonexistentLocalTime(_, _))
        ));
    }

    #[test]
    fn test_fall_back_overlap_takes_earliest_mapping() {
        // DST 2017/18 ended 2018-02-17 24:00 (clocks back to 23:00), so
        // 23:30 on the 17th occurred twice; the earliest (UTC-02:00) wins.
        let overlap = civil(2018, 2, 17, 23, 30, 0);
        let utc = civil_to_utc(overlap, Sao_Paulo).unwrap();
        assert_eq!(utc.to_rfc3339(), "2018-02-18T01:30:00+00:00");
    }
}
