use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

static RE_24H: OnceLock<Regex> = OnceLock::new();
static RE_12H: OnceLock<Regex> = OnceLock::new();
static RE_MERIDIEM_AHEAD: OnceLock<Regex> = OnceLock::new();

/// Extracts a civil timestamp from a media filename.
///
/// Two pattern families are tried in order:
/// - 24-hour: `YYYY-MM-DD HH.MM.SS` anywhere in the name, e.g.
///   `[trip] 2018-04-07 17.50.41-1.mp4`
/// - 12-hour: `YYYY-MM-DD at HH.MM.SS AM|PM`, e.g.
///   `WhatsApp Video 2025-12-31 at 11.08.35 PM.mp4`
///
/// A 24-hour match whose trailing text contains a whitespace-separated
/// AM/PM marker anywhere is really the head of a 12-hour string and is
/// discarded so the 12-hour pattern can claim it. The marker search covers
/// the whole remainder, not just the characters right after the match.
/// Components that pass the regex but do
/// not form a valid calendar date or time (month 13, hour 99) yield `None`,
/// the same as a filename with no date at all.
pub fn parse_datetime_from_filename(filename: &str) -> Option<NaiveDateTime> {
    // --- Attempt 1: 24-hour YYYY-MM-DD HH.MM.SS format ---
    let re24 = RE_24H.get_or_init(|| {
        Regex::new(r"(\d{4})-(\d{2})-(\d{2})\s+(\d{2})\.(\d{2})\.(\d{2})").unwrap()
    });
    if let Some(caps) = re24.captures(filename) {
        let rest = &filename[caps.get(0).unwrap().end()..];
        let meridiem_ahead =
            RE_MERIDIEM_AHEAD.get_or_init(|| Regex::new(r"(?i)\s+(AM|PM)").unwrap());
        if !meridiem_ahead.is_match(rest) {
            return build_civil(&caps, None);
        }
        // Trailing AM/PM means the digits belong to a 12-hour string.
    }

    // --- Attempt 2: 12-hour YYYY-MM-DD at HH.MM.SS AM/PM format ---
    let re12 = RE_12H.get_or_init(|| {
        Regex::new(r"(?i)(\d{4})-(\d{2})-(\d{2})\s+at\s+(\d{1,2})\.(\d{2})\.(\d{2})\s+(AM|PM)")
            .unwrap()
    });
    if let Some(caps) = re12.captures(filename) {
        let meridiem = caps.get(7).map(|m| m.as_str().to_ascii_uppercase());
        return build_civil(&caps, meridiem.as_deref());
    }

    None
}

/// Builds a `NaiveDateTime` from capture groups 1..=6, normalizing a 12-hour
/// reading when a meridiem marker is given.
fn build_civil(caps: &regex::Captures, meridiem: Option<&str>) -> Option<NaiveDateTime> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let mut hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;
    let second: u32 = caps[6].parse().ok()?;

    match meridiem {
        Some("PM") if hour != 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        _ => {}
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_24h_with_bracketed_prefix() {
        assert_eq!(
            parse_datetime_from_filename("[trip] 2018-04-07 17.50.41-1.mp4"),
            Some(civil(2018, 4, 7, 17, 50, 41))
        );
    }

    #[test]
    fn test_24h_without_prefix() {
        assert_eq!(
            parse_datetime_from_filename("2016-12-19 19.10.47-1.m4v"),
            Some(civil(2016, 12, 19, 19, 10, 47))
        );
    }

    #[test]
    fn test_12h_pm_adds_twelve() {
        assert_eq!(
            parse_datetime_from_filename("2025-12-31 at 11.08.35 PM.mp4"),
            Some(civil(2025, 12, 31, 23, 8, 35))
        );
    }

    #[test]
    fn test_12h_midnight_and_noon() {
        assert_eq!(
            parse_datetime_from_filename("2025-12-31 at 12.00.00 AM.jpg"),
            Some(civil(2025, 12, 31, 0, 0, 0))
        );
        assert_eq!(
            parse_datetime_from_filename("2025-06-30 at 12.15.00 PM.jpg"),
            Some(civil(2025, 6, 30, 12, 15, 0))
        );
    }

    #[test]
    fn test_12h_lowercase_marker() {
        assert_eq!(
            parse_datetime_from_filename("2024-01-05 at 9.05.07 pm.heic"),
            Some(civil(2024, 1, 5, 21, 5, 7))
        );
    }

    #[test]
    fn test_whatsapp_name_resolves_via_12h_pattern() {
        // Must not be misread as a 24-hour match on a different substring.
        assert_eq!(
            parse_datetime_from_filename("WhatsApp Video 2025-12-31 at 11.08.35 PM.mp4"),
            Some(civil(2025, 12, 31, 23, 8, 35))
        );
    }

    #[test]
    fn test_24h_match_followed_by_meridiem_is_discarded() {
        // Looks like a 24-hour reading but the trailing PM disqualifies it,
        // and the 12-hour pattern cannot claim it either (no "at").
        assert_eq!(
            parse_datetime_from_filename("2025-12-31 23.08.35 PM.mp4"),
            None
        );
    }

    #[test]
    fn test_meridiem_anywhere_in_trailing_text_discards_24h_match() {
        // The marker does not have to sit right after the digits; anything
        // whitespace-separated later in the name disqualifies the reading.
        assert_eq!(
            parse_datetime_from_filename("2018-04-07 17.50.41 party PM.mp4"),
            None
        );
    }

    #[test]
    fn test_12h_hour_out_of_range_yields_none() {
        // Hour 15 with a PM marker normalizes to 27, which no clock has.
        assert_eq!(
            parse_datetime_from_filename("2025-06-24 at 15.08.35 PM.jpeg"),
            None
        );
    }

    #[test]
    fn test_no_date_pattern() {
        assert_eq!(parse_datetime_from_filename("IMG_0001.jpg"), None);
        assert_eq!(parse_datetime_from_filename("holiday clip.mov"), None);
    }

    #[test]
    fn test_malformed_calendar_components_yield_none() {
        assert_eq!(
            parse_datetime_from_filename("2024-13-01 10.00.00.mp4"),
            None
        );
        assert_eq!(
            parse_datetime_from_filename("2024-02-30 10.00.00.mp4"),
            None
        );
        assert_eq!(
            parse_datetime_from_filename("2024-05-01 99.00.00.mp4"),
            None
        );
    }
}
