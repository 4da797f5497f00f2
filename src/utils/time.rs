//! Time parsing and formatting utilities
//!
//! Recording timestamps are `NaiveDateTime`s written as `YYYY-MM-DD HH:MM:SS`
//! (`T`, space or `_` between date and time). Clip offsets are signed
//! `TimeDelta`s written as `[-]H:M:S`, `[-]M:S` or `[-]S`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::domain::errors::{DomainError, DomainResult};

const DATE_TIME_SEPARATORS: [char; 3] = ['T', ' ', '_'];

/// Parse an absolute recording timestamp.
///
/// The year must have exactly four digits; every other field accepts one or
/// two digits. Surrounding whitespace is rejected.
pub fn parse_timestamp(s: &str) -> DomainResult<NaiveDateTime> {
    let err = || DomainError::parse("timestamp", s);

    let (date, time) = s.split_once(DATE_TIME_SEPARATORS).ok_or_else(err)?;

    let date_fields: Vec<&str> = date.split('-').collect();
    let time_fields: Vec<&str> = time.split(':').collect();
    let (year, month, day) = match date_fields.as_slice() {
        [y, m, d] => (*y, *m, *d),
        _ => return Err(err()),
    };
    let (hour, minute, second) = match time_fields.as_slice() {
        [h, m, s] => (*h, *m, *s),
        _ => return Err(err()),
    };

    let year = digits(year, 4, 4).ok_or_else(err)?;
    let month = digits(month, 1, 2).ok_or_else(err)?;
    let day = digits(day, 1, 2).ok_or_else(err)?;
    let hour = digits(hour, 1, 2).ok_or_else(err)?;
    let minute = digits(minute, 1, 2).ok_or_else(err)?;
    let second = digits(second, 1, 2).ok_or_else(err)?;

    if year < 1 {
        return Err(err());
    }
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(err)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(err)?;

    Ok(date.and_time(time))
}

/// Parse a signed duration such as `1:30:00`, `-5:00` or `90`.
///
/// Components are not range-limited (`99:99:99` is 99h + 99m + 99s). The
/// caller is responsible for trimming whitespace.
pub fn parse_duration(s: &str) -> DomainResult<TimeDelta> {
    let err = || DomainError::parse("duration", s);

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let fields: Vec<&str> = unsigned.split(':').collect();
    if fields.len() > 3 {
        return Err(err());
    }

    let mut total: i64 = 0;
    for field in &fields {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let value: i64 = field.parse().map_err(|_| err())?;
        total = total
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(err)?;
    }

    let total = if negative { -total } else { total };
    TimeDelta::try_seconds(total).ok_or_else(err)
}

/// Render a duration as `{h}h{mm}m{ss}s` for use in filenames.
///
/// Negative durations render as `0h00m00s`.
pub fn format_duration_for_path(d: TimeDelta) -> String {
    let seconds = d.num_seconds().max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{}h{:02}m{:02}s", hours, minutes, seconds)
}

/// Render a signed duration with the coarsest nonzero unit: `[-]H:MM:SS`,
/// `[-]M:SS` or `[-]S`. The output is accepted by [`parse_duration`].
pub fn format_duration_for_display(d: TimeDelta) -> String {
    let seconds = d.num_seconds();
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let secs = magnitude % 60;

    if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}{}:{:02}", sign, minutes, secs)
    } else {
        format!("{}{}", sign, secs)
    }
}

/// Duration as fractional seconds, as passed to the trim operation
pub fn duration_to_seconds(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1000.0
}

fn digits(field: &str, min: usize, max: usize) -> Option<u32> {
    if field.len() < min || field.len() > max || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_separators() {
        let epoch = datetime(1970, 1, 1, 0, 0, 0);
        assert_eq!(parse_timestamp("1970-01-01 00:00:00").unwrap(), epoch);
        assert_eq!(parse_timestamp("1970-01-01T00:00:00").unwrap(), epoch);
        assert_eq!(parse_timestamp("1970-01-01_00:00:00").unwrap(), epoch);
        assert_eq!(
            parse_timestamp("1999-12-31T23:59:59").unwrap(),
            datetime(1999, 12, 31, 23, 59, 59)
        );
    }

    #[test]
    fn test_parse_timestamp_optional_padding() {
        let epoch = datetime(1970, 1, 1, 0, 0, 0);
        for s in [
            "1970-1-01T00:00:00",
            "1970-01-1T00:00:00",
            "1970-01-01T0:00:00",
            "1970-01-01T00:0:00",
            "1970-01-01T00:00:0",
        ] {
            assert_eq!(parse_timestamp(s).unwrap(), epoch, "{}", s);
        }
        assert_eq!(
            parse_timestamp("0001-01-01T00:00:00").unwrap(),
            datetime(1, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            parse_timestamp("2024-02-29 12:00:00").unwrap(),
            datetime(2024, 2, 29, 12, 0, 0)
        );
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        for s in [
            "",
            " 1970-01-01T00:00:00",
            "1970-01-01T00:00:00 ",
            "0000-01-01T00:00:00",
            "1970-00-01T00:00:00",
            "1970-13-01T00:00:00",
            "1970-02-00T00:00:00",
            "1970-02-29T00:00:00",
            "1970-01-01T24:00:00",
            "1970-01-01T00:60:00",
            "1970-01-01T00:00:60",
            "999-01-01T00:00:00",
            "70-01-01T00:00:00",
            "1970-01-01",
            "1970-01-01T00:00",
            "1970-01-01T+0:00:00",
        ] {
            let err = parse_timestamp(s).unwrap_err();
            assert_eq!(err, DomainError::parse("timestamp", s));
        }
    }

    #[test]
    fn test_parse_duration() {
        let cases = [
            ("00:00:00", 0),
            ("00:01:00", 60),
            ("01:00:00", 3600),
            ("23:59:59", 86399),
            ("00:00", 0),
            ("59:59", 3599),
            ("00", 0),
            ("59", 59),
            ("0", 0),
            ("0:0:0", 0),
            ("1:1", 61),
            ("1:1:1", 3661),
            ("99", 99),
            ("999:99:99", 999 * 3600 + 99 * 60 + 99),
            ("-01", -1),
            ("-01:01", -61),
            ("-01:01:01", -3661),
        ];
        for (s, seconds) in cases {
            assert_eq!(
                parse_duration(s).unwrap(),
                TimeDelta::try_seconds(seconds).unwrap(),
                "{}",
                s
            );
        }
    }

    #[test]
    fn test_parse_duration_invalid() {
        for s in [
            "", ":00", ":00:00", "0.5", "0.5:00", "0.5:00:00", "0:-1", "0:-1:0", "0:0:0:0", "--1",
            "-", "+1", " 1", "1 ", "1e3",
        ] {
            assert!(parse_duration(s).is_err(), "{:?} should be rejected", s);
        }
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("99999999999999999999").is_err());
        assert!(parse_duration("9223372036854775807:0:0").is_err());
    }

    #[test]
    fn test_format_duration_for_path() {
        let cases = [
            (0, "0h00m00s"),
            (1, "0h00m01s"),
            (59, "0h00m59s"),
            (60, "0h01m00s"),
            (3600, "1h00m00s"),
            (99 * 3600 + 59 * 60 + 59, "99h59m59s"),
            (2 * 60 + 123, "0h04m03s"),
            (-86400, "0h00m00s"),
            (-1, "0h00m00s"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(
                format_duration_for_path(TimeDelta::try_seconds(seconds).unwrap()),
                expected
            );
        }
    }

    #[test]
    fn test_format_duration_for_display() {
        let cases = [
            (0, "0"),
            (5, "5"),
            (-5, "-5"),
            (65, "1:05"),
            (-65, "-1:05"),
            (3600, "1:00:00"),
            (-3661, "-1:01:01"),
            (100 * 3600, "100:00:00"),
        ];
        for (seconds, expected) in cases {
            assert_eq!(
                format_duration_for_display(TimeDelta::try_seconds(seconds).unwrap()),
                expected
            );
        }
    }

    #[test]
    fn test_display_output_round_trips() {
        for s in ["0", "99", "-99", "99:99:99", "-1:0:0", "0:0:7", "-0"] {
            let parsed = parse_duration(s).unwrap();
            let shown = format_duration_for_display(parsed);
            assert_eq!(parse_duration(&shown).unwrap(), parsed, "{} -> {}", s, shown);
        }
    }

    #[test]
    fn test_duration_to_seconds() {
        assert_eq!(duration_to_seconds(TimeDelta::try_seconds(90).unwrap()), 90.0);
        assert_eq!(duration_to_seconds(TimeDelta::try_milliseconds(1500).unwrap()), 1.5);
    }
}
