use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

pub const MONTHS_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

// Month-first before day-first; day-first only matches once the first number
// exceeds 12. Two-digit years come before `%Y`, which would read "24" as year 24,
// and `%Y/%m/%d` comes after the slashed forms for the same reason.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d-%m-%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    // Jira export form: 05/Jan/25 10:00 AM
    "%d/%b/%y %I:%M %p",
    "%d/%b/%Y %I:%M %p",
];

/// Parse a date cell, returning `None` for blanks and anything unrecognized.
///
/// Ambiguous numeric dates are read month-first (`05/01/2025` is 1 May); a first
/// number above 12 can only be a day, so `13/01/2025` is 13 January.
pub fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Jira date-only form: 05/Jan/25
    NaiveDate::parse_from_str(s, "%d/%b/%y").ok()
}

pub fn fixed_offset(offset_hours: i32) -> Result<FixedOffset> {
    match offset_hours.checked_mul(3600).and_then(FixedOffset::east_opt) {
        Some(offset) => Ok(offset),
        None => bail!("UTC offset {offset_hours} is out of range, expected -23..=23 hours"),
    }
}

/// Calendar date of `now` at a fixed UTC offset (hours, e.g. -3 for Brasília).
pub fn date_at_offset(now: DateTime<Utc>, offset_hours: i32) -> Result<NaiveDate> {
    Ok(now.with_timezone(&fixed_offset(offset_hours)?).date_naive())
}

pub fn today_at_offset(offset_hours: i32) -> Result<NaiveDate> {
    date_at_offset(Utc::now(), offset_hours)
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS_PT.get(i as usize))
        .copied()
        .unwrap_or("")
}

pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_lenient("2025-01-05"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_lenient(" 2025-01-05 "), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_lenient("2025/01/05"), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn parses_datetimes_to_their_date() {
        assert_eq!(parse_lenient("2025-01-05 14:30:00"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_lenient("2025-01-05T23:59:00-03:00"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_lenient("05/01/2025 08:00"), Some(ymd(2025, 5, 1)));
        assert_eq!(parse_lenient("25/01/2025 08:00"), Some(ymd(2025, 1, 25)));
    }

    #[test]
    fn ambiguous_slashed_dates_are_month_first() {
        assert_eq!(parse_lenient("05/01/2025"), Some(ymd(2025, 5, 1)));
        assert_eq!(parse_lenient("12/31/24"), Some(ymd(2024, 12, 31)));
        assert_eq!(parse_lenient("05-01-2025"), Some(ymd(2025, 5, 1)));
    }

    #[test]
    fn day_first_when_first_number_exceeds_twelve() {
        assert_eq!(parse_lenient("13/01/2025"), Some(ymd(2025, 1, 13)));
        assert_eq!(parse_lenient("31/12/24"), Some(ymd(2024, 12, 31)));
        assert_eq!(parse_lenient("31-12-2024"), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn parses_jira_export_form() {
        assert_eq!(parse_lenient("05/Jan/25 10:00 AM"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_lenient("05/Jan/25"), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn garbage_becomes_none() {
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("   "), None);
        assert_eq!(parse_lenient("amanhã"), None);
        assert_eq!(parse_lenient("2025-13-40"), None);
    }

    #[test]
    fn date_at_offset_shifts_across_midnight() {
        let now = DateTime::parse_from_rfc3339("2025-01-01T02:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(date_at_offset(now, -3).unwrap(), ymd(2024, 12, 31));
        assert_eq!(date_at_offset(now, 0).unwrap(), ymd(2025, 1, 1));
        assert_eq!(date_at_offset(now, 9).unwrap(), ymd(2025, 1, 1));
    }

    #[test]
    fn today_matches_brasilia_clock() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let before = Utc::now().with_timezone(&brasilia).date_naive();
        let today = today_at_offset(-3).unwrap();
        let after = Utc::now().with_timezone(&brasilia).date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let err = today_at_offset(24).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(today_at_offset(-24).is_err());
        assert!(today_at_offset(i32::MAX).is_err());
        assert!(today_at_offset(23).is_ok());
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "Janeiro");
        assert_eq!(month_name(12), "Dezembro");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn br_format() {
        assert_eq!(format_br(ymd(2024, 1, 2)), "02/01/2024");
    }
}
