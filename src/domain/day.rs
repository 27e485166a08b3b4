//! Calendar-day handling. Every date in the system is a UTC day.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

const ISO_DAY: &[time::format_description::BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DAY: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day] [year]");

/// The current UTC day.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Parses `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its UTC day.
///
/// # Errors
/// Returns a message naming the rejected input if neither form matches.
pub fn parse_day(raw: &str) -> Result<Date, String> {
    let raw = raw.trim();
    if let Ok(date) = Date::parse(raw, ISO_DAY) {
        return Ok(date);
    }
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(|ts| ts.to_offset(UtcOffset::UTC).date())
        .map_err(|_| format!("Invalid date: {raw}"))
}

/// Renders a day as e.g. `Mon Jan 01 2024`.
#[must_use]
pub fn format_day(date: Date) -> String {
    date.format(DISPLAY_DAY).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_iso_day() {
        assert_eq!(parse_day("2023-01-15").unwrap(), date!(2023 - 01 - 15));
        assert_eq!(parse_day(" 2024-02-29 ").unwrap(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_parse_timestamp_truncates_to_utc_day() {
        assert_eq!(parse_day("2023-01-15T23:30:00Z").unwrap(), date!(2023 - 01 - 15));
        // 01:00 at +02:00 is still the previous day in UTC
        assert_eq!(parse_day("2023-01-16T01:00:00+02:00").unwrap(), date!(2023 - 01 - 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_day("yesterday").unwrap_err(), "Invalid date: yesterday");
        assert!(parse_day("2023-02-30").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(date!(2024 - 01 - 01)), "Mon Jan 01 2024");
        assert_eq!(format_day(date!(2023 - 01 - 15)), "Sun Jan 15 2023");
    }
}
