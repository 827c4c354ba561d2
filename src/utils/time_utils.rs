use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// RFC 3339, UTC, millisecond precision, `Z` suffix. Journal timestamp format.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's local date as yyyy-mm-dd, for a worksheet that has no date yet.
pub fn today_local() -> String {
    Local::now()
        .format(TimeUtils::STANDARD_TIME_FORMAT)
        .to_string()
}

/// Worksheet date in the standard format, normalised (`2024-1-5` -> `2024-01-05`).
pub fn parse_sheet_date(text: &str) -> Option<String> {
    NaiveDate::parse_from_str(text.trim(), TimeUtils::STANDARD_TIME_FORMAT)
        .ok()
        .map(|d| d.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 11, 5, 8, 0, 9).unwrap();
        assert_eq!(iso_timestamp(at), "2024-11-05T08:00:09.000Z");
    }

    #[test]
    fn test_parse_sheet_date() {
        assert_eq!(parse_sheet_date("2024-11-05").as_deref(), Some("2024-11-05"));
        assert_eq!(parse_sheet_date(" 2024-1-5 ").as_deref(), Some("2024-01-05"));
        assert!(parse_sheet_date("5 Nov, 2024").is_none());
        assert!(parse_sheet_date("2024-02-30").is_none());
        assert!(parse_sheet_date("").is_none());
    }

    #[test]
    fn test_today_shape() {
        let today = today_local();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
    }
}
