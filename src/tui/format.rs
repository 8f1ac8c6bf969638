//! Timestamp formatting for list cards and the detail header.

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

/// Parse an ISO 8601 timestamp. The backend serializes naive datetimes
/// (no offset); those are taken as UTC.
pub fn parse_timestamp(iso: &str) -> Option<Timestamp> {
    if let Ok(ts) = iso.parse::<Timestamp>() {
        return Some(ts);
    }
    iso.parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

/// Relative age for list cards ("3d ago"). Falls back to the raw string
/// when the timestamp does not parse.
pub fn relative_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(ts) => relative_from(ts, Timestamp::now()),
        None => iso.to_string(),
    }
}

pub fn relative_from(ts: Timestamp, now: Timestamp) -> String {
    let seconds = now.as_second().saturating_sub(ts.as_second());
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Absolute form for the detail header ("2025-06-01 09:30 UTC").
pub fn absolute_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(ts) => ts.strftime("%Y-%m-%d %H:%M UTC").to_string(),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_backend_timestamp() {
        let ts = parse_timestamp("2025-06-01T09:30:00").unwrap();
        assert_eq!(ts.strftime("%Y-%m-%d %H:%M").to_string(), "2025-06-01 09:30");
    }

    #[test]
    fn test_parse_offset_timestamp() {
        assert!(parse_timestamp("2025-06-01T09:30:00Z").is_some());
    }

    #[test]
    fn test_relative_buckets() {
        let now: Timestamp = "2025-06-10T12:00:00Z".parse().unwrap();

        let cases = [
            ("2025-06-10T11:59:30Z", "just now"),
            ("2025-06-10T11:15:00Z", "45m ago"),
            ("2025-06-10T07:00:00Z", "5h ago"),
            ("2025-06-07T12:00:00Z", "3d ago"),
        ];
        for (iso, expected) in cases {
            let ts = parse_timestamp(iso).unwrap();
            assert_eq!(relative_from(ts, now), expected);
        }
    }

    #[test]
    fn test_unparseable_timestamp_falls_back_to_raw() {
        assert_eq!(relative_date("yesterday-ish"), "yesterday-ish");
        assert_eq!(absolute_date("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn test_absolute_format() {
        assert_eq!(absolute_date("2025-06-01T09:30:00"), "2025-06-01 09:30 UTC");
    }
}
