//! ISO-8601 timestamps in the shape the frontend and test suite expect.
//!
//! Output is always UTC with microsecond precision and a `Z` suffix,
//! e.g. `2024-09-01T17:04:12.123456Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats an instant as an ISO-8601 UTC string.
pub fn format_iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Returns the current time as an ISO-8601 UTC string.
pub fn now_iso8601() -> String {
    format_iso8601(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_micros_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 17, 4, 12).unwrap();
        assert_eq!(format_iso8601(at), "2024-09-01T17:04:12.000000Z");
    }

    #[test]
    fn now_parses_back_and_is_recent() {
        let stamp = now_iso8601();
        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();
        let age = Utc::now() - parsed.with_timezone(&Utc);
        assert!(age.num_seconds() < 5);
        assert!(stamp.ends_with('Z'));
    }
}
