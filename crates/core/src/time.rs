//! Timestamp parsing for backend date strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00.000Z`), a naive datetime
/// (`2024-03-01T10:00:00`, `2024-03-01 10:00:00`) or a plain date
/// (`2024-03-01`, interpreted as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD` label for a timestamp string; `None` if unparseable.
pub fn date_label(value: &str) -> Option<String> {
    parse_timestamp(value).map(|dt| dt.format("%Y-%m-%d").to_string())
}
