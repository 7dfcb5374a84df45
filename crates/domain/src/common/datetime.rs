//! DateTime helpers for telemetry and journal timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Clock skew tolerated between a device timestamp and the engine clock.
pub const MAX_CLOCK_SKEW_SECS: i64 = 300;

/// Parses an RFC3339 timestamp string and normalizes it to UTC.
///
/// # Examples
///
/// ```
/// use questwalk_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Earliest timestamp accepted anywhere in the game (2000-01-01T00:00:00Z).
pub fn earliest_supported_date() -> DateTime<Utc> {
    Utc.timestamp_opt(946_684_800, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Whether `date` lies beyond `now` by more than the tolerated clock skew.
pub fn is_in_future(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date > now + Duration::seconds(MAX_CLOCK_SKEW_SECS)
}
