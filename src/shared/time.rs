use chrono::{DateTime, SecondsFormat, Utc};

/// Renders epoch milliseconds as RFC 3339 in UTC, keeping millisecond precision.
///
/// Instants chrono cannot represent fall back to the raw millisecond count.
pub fn format_millis(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => ms.to_string(),
    }
}

