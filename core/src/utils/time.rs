use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Return time now in seconds or 0
pub(crate) fn time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0))
        .as_secs()
}

/// Calendar year associated with the current processing time
pub(crate) fn year_now() -> i32 {
    let now = DateTime::from_timestamp(time_now() as i64, 0);
    match now {
        Some(result) => result.year(),
        None => 1970,
    }
}

/// Convert Chromium visit times (microseconds since 1601-01-01 00:00:00 UTC)
/// to an ISO8601 string. Values outside the calendar range return None
pub(crate) fn webkit_micros_to_iso(webkit_micros: &i64) -> Option<String> {
    let webkit_epoch = NaiveDate::from_ymd_opt(1601, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let timestamp = webkit_epoch.checked_add_signed(TimeDelta::microseconds(*webkit_micros))?;
    Some(timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
}

/// Convert Gecko visit times (microseconds since 1970-01-01 00:00:00 UTC)
/// to an ISO8601 string. Values outside the calendar range return None
pub(crate) fn unixepoch_micros_to_iso(unix_micros: &i64) -> Option<String> {
    let timestamp = DateTime::from_timestamp_micros(*unix_micros)?;
    Some(
        timestamp
            .naive_utc()
            .format("%Y-%m-%dT%H:%M:%S%.f")
            .to_string(),
    )
}

/// Parse a normalized ISO8601 timestamp back to unixepoch seconds.
/// Unparseable input maps to 0 so those events group at the start of a timeline
pub(crate) fn iso_to_unixepoch(timestamp: &str) -> i64 {
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(result) => result.and_utc().timestamp(),
        Err(_err) => 0,
    }
}
