use crate::error::{Error, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use std::fmt::Display;

/// What people see: `2025-01-01 05:30:00 PM`, local time.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Wall clock at second precision, the resolution everything is stored at.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// ===============================
/// Stored form (RFC 3339, UTC)
/// ===============================
pub fn to_stored(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Canonical RFC 3339 first. Rows written by an earlier version of the
/// system hold the display form in local time, so that is accepted too.
pub fn parse_stored(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    parse_display(value)
}

/// ===============================
/// Display form (12-hour clock)
/// ===============================
pub fn to_display(ts: DateTime<Utc>) -> String {
    to_display_in(ts, &Local)
}

pub fn to_display_in<Tz>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

pub fn parse_display(value: &str) -> Result<DateTime<Utc>> {
    parse_display_in(value, &Local)
}

/// Strict inverse of [`to_display_in`]. The text must be exactly what
/// formatting the parsed value would print; a two-digit year or a 24-hour
/// clock is rejected instead of being read as something else.
pub fn parse_display_in<Tz>(value: &str, tz: &Tz) -> Result<DateTime<Utc>>
where
    Tz: TimeZone,
{
    let naive = NaiveDateTime::parse_from_str(value, DISPLAY_FORMAT)
        .map_err(|e| malformed(value, e.to_string()))?;

    if naive.format(DISPLAY_FORMAT).to_string() != value {
        return Err(malformed(value, format!("expected pattern {DISPLAY_FORMAT}")));
    }

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(ts) => Ok(ts.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, _) => Err(malformed(value, "ambiguous local time".into())),
        LocalResult::None => Err(malformed(value, "local time does not exist".into())),
    }
}

/// Hours between two instants, rounded to two decimals.
pub fn duration_hours(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> f64 {
    let secs = (check_out - check_in).num_seconds() as f64;
    (secs / 3600.0 * 100.0).round() / 100.0
}

fn malformed(value: &str, reason: String) -> Error {
    Error::Timestamp {
        value: value.to_string(),
        reason,
    }
}
