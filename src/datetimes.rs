//! Conversions between datetime strings, epoch seconds and `NaiveDateTime`.
//!
//! Structured values are local wall-clock times. Every function treats an
//! absent input as an absent output.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use filetime::FileTime;
use std::fmt::Write;

/// Default pattern, rendering `YYYY-MM-DD HH:MM:SS.ffffff`.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.6f";

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Parses a datetime string. A string that does not match `pattern` yields `None`.
pub fn parse(text: Option<&str>, pattern: &str) -> Option<NaiveDateTime> {
    let text = text?;
    NaiveDateTime::parse_from_str(text, pattern).ok()
}

/// Formats a datetime with `pattern`.
///
/// Returns `None` for an absent datetime or a pattern chrono cannot render.
pub fn format(dt: Option<NaiveDateTime>, pattern: &str) -> Option<String> {
    let dt = dt?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

/// Converts epoch seconds to a local datetime.
pub fn from_epoch(seconds: Option<f64>) -> Option<NaiveDateTime> {
    let seconds = seconds?;
    if !seconds.is_finite() {
        return None;
    }
    let mut whole = seconds.floor() as i64;
    let mut nanos = ((seconds - seconds.floor()) * NANOS_PER_SEC).round() as u32;
    if nanos >= 1_000_000_000 {
        whole += 1;
        nanos = 0;
    }
    Local
        .timestamp_opt(whole, nanos)
        .single()
        .map(|dt| dt.naive_local())
}

/// Converts a local datetime to epoch seconds.
///
/// Ambiguous local times resolve to the earlier instant; times skipped by a
/// DST transition yield `None`.
pub fn to_epoch(dt: Option<NaiveDateTime>) -> Option<f64> {
    let local = resolve_local(&dt?)?;
    Some(local.timestamp() as f64 + f64::from(local.timestamp_subsec_nanos()) / NANOS_PER_SEC)
}

/// Converts a filesystem timestamp to a local datetime without precision loss.
pub fn from_file_time(time: FileTime) -> Option<NaiveDateTime> {
    Local
        .timestamp_opt(time.unix_seconds(), time.nanoseconds())
        .single()
        .map(|dt| dt.naive_local())
}

/// Converts a local datetime to a filesystem timestamp without precision loss.
pub fn to_file_time(dt: &NaiveDateTime) -> Option<FileTime> {
    let local = resolve_local(dt)?;
    Some(FileTime::from_unix_time(
        local.timestamp(),
        local.timestamp_subsec_nanos(),
    ))
}

fn resolve_local(dt: &NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(dt).earliest()
}
