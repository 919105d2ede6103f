//! Timestamp parsing and day arithmetic for resource records
//!
//! The resource table stores `Date Added` and `Last Checked` as
//! `YYYY-MM-DD:HH-MM-SS` in local time. Bad values are common (hand edits,
//! never-run link checks) and are treated as absent rather than as errors.

use crate::constants::TIMESTAMP_FORMAT;
use chrono::{NaiveDateTime, TimeDelta};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a resource table timestamp
///
/// Returns `None` for empty, whitespace-only or malformed input; this never
/// fails.
///
/// # Examples
/// ```
/// # use resource_audit::app::services::resource_registry::parser::parse_timestamp;
/// assert!(parse_timestamp("2025-08-01:09-15-00").is_some());
/// assert!(parse_timestamp("2025-08-01 09:15:00").is_none());
/// assert!(parse_timestamp("   ").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if text.trim().is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

/// Whole days elapsed from `earlier` to `later`, rounded towards negative infinity
///
/// A timestamp one hour in the future is therefore `-1` days old, and one
/// 23h59m in the past is `0` days old.
pub fn whole_days_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    floor_days(later - earlier)
}

/// The instant `days` whole days before `now`
///
/// Returns `None` when that instant lies before the earliest representable
/// date; every parseable timestamp is then inside the window.
pub fn days_before(now: NaiveDateTime, days: u32) -> Option<NaiveDateTime> {
    now.checked_sub_signed(TimeDelta::days(i64::from(days)))
}

fn floor_days(delta: TimeDelta) -> i64 {
    let mut seconds = delta.num_seconds();
    if delta.subsec_nanos() < 0 {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}
