//! Tests for timestamp parsing and day arithmetic

use super::*;
use crate::app::services::resource_registry::parser::{
    days_before, parse_timestamp, whole_days_between,
};
use chrono::{Datelike, TimeDelta, Timelike};

#[test]
fn test_parse_valid_timestamp() {
    let parsed = parse_timestamp("2025-07-29:14-05-09").unwrap();
    assert_eq!(parsed.year(), 2025);
    assert_eq!(parsed.month(), 7);
    assert_eq!(parsed.day(), 29);
    assert_eq!(parsed.hour(), 14);
    assert_eq!(parsed.minute(), 5);
    assert_eq!(parsed.second(), 9);
}

#[test]
fn test_parse_empty_and_blank_is_absent() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("   "), None);
    assert_eq!(parse_timestamp("\t"), None);
}

#[test]
fn test_parse_malformed_is_absent() {
    let malformed = [
        "2025-07-29",
        "2025-07-29 14:05:09",
        "2025-07-29T14:05:09Z",
        "2025-13-01:00-00-00",
        "2025-02-30:00-00-00",
        "2025-07-29:25-00-00",
        "not a date",
        "NOT_FOUND",
    ];
    for text in malformed {
        assert_eq!(parse_timestamp(text), None, "expected None for {:?}", text);
    }
}

#[test]
fn test_whole_days_between_floors() {
    let now = test_now();

    assert_eq!(whole_days_between(now, now), 0);
    assert_eq!(whole_days_between(now - TimeDelta::days(7), now), 7);
    assert_eq!(
        whole_days_between(now - TimeDelta::days(8) + TimeDelta::seconds(1), now),
        7
    );
    assert_eq!(whole_days_between(now - TimeDelta::hours(23), now), 0);

    // Future timestamps are negative days old
    assert_eq!(whole_days_between(now + TimeDelta::hours(1), now), -1);
    assert_eq!(whole_days_between(now + TimeDelta::days(2), now), -2);
    assert_eq!(
        whole_days_between(now + TimeDelta::milliseconds(500), now),
        -1
    );
}

#[test]
fn test_days_before() {
    let now = test_now();
    assert_eq!(days_before(now, 0), Some(now));
    assert_eq!(days_before(now, 30), Some(now - TimeDelta::days(30)));
}

#[test]
fn test_days_before_out_of_range() {
    assert_eq!(days_before(test_now(), u32::MAX), None);
}

#[test]
fn test_days_ago_fixture_round_trips_through_parser() {
    let parsed = parse_timestamp(&days_ago(3)).unwrap();
    assert_eq!(whole_days_between(parsed, test_now()), 3);
}
