//! Tests for the filter chain and registry queries

use super::*;
use crate::app::services::resource_registry::{FilterCriteria, ResourceRegistry};

fn create_test_registry() -> ResourceRegistry {
    registry_of(vec![
        create_test_record(
            "r1",
            "Agent Toolkit",
            "Agent Skills",
            "General",
            "Alice",
            "MIT",
            "TRUE",
            &days_ago(3),
            &days_ago(1),
        ),
        create_test_record(
            "r2",
            "Old Tool",
            "Tooling",
            "IDE Integrations",
            "bob",
            "NOT_FOUND",
            "FALSE",
            &days_ago(200),
            "",
        ),
        create_test_record(
            "r3",
            "Skill Pack",
            "agent skills",
            "general",
            "ALICE",
            "",
            "false",
            &days_ago(10),
            &days_ago(45),
        ),
        create_test_record(
            "r4",
            "Hook Set",
            "Hooks",
            "General",
            "carol",
            "Apache-2.0",
            "TRUE",
            "garbage",
            "2025-13-45:99-99-99",
        ),
    ])
}

fn ids<'a>(records: &[&'a crate::ResourceRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id()).collect()
}

#[test]
fn test_no_filters_returns_everything_in_order() {
    let registry = create_test_registry();
    let criteria = FilterCriteria::new();

    assert!(criteria.is_empty());
    let matched = registry.find_by_criteria(&criteria, test_now());
    assert_eq!(ids(&matched), vec!["r1", "r2", "r3", "r4"]);
}

#[test]
fn test_category_filter_is_case_insensitive() {
    let registry = create_test_registry();
    let criteria = FilterCriteria::new().with_category("AGENT SKILLS");

    let matched = registry.find_by_criteria(&criteria, test_now());
    assert_eq!(ids(&matched), vec!["r1", "r3"]);
    for record in matched {
        assert_eq!(record.category().to_lowercase(), "agent skills");
    }
}

#[test]
fn test_equality_not_substring() {
    let registry = create_test_registry();
    let criteria = FilterCriteria::new().with_category("Agent");

    assert!(registry.find_by_criteria(&criteria, test_now()).is_empty());
}

#[test]
fn test_sub_category_author_and_license_filters() {
    let registry = create_test_registry();
    let now = test_now();

    let by_sub = FilterCriteria::new().with_sub_category("GENERAL");
    assert_eq!(ids(&registry.find_by_criteria(&by_sub, now)), vec!["r1", "r3", "r4"]);

    let by_author = FilterCriteria::new().with_author("alice");
    assert_eq!(ids(&registry.find_by_criteria(&by_author, now)), vec!["r1", "r3"]);

    let by_license = FilterCriteria::new().with_license("apache-2.0");
    assert_eq!(ids(&registry.find_by_criteria(&by_license, now)), vec!["r4"]);
}

#[test]
fn test_inactive_and_no_license_filters() {
    let registry = create_test_registry();
    let now = test_now();

    let inactive = FilterCriteria::new().inactive_only();
    assert_eq!(ids(&registry.find_by_criteria(&inactive, now)), vec!["r2", "r3"]);

    let unlicensed = FilterCriteria::new().no_license_only();
    assert_eq!(ids(&registry.find_by_criteria(&unlicensed, now)), vec!["r2", "r3"]);
}

#[test]
fn test_recent_days_filter_skips_unparseable_dates() {
    let registry = create_test_registry();
    let now = test_now();

    let recent = FilterCriteria::new().with_recent_days(30);
    assert_eq!(ids(&registry.find_by_criteria(&recent, now)), vec!["r1", "r3"]);

    let tight = FilterCriteria::new().with_recent_days(5);
    assert_eq!(ids(&registry.find_by_criteria(&tight, now)), vec!["r1"]);

    let zero = FilterCriteria::new().with_recent_days(0);
    assert!(!zero.is_empty());
    assert!(registry.find_by_criteria(&zero, now).is_empty());
}

#[test]
fn test_recent_days_boundary_is_inclusive() {
    let registry = registry_of(vec![create_test_record(
        "edge", "Edge", "Tooling", "General", "dan", "MIT", "TRUE", &days_ago(30), "",
    )]);

    let criteria = FilterCriteria::new().with_recent_days(30);
    assert_eq!(registry.find_by_criteria(&criteria, test_now()).len(), 1);
}

#[test]
fn test_filters_are_anded() {
    let registry = create_test_registry();
    let criteria = FilterCriteria::new()
        .with_category("agent skills")
        .inactive_only()
        .no_license_only();

    let matched = registry.find_by_criteria(&criteria, test_now());
    assert_eq!(ids(&matched), vec!["r3"]);
}

#[test]
fn test_empty_strings_are_not_filters() {
    let criteria = FilterCriteria::new().with_category("").with_author("");
    assert!(criteria.is_empty());

    let raw = FilterCriteria {
        license: Some(String::new()),
        ..FilterCriteria::default()
    };
    assert!(raw.is_empty());
    assert_eq!(raw.normalized().license, None);
}

#[test]
fn test_active_filters_labels() {
    let criteria = FilterCriteria::new()
        .with_sub_category("General")
        .inactive_only()
        .with_recent_days(14);

    assert_eq!(
        criteria.active_filters(),
        vec![
            ("Sub Category", "General".to_string()),
            ("Inactive Only", "True".to_string()),
            ("Recent Days", "14".to_string()),
        ]
    );
}

#[test]
fn test_absent_field_compares_as_empty() {
    let registry = registry_of(vec![crate::ResourceRecord::from_pairs([("ID", "bare")])]);

    let criteria = FilterCriteria::new().with_category("Tooling");
    assert!(registry.find_by_criteria(&criteria, test_now()).is_empty());

    let unlicensed = FilterCriteria::new().no_license_only().inactive_only();
    assert_eq!(registry.find_by_criteria(&unlicensed, test_now()).len(), 1);
}

#[test]
fn test_recent_days_beyond_calendar_range_keeps_dated_records() {
    let registry = registry_of(vec![
        create_test_record(
            "old", "Old", "Tooling", "General", "dan", "MIT", "TRUE", "2025-01-01:00-00-00", "",
        ),
        create_test_record("undated", "Undated", "Tooling", "General", "dan", "MIT", "TRUE", "", ""),
    ]);

    let criteria = FilterCriteria::new().with_recent_days(u32::MAX);
    let matched = registry.find_by_criteria(&criteria, test_now());
    assert_eq!(ids(&matched), vec!["old"]);
}
