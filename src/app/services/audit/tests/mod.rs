//! Shared fixtures for audit tests

use crate::app::models::ResourceRecord;

pub use crate::app::services::resource_registry::tests::{
    create_test_record, days_ago, test_now,
};


/// A small table covering every freshness bucket and license state
pub fn create_sample_records() -> Vec<ResourceRecord> {
    let mut removed = create_test_record(
        "r5",
        "Gone Tool",
        "Tooling",
        "General",
        "Unknown",
        "MIT",
        "FALSE",
        &days_ago(400),
        &days_ago(20),
    );
    removed.insert("Removed From Origin", "TRUE");

    vec![
        create_test_record(
            "r1",
            "Agent Toolkit",
            "Agent Skills",
            "General",
            "alice",
            "MIT",
            "TRUE",
            &days_ago(2),
            &days_ago(1),
        ),
        create_test_record(
            "r2",
            "Editor Bridge",
            "Tooling",
            "IDE Integrations",
            "bob",
            "NOT_FOUND",
            "FALSE",
            &days_ago(90),
            "",
        ),
        create_test_record(
            "r3",
            "Skill Pack",
            "Agent Skills",
            "General",
            "alice",
            "",
            "TRUE",
            &days_ago(31),
            &days_ago(45),
        ),
        create_test_record(
            "r4",
            "Hook Set",
            "Hooks",
            "Pre-Commit",
            "carol",
            "Apache-2.0",
            "true",
            "not-a-date",
            "2025/08/01",
        ),
        removed,
    ]
}
