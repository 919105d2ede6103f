//! Shared test utilities and fixtures for resource registry tests

use crate::app::models::ResourceRecord;
use crate::app::services::resource_registry::ResourceRegistry;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

pub mod parser_tests;
pub mod query_tests;

/// Header row of the resource table
pub const TEST_HEADER: &str = "ID,Display Name,Category,Sub-Category,Primary Link,Secondary Link,Author Name,Author Link,Active,Date Added,Last Modified,Last Checked,License,Description,Removed From Origin";

/// Fixed report time used across tests
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Format a timestamp `days` days before [`test_now`] in table format
pub fn days_ago(days: i64) -> String {
    (test_now() - chrono::TimeDelta::days(days))
        .format("%Y-%m-%d:%H-%M-%S")
        .to_string()
}

/// Create a test record with the commonly filtered columns
#[allow(clippy::too_many_arguments)]
pub fn create_test_record(
    id: &str,
    name: &str,
    category: &str,
    sub_category: &str,
    author: &str,
    license: &str,
    active: &str,
    date_added: &str,
    last_checked: &str,
) -> ResourceRecord {
    ResourceRecord::from_pairs([
        ("ID", id),
        ("Display Name", name),
        ("Category", category),
        ("Sub-Category", sub_category),
        ("Primary Link", "https://github.com/example/resource"),
        ("Author Name", author),
        ("Active", active),
        ("Date Added", date_added),
        ("Last Checked", last_checked),
        ("License", license),
        ("Removed From Origin", "FALSE"),
    ])
}

/// Build an in-memory registry over the given records
pub fn registry_of(records: Vec<ResourceRecord>) -> ResourceRegistry {
    let fieldnames = TEST_HEADER.split(',').map(str::to_string).collect();
    ResourceRegistry::from_records(PathBuf::from("/test/resources.csv"), fieldnames, records)
}

/// Write a resource table with the standard header and the given data lines
pub fn create_test_csv_file(dir: &Path, filename: &str, rows: &[&str]) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);
    let mut content = String::from(TEST_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}
