//! Repository-wide statistics over the resource table
//!
//! This module provides the aggregate view of a high-level audit: totals,
//! categorical frequency tables, license coverage and freshness windows.

use crate::app::models::ResourceRecord;
use crate::app::services::resource_registry::parser::whole_days_between;
use crate::config::FreshnessWindows;
use crate::constants::{UNKNOWN_VALUE, columns};
use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Value counts ranked by frequency
///
/// Entries are ordered by count, highest first; equal counts keep the order
/// in which the values were first seen. Serializes as a map in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Count values and rank them
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for value in values {
            match positions.get(value) {
                Some(&index) => entries[index].1 += 1,
                None => {
                    positions.insert(value, entries.len());
                    entries.push((value.to_string(), 1));
                }
            }
        }

        // Stable sort keeps first-seen order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Ranked `(value, count)` pairs
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Count for a value, zero when unseen
    pub fn count(&self, value: &str) -> usize {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` highest-ranked entries
    pub fn top(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    /// Iterate over ranked entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(value, count)| (value.as_str(), *count))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

/// Statistics for a high-level audit
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegistrySummary {
    pub total_resources: usize,
    pub active: usize,
    pub inactive: usize,
    pub categories: FrequencyTable,
    pub sub_categories: FrequencyTable,
    pub licenses: FrequencyTable,
    pub no_license: usize,
    pub unique_authors: usize,
    pub top_authors: FrequencyTable,
    pub recently_added: usize,
    pub recently_checked: usize,
    pub never_checked: usize,
    pub outdated_checks: usize,
    pub removed_from_origin: usize,
    /// Thresholds the freshness counts were computed with
    #[serde(skip)]
    pub windows: FreshnessWindows,
}

impl RegistrySummary {
    /// Percentage of resources that are active, zero for an empty table
    pub fn active_percentage(&self) -> f64 {
        percentage(self.active, self.total_resources)
    }

    /// Percentage of resources that are inactive, zero for an empty table
    pub fn inactive_percentage(&self) -> f64 {
        percentage(self.inactive, self.total_resources)
    }
}

/// Freshness classification of a single record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Freshness {
    /// `Date Added` falls inside the recently-added window
    pub recently_added: bool,
    pub last_check: CheckState,
}

/// Where a record's `Last Checked` timestamp falls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    /// Missing or unparseable timestamp
    #[default]
    Never,
    Recent,
    /// Between the recent and outdated windows
    Aging,
    Outdated,
}

impl Freshness {
    /// Classify a record relative to `now`
    pub fn classify(record: &ResourceRecord, now: NaiveDateTime, windows: &FreshnessWindows) -> Self {
        let recently_added = record
            .date_added()
            .is_some_and(|added| whole_days_between(added, now) <= windows.recently_added_days);

        let last_check = match record.last_checked() {
            None => CheckState::Never,
            Some(checked) => {
                let age = whole_days_between(checked, now);
                if age <= windows.recently_checked_days {
                    CheckState::Recent
                } else if age > windows.outdated_after_days {
                    CheckState::Outdated
                } else {
                    CheckState::Aging
                }
            }
        };

        Self {
            recently_added,
            last_check,
        }
    }
}

/// Compute repository-wide statistics
///
/// # Arguments
/// * `records` - All records of the table
/// * `now` - Report time used for every freshness classification
/// * `windows` - Freshness window thresholds
/// * `top_authors` - Size of the top-authors table
pub fn summarize(
    records: &[ResourceRecord],
    now: NaiveDateTime,
    windows: &FreshnessWindows,
    top_authors: usize,
) -> RegistrySummary {
    let total_resources = records.len();
    let active = records.iter().filter(|r| r.is_active()).count();

    let categories =
        FrequencyTable::from_values(records.iter().map(|r| r.bucket_value(columns::CATEGORY)));
    let sub_categories =
        FrequencyTable::from_values(records.iter().map(|r| r.bucket_value(columns::SUB_CATEGORY)));
    let licenses =
        FrequencyTable::from_values(records.iter().map(|r| r.bucket_value(columns::LICENSE)));
    let authors =
        FrequencyTable::from_values(records.iter().map(|r| r.bucket_value(columns::AUTHOR_NAME)));

    let no_license = records.iter().filter(|r| r.has_no_license()).count();
    let unique_authors = authors.iter().filter(|(author, _)| *author != UNKNOWN_VALUE).count();

    let mut recently_added = 0;
    let mut recently_checked = 0;
    let mut never_checked = 0;
    let mut outdated_checks = 0;

    for record in records {
        let freshness = Freshness::classify(record, now, windows);
        if freshness.recently_added {
            recently_added += 1;
        }
        match freshness.last_check {
            CheckState::Never => never_checked += 1,
            CheckState::Recent => recently_checked += 1,
            CheckState::Outdated => outdated_checks += 1,
            CheckState::Aging => {}
        }
    }

    let removed_from_origin = records.iter().filter(|r| r.is_removed_from_origin()).count();

    debug!(
        "Summarized {} records: {} active, {} categories, {} licenses, {} authors",
        total_resources,
        active,
        categories.len(),
        licenses.len(),
        authors.len()
    );

    RegistrySummary {
        total_resources,
        active,
        inactive: total_resources - active,
        categories,
        sub_categories,
        licenses,
        no_license,
        unique_authors,
        top_authors: authors.top(top_authors),
        recently_added,
        recently_checked,
        never_checked,
        outdated_checks,
        removed_from_origin,
        windows: *windows,
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
