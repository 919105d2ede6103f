//! Scoped audits: detailed listings of the records selected by filter criteria

use crate::app::models::ResourceRecord;
use crate::app::services::resource_registry::FilterCriteria;
use crate::app::services::resource_registry::parser::whole_days_between;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

/// Result of a scoped audit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopedAudit {
    /// Criteria the audit was run with
    pub filter_criteria: FilterCriteria,
    pub matched_count: usize,
    /// Matched records in table order
    pub resources: Vec<ResourceDetail>,
}

/// Per-resource detail shown in a scoped audit
///
/// Text fields carry the raw table values; absent columns become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub active: String,
    pub license: String,
    pub author: String,
    pub primary_link: String,
    pub last_checked: String,
    /// Whole days since the last check, `None` when never checked
    pub days_since_check: Option<i64>,
    pub removed_from_origin: String,
}

impl ResourceDetail {
    /// Build the detail view of a record relative to `now`
    pub fn from_record(record: &ResourceRecord, now: NaiveDateTime) -> Self {
        use crate::constants::columns;

        Self {
            id: record.id().to_string(),
            name: record.display_name().to_string(),
            category: record.category().to_string(),
            sub_category: record.sub_category().to_string(),
            active: record.get_or_empty(columns::ACTIVE).to_string(),
            license: record.license().to_string(),
            author: record.author().to_string(),
            primary_link: record.primary_link().to_string(),
            last_checked: record.get_or_empty(columns::LAST_CHECKED).to_string(),
            days_since_check: record
                .last_checked()
                .map(|checked| whole_days_between(checked, now)),
            removed_from_origin: record.get_or_empty(columns::REMOVED_FROM_ORIGIN).to_string(),
        }
    }

    /// Whether the raw `Active` value is set (case-insensitive `TRUE`)
    pub fn is_active(&self) -> bool {
        self.active.to_uppercase() == crate::constants::FLAG_TRUE
    }

    /// Whether the raw `Removed From Origin` value is set (case-insensitive `TRUE`)
    pub fn is_removed_from_origin(&self) -> bool {
        self.removed_from_origin.to_uppercase() == crate::constants::FLAG_TRUE
    }
}

/// Run a scoped audit over `records`
pub fn scoped_audit(
    records: &[ResourceRecord],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> ScopedAudit {
    let matched = criteria.apply(records, now);

    let resources: Vec<ResourceDetail> = matched
        .iter()
        .map(|record| ResourceDetail::from_record(record, now))
        .collect();

    debug!("Scoped audit matched {} resources", resources.len());

    ScopedAudit {
        filter_criteria: criteria.clone(),
        matched_count: resources.len(),
        resources,
    }
}
