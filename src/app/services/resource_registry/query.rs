//! Record selection for scoped audits
//!
//! This module provides the filter chain used to restrict an audit to a subset
//! of the resource table. Every predicate is optional; the active ones are
//! AND-ed and the surviving records keep their table order.

use super::ResourceRegistry;
use super::parser::days_before;
use crate::app::models::ResourceRecord;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Criteria for a scoped audit
///
/// String predicates compare case-insensitively against the whole field
/// value; an absent field compares as the empty string. Empty predicate
/// strings are treated as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub inactive_only: bool,
    pub no_license_only: bool,
    /// Keep records added within this many days of now
    pub recent_days: Option<u32>,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = non_empty(sub_category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = non_empty(license.into());
        self
    }

    pub fn inactive_only(mut self) -> Self {
        self.inactive_only = true;
        self
    }

    pub fn no_license_only(mut self) -> Self {
        self.no_license_only = true;
        self
    }

    pub fn with_recent_days(mut self, days: u32) -> Self {
        self.recent_days = Some(days);
        self
    }

    /// Drop empty string predicates so they behave as not supplied
    pub fn normalized(self) -> Self {
        Self {
            category: self.category.and_then(non_empty),
            sub_category: self.sub_category.and_then(non_empty),
            author: self.author.and_then(non_empty),
            license: self.license.and_then(non_empty),
            ..self
        }
    }

    /// Whether no predicate is active, i.e. the run is a repository-wide audit
    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    /// Labels and values of the active predicates, in evaluation order
    pub fn active_filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            filters.push(("Category", category.to_string()));
        }
        if let Some(sub_category) = self.sub_category.as_deref().filter(|s| !s.is_empty()) {
            filters.push(("Sub Category", sub_category.to_string()));
        }
        if let Some(author) = self.author.as_deref().filter(|s| !s.is_empty()) {
            filters.push(("Author", author.to_string()));
        }
        if let Some(license) = self.license.as_deref().filter(|s| !s.is_empty()) {
            filters.push(("License", license.to_string()));
        }
        if self.inactive_only {
            filters.push(("Inactive Only", "True".to_string()));
        }
        if self.no_license_only {
            filters.push(("No License Only", "True".to_string()));
        }
        if let Some(days) = self.recent_days {
            filters.push(("Recent Days", days.to_string()));
        }
        filters
    }

    /// Whether a single record satisfies every active predicate
    pub fn matches(&self, record: &ResourceRecord, now: NaiveDateTime) -> bool {
        if !matches_text(self.category.as_deref(), record.category()) {
            return false;
        }
        if !matches_text(self.sub_category.as_deref(), record.sub_category()) {
            return false;
        }
        if !matches_text(self.author.as_deref(), record.author()) {
            return false;
        }
        if !matches_text(self.license.as_deref(), record.license()) {
            return false;
        }
        if self.inactive_only && record.is_active() {
            return false;
        }
        if self.no_license_only && !record.has_no_license() {
            return false;
        }
        if let Some(days) = self.recent_days {
            let Some(added) = record.date_added() else {
                return false;
            };
            if days_before(now, days).is_some_and(|cutoff| added < cutoff) {
                return false;
            }
        }
        true
    }

    /// Select the matching records, preserving input order
    pub fn apply<'a>(
        &self,
        records: &'a [ResourceRecord],
        now: NaiveDateTime,
    ) -> Vec<&'a ResourceRecord> {
        let selected: Vec<&ResourceRecord> = records
            .iter()
            .filter(|record| self.matches(record, now))
            .collect();

        debug!(
            "Filter criteria {:?} selected {} of {} records",
            self,
            selected.len(),
            records.len()
        );

        selected
    }
}

impl ResourceRegistry {
    /// Find records matching the given criteria, in table order
    pub fn find_by_criteria(
        &self,
        criteria: &FilterCriteria,
        now: NaiveDateTime,
    ) -> Vec<&ResourceRecord> {
        criteria.apply(&self.records, now)
    }
}

fn matches_text(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => actual.to_lowercase() == wanted.to_lowercase(),
        _ => true,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
