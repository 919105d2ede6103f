//! Core data structures for the resource table
//!
//! A [`ResourceRecord`] is one row of the table: a mapping from column name to
//! raw string value. The table has no enforced schema, so every accessor
//! distinguishes an *absent* column (not in the header, or a short row) from a
//! present-but-empty one, and typed views are derived on demand.

use crate::app::services::resource_registry::parser::parse_timestamp;
use crate::constants::{FLAG_TRUE, LICENSE_NOT_FOUND, UNKNOWN_VALUE, columns};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the resource table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    fields: HashMap<String, String>,
}

impl ResourceRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a column value, replacing any previous value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw value of a column, `None` when the column is absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw value of a column, empty when absent
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Value used when bucketing a column into a frequency table
    pub fn bucket_value(&self, column: &str) -> &str {
        self.get(column).unwrap_or(UNKNOWN_VALUE)
    }

    /// Number of columns present in this record
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn id(&self) -> &str {
        self.get_or_empty(columns::ID)
    }

    pub fn display_name(&self) -> &str {
        self.get_or_empty(columns::DISPLAY_NAME)
    }

    pub fn category(&self) -> &str {
        self.get_or_empty(columns::CATEGORY)
    }

    pub fn sub_category(&self) -> &str {
        self.get_or_empty(columns::SUB_CATEGORY)
    }

    pub fn author(&self) -> &str {
        self.get_or_empty(columns::AUTHOR_NAME)
    }

    pub fn license(&self) -> &str {
        self.get_or_empty(columns::LICENSE)
    }

    pub fn primary_link(&self) -> &str {
        self.get_or_empty(columns::PRIMARY_LINK)
    }

    /// Whether the `Active` flag is set (case-insensitive `TRUE`)
    pub fn is_active(&self) -> bool {
        is_flag_set(self.get(columns::ACTIVE))
    }

    /// Whether the `Removed From Origin` flag is set (case-insensitive `TRUE`)
    pub fn is_removed_from_origin(&self) -> bool {
        is_flag_set(self.get(columns::REMOVED_FROM_ORIGIN))
    }

    /// Whether the record lacks a usable license
    ///
    /// A license is missing when the column is absent, empty, or holds the
    /// link checker's `NOT_FOUND` sentinel.
    pub fn has_no_license(&self) -> bool {
        match self.get(columns::LICENSE) {
            None => true,
            Some(license) => license.is_empty() || license == LICENSE_NOT_FOUND,
        }
    }

    /// Parsed `Date Added` timestamp
    pub fn date_added(&self) -> Option<NaiveDateTime> {
        self.get(columns::DATE_ADDED).and_then(parse_timestamp)
    }

    /// Parsed `Last Checked` timestamp
    pub fn last_checked(&self) -> Option<NaiveDateTime> {
        self.get(columns::LAST_CHECKED).and_then(parse_timestamp)
    }
}

fn is_flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_uppercase() == FLAG_TRUE)
}
