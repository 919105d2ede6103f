//! Resource registry service holding the loaded resource table
//!
//! This module provides the in-memory view of `THE_RESOURCES_TABLE.csv`: the
//! ordered list of records plus the header field names, loaded once per run
//! and read by both the aggregator and the filter engine.

use crate::app::models::ResourceRecord;
use std::path::{Path, PathBuf};

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use query::FilterCriteria;

/// Resource registry holding every record of the table in file order
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    /// Records in the order they appear in the table
    pub(crate) records: Vec<ResourceRecord>,

    /// Header field names, in column order
    pub(crate) fieldnames: Vec<String>,

    /// Where the table was read from
    pub(crate) source_path: PathBuf,
}

impl ResourceRegistry {
    /// Create a registry from already-built records
    pub fn from_records(
        source_path: PathBuf,
        fieldnames: Vec<String>,
        records: Vec<ResourceRecord>,
    ) -> Self {
        Self {
            records,
            fieldnames,
            source_path,
        }
    }

    /// Where the table was read from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// All records in table order
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Header field names in column order
    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    /// Whether the header declares the given column
    pub fn has_column(&self, column: &str) -> bool {
        self.fieldnames.iter().any(|name| name == column)
    }

    /// Number of records in the registry
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
