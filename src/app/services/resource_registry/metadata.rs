//! Load statistics tracking
//!
//! This module defines the data structures describing what a load pass found
//! in the resource table.

/// Statistics about the resource table loading process
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Number of records loaded
    pub records_loaded: usize,

    /// Rows with fewer fields than the header (trailing columns treated as absent)
    pub short_rows: usize,

    /// Rows with more fields than the header (extra fields ignored)
    pub long_rows: usize,

    /// Expected columns missing from the header
    pub missing_columns: Vec<String>,

    /// Time taken to load the table
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            records_loaded: 0,
            short_rows: 0,
            long_rows: 0,
            missing_columns: Vec::new(),
            load_duration: std::time::Duration::ZERO,
        }
    }

    /// Number of rows whose length did not match the header
    pub fn ragged_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }

    /// Whether the header lacks any column the auditor reads
    pub fn has_missing_columns(&self) -> bool {
        !self.missing_columns.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} records ({} ragged rows, {} missing columns) in {:.3}s",
            self.records_loaded,
            self.ragged_rows(),
            self.missing_columns.len(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
