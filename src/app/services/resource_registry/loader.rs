//! Resource table loading
//!
//! Reads `THE_RESOURCES_TABLE.csv` (or any reader holding the same layout)
//! into a [`ResourceRegistry`]. Loading is lenient about row length: short
//! rows leave their trailing columns absent and extra fields are ignored.

use super::ResourceRegistry;
use super::metadata::LoadStats;
use crate::app::models::ResourceRecord;
use crate::constants::columns;
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

impl ResourceRegistry {
    /// Load the resource table from a CSV file
    ///
    /// # Arguments
    /// * `path` - Location of the resource table
    ///
    /// # Returns
    /// * `Result<(ResourceRegistry, LoadStats)>` - Registry and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the table does not exist
    /// * Returns `Error::Io` if the file cannot be opened
    /// * Returns `Error::CsvParsing` for unreadable CSV content (e.g. invalid UTF-8)
    pub fn load(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading resource table from {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        Self::from_reader(file, path)
    }

    /// Load the resource table from any reader
    ///
    /// `source` is only used for error messages and registry metadata.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let source: PathBuf = source.into();
        let source_name = source.display().to_string();
        let mut stats = LoadStats::new();

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(&source_name, "Failed to read header row", Some(e))
            })?
            .clone();
        let fieldnames: Vec<String> = headers.iter().map(str::to_string).collect();
        debug!("Header fields: {:?}", fieldnames);

        stats.missing_columns = columns::EXPECTED
            .iter()
            .filter(|column| !fieldnames.iter().any(|name| name.as_str() == **column))
            .map(|column| column.to_string())
            .collect();
        for column in &stats.missing_columns {
            warn!("Column '{}' missing from {}", column, source_name);
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row.map_err(|e| {
                // Header is line 1, so data row N sits on line N + 2
                Error::csv_parsing(
                    &source_name,
                    format!("Failed to read record on line {}", index + 2),
                    Some(e),
                )
            })?;

            if row.len() < headers.len() {
                stats.short_rows += 1;
            } else if row.len() > headers.len() {
                stats.long_rows += 1;
            }

            records.push(build_record(&headers, &row));
        }

        if stats.ragged_rows() > 0 {
            debug!(
                "{} short and {} long rows in {}",
                stats.short_rows, stats.long_rows, source_name
            );
        }

        stats.records_loaded = records.len();
        stats.load_duration = start_time.elapsed();

        let registry = Self::from_records(source, fieldnames, records);

        info!("{}", stats.summary());

        Ok((registry, stats))
    }
}

/// Pair header names with row fields; fields beyond the header are dropped
fn build_record(headers: &StringRecord, row: &StringRecord) -> ResourceRecord {
    ResourceRecord::from_pairs(headers.iter().zip(row.iter()))
}
