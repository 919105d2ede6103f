//! Application constants for the resource auditor
//!
//! This module contains the table location, column names, sentinel values
//! and report defaults used throughout the application.

// =============================================================================
// Input Table
// =============================================================================

/// Default location of the resource table, relative to the working directory
pub const DEFAULT_CSV_FILE: &str = "THE_RESOURCES_TABLE.csv";

/// Timestamp format used by the `Date Added` and `Last Checked` columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d:%H-%M-%S";

/// Column names of the resource table
pub mod columns {
    pub const ID: &str = "ID";
    pub const DISPLAY_NAME: &str = "Display Name";
    pub const CATEGORY: &str = "Category";
    pub const SUB_CATEGORY: &str = "Sub-Category";
    pub const PRIMARY_LINK: &str = "Primary Link";
    pub const AUTHOR_NAME: &str = "Author Name";
    pub const ACTIVE: &str = "Active";
    pub const DATE_ADDED: &str = "Date Added";
    pub const LAST_CHECKED: &str = "Last Checked";
    pub const LICENSE: &str = "License";
    pub const REMOVED_FROM_ORIGIN: &str = "Removed From Origin";

    /// Columns the auditor reads; missing ones are reported when loading
    pub const EXPECTED: &[&str] = &[
        ID,
        DISPLAY_NAME,
        CATEGORY,
        SUB_CATEGORY,
        PRIMARY_LINK,
        AUTHOR_NAME,
        ACTIVE,
        DATE_ADDED,
        LAST_CHECKED,
        LICENSE,
        REMOVED_FROM_ORIGIN,
    ];
}

// =============================================================================
// Sentinel Values
// =============================================================================

/// Truthy value of the `Active` and `Removed From Origin` flags (compared upper-cased)
pub const FLAG_TRUE: &str = "TRUE";

/// License value written by the link checker when no license could be found
pub const LICENSE_NOT_FOUND: &str = "NOT_FOUND";

/// Bucket used in frequency tables when a column is absent from a record
pub const UNKNOWN_VALUE: &str = "Unknown";

// =============================================================================
// Freshness Windows
// =============================================================================

/// Resources added within this many days count as recently added
pub const DEFAULT_RECENTLY_ADDED_DAYS: i64 = 30;

/// Resources checked within this many days count as recently checked
pub const DEFAULT_RECENTLY_CHECKED_DAYS: i64 = 7;

/// Resources last checked more than this many days ago count as outdated
pub const DEFAULT_OUTDATED_AFTER_DAYS: i64 = 30;

// =============================================================================
// Report Layout
// =============================================================================

/// Number of authors kept in the top-authors table
pub const DEFAULT_TOP_AUTHORS: usize = 10;

/// Number of sub-categories and licenses listed in the human report
pub const REPORT_LIST_LIMIT: usize = 10;

/// Width of the `=` banner framing human reports
pub const REPORT_BANNER_WIDTH: usize = 80;

/// Licenses hidden from the human report's top-license listing
pub const HIDDEN_LICENSES: &[&str] = &[LICENSE_NOT_FOUND, UNKNOWN_VALUE, ""];

// =============================================================================
// Environment
// =============================================================================

/// Environment variables consulted by the configuration layer
pub mod env_vars {
    pub const CSV_PATH: &str = "RESOURCE_AUDIT_CSV";
    pub const RECENTLY_ADDED_DAYS: &str = "RESOURCE_AUDIT_RECENT_ADDED_DAYS";
    pub const RECENTLY_CHECKED_DAYS: &str = "RESOURCE_AUDIT_RECENT_CHECK_DAYS";
    pub const OUTDATED_AFTER_DAYS: &str = "RESOURCE_AUDIT_OUTDATED_DAYS";
    pub const TOP_AUTHORS: &str = "RESOURCE_AUDIT_TOP_AUTHORS";
}
