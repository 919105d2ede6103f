//! Configuration management and validation.
//!
//! Provides the audit configuration (input location, freshness windows and
//! report sizing) with layered resolution: built-in defaults, then
//! environment variables, then command-line overrides.

use crate::constants::{
    DEFAULT_CSV_FILE, DEFAULT_OUTDATED_AFTER_DAYS, DEFAULT_RECENTLY_ADDED_DAYS,
    DEFAULT_RECENTLY_CHECKED_DAYS, DEFAULT_TOP_AUTHORS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Day thresholds used to classify timestamps into freshness buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessWindows {
    /// `Date Added` at most this many days ago counts as recently added
    pub recently_added_days: i64,

    /// `Last Checked` at most this many days ago counts as recently checked
    pub recently_checked_days: i64,

    /// `Last Checked` more than this many days ago counts as outdated
    pub outdated_after_days: i64,
}

impl Default for FreshnessWindows {
    fn default() -> Self {
        Self {
            recently_added_days: DEFAULT_RECENTLY_ADDED_DAYS,
            recently_checked_days: DEFAULT_RECENTLY_CHECKED_DAYS,
            outdated_after_days: DEFAULT_OUTDATED_AFTER_DAYS,
        }
    }
}

/// Top-level configuration for an audit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Location of the resource table
    pub csv_path: PathBuf,

    /// Freshness window thresholds
    pub windows: FreshnessWindows,

    /// Number of authors kept in the top-authors table
    pub top_authors: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_FILE),
            windows: FreshnessWindows::default(),
            top_authors: DEFAULT_TOP_AUTHORS,
        }
    }
}

impl AuditConfig {
    /// Build a configuration from defaults overlaid with process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults overlaid with values from `lookup`
    ///
    /// `lookup` maps an environment variable name to its value, which keeps
    /// the layering testable without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(env_vars::CSV_PATH).filter(|p| !p.trim().is_empty()) {
            debug!("{} overrides input path: {}", env_vars::CSV_PATH, path);
            config.csv_path = PathBuf::from(path);
        }

        if let Some(days) = parse_env_value(&lookup, env_vars::RECENTLY_ADDED_DAYS)? {
            config.windows.recently_added_days = days;
        }
        if let Some(days) = parse_env_value(&lookup, env_vars::RECENTLY_CHECKED_DAYS)? {
            config.windows.recently_checked_days = days;
        }
        if let Some(days) = parse_env_value(&lookup, env_vars::OUTDATED_AFTER_DAYS)? {
            config.windows.outdated_after_days = days;
        }
        if let Some(limit) = parse_env_value(&lookup, env_vars::TOP_AUTHORS)? {
            config.top_authors = limit;
        }

        Ok(config)
    }

    /// Override the input table location
    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }

    /// Override the freshness windows
    pub fn with_windows(mut self, windows: FreshnessWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Override the top-authors table size
    pub fn with_top_authors(mut self, top_authors: usize) -> Self {
        self.top_authors = top_authors;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path cannot be empty"));
        }

        if self.top_authors == 0 {
            return Err(Error::configuration("Top authors limit must be at least 1"));
        }

        let windows = &self.windows;
        if windows.recently_added_days < 0
            || windows.recently_checked_days < 0
            || windows.outdated_after_days < 0
        {
            return Err(Error::configuration(
                "Freshness windows cannot be negative",
            ));
        }

        if windows.recently_checked_days > windows.outdated_after_days {
            return Err(Error::configuration(format!(
                "Recently-checked window ({} days) cannot exceed outdated threshold ({} days)",
                windows.recently_checked_days, windows.outdated_after_days
            )));
        }

        Ok(())
    }
}

/// Parse an optional environment value, reporting unparseable values as configuration errors
fn parse_env_value<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            let value = raw.trim().parse::<T>().map_err(|e| {
                Error::configuration(format!("Invalid value '{}' for {}: {}", raw, key, e))
            })?;
            debug!("{} set from environment", key);
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
