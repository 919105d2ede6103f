//! Command-line argument definitions for the resource auditor
//!
//! This module defines the CLI interface using the clap derive API. With no
//! filter flags the tool prints a high-level audit; any filter flag switches
//! it to a scoped audit of the matching resources.

use crate::Result;
use crate::app::services::resource_registry::FilterCriteria;
use crate::config::AuditConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  # High-level audit
  resource-audit

  # Scoped audits
  resource-audit --category \"Agent Skills\"
  resource-audit --sub-category \"General\"
  resource-audit --author \"username\"
  resource-audit --license MIT
  resource-audit --inactive
  resource-audit --no-license
  resource-audit --recent-days 30

  # Combined scopes
  resource-audit --category \"Tooling\" --inactive";

/// CLI arguments for the resource auditor
///
/// Audits the community resource table, printing repository-wide statistics
/// or a detailed listing of the resources matching the given filters.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "resource-audit",
    version,
    about = "Audit the community resource table",
    long_about = "Audit the community resource table (THE_RESOURCES_TABLE.csv). Without filters, \
                  prints repository-wide statistics: totals, category and license breakdowns, top \
                  authors and freshness of link checks. With filters, prints a detailed listing of \
                  the matching resources.",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Filter by category (case-insensitive exact match)
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Filter by sub-category (case-insensitive exact match)
    #[arg(long = "sub-category", value_name = "NAME")]
    pub sub_category: Option<String>,

    /// Filter by author name (case-insensitive exact match)
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Filter by license (case-insensitive exact match)
    #[arg(long, value_name = "LICENSE")]
    pub license: Option<String>,

    /// Show only inactive resources
    #[arg(long)]
    pub inactive: bool,

    /// Show only resources without a license
    #[arg(long = "no-license")]
    pub no_license: bool,

    /// Show only resources added in the last N days (0 still runs a scoped audit)
    #[arg(long = "recent-days", value_name = "N")]
    pub recent_days: Option<u32>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output in JSON format (shorthand for --format json)
    #[arg(long)]
    pub json: bool,

    /// Path to the resource table
    ///
    /// Defaults to THE_RESOURCES_TABLE.csv in the working directory, or the
    /// RESOURCE_AUDIT_CSV environment variable when set.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_path: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// Pretty-printed JSON for scripting
    Json,
}

impl Args {
    /// Filter criteria described by the flags
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            author: self.author.clone(),
            license: self.license.clone(),
            inactive_only: self.inactive,
            no_license_only: self.no_license,
            recent_days: self.recent_days,
        }
        .normalized()
    }

    /// Effective output format, honoring the `--json` shorthand
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output_format
        }
    }

    /// Whether the report should be colorized
    pub fn use_color(&self) -> bool {
        !self.no_color && self.format() == OutputFormat::Human && self.output_file.is_none()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Apply command-line overrides on top of a base configuration
    pub fn apply_overrides(&self, config: AuditConfig) -> AuditConfig {
        match &self.csv_path {
            Some(path) => config.with_csv_path(path.clone()),
            None => config,
        }
    }

    /// Resolve the run configuration: defaults, then environment, then flags
    pub fn resolve_config(&self) -> Result<AuditConfig> {
        let config = self.apply_overrides(AuditConfig::from_env()?);
        config.validate()?;
        Ok(config)
    }
}
