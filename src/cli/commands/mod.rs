//! Command implementations for the resource auditor CLI
//!
//! This module wires the pipeline together: resolve configuration, load the
//! resource table, run the audit selected by the filter flags, render the
//! report and write it out.

pub mod report;
pub mod shared;

use crate::app::services::audit::{AuditReport, run_audit};
use crate::app::services::resource_registry::ResourceRegistry;
use crate::cli::args::{Args, OutputFormat};
use anyhow::Context;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics about a completed run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Records loaded from the table
    pub records_loaded: usize,
    /// Records matched by the filters, `None` for a high-level audit
    pub matched: Option<usize>,
    /// Total run time
    pub processing_time: Duration,
}

/// Main command runner for the resource auditor
///
/// A missing resource table surfaces as [`crate::Error::FileNotFound`] in the
/// returned error chain.
pub fn run(args: Args) -> anyhow::Result<RunStats> {
    let start_time = Instant::now();

    shared::setup_logging(&args)?;
    if !args.use_color() {
        colored::control::set_override(false);
    }

    debug!("Arguments: {:?}", args);

    let config = args
        .resolve_config()
        .context("Failed to resolve configuration")?;
    debug!("Configuration: {:?}", config);

    let (registry, load_stats) = ResourceRegistry::load(&config.csv_path)?;
    debug!(
        "{} from {}",
        load_stats.summary(),
        registry.source_path().display()
    );

    let criteria = args.criteria();
    let now = chrono::Local::now().naive_local();
    let report = run_audit(&registry, &criteria, &config, now);

    let format = args.format();
    let mut rendered = report::render(&report, format).context("Failed to render report")?;
    if format == OutputFormat::Json {
        rendered.push('\n');
    }

    shared::write_report(&rendered, args.output_file.as_deref())
        .context("Failed to write report")?;

    let stats = RunStats {
        records_loaded: registry.record_count(),
        matched: match &report {
            AuditReport::Scoped(audit) => Some(audit.matched_count),
            AuditReport::HighLevel(_) => None,
        },
        processing_time: start_time.elapsed(),
    };

    info!(
        "Audit complete: {} records loaded in {:.3}s",
        stats.records_loaded,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}
