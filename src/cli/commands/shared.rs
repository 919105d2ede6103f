//! Shared components for CLI commands
//!
//! Logging setup and report output used by the audit command.

use crate::cli::args::Args;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging
///
/// Logs go to stderr so stdout carries only the report.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resource_audit={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(!args.no_color)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Write a rendered report to a file, or to stdout when no file is given
pub fn write_report(report: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Audit report written to: {}", path.display());
        }
        None => {
            print!("{}", report);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        write_report("report body\n", Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report body\n");
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");

        let result = write_report("report body\n", Some(&path));

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
