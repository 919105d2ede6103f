//! Audit service over the resource registry
//!
//! An audit is either high-level (no filter criteria: repository-wide
//! statistics) or scoped (filter criteria given: a detailed listing of the
//! matching records). Both are computed against an explicit report time so
//! the caller controls the clock.

use crate::app::services::resource_registry::{FilterCriteria, ResourceRegistry};
use crate::config::AuditConfig;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

pub mod scoped;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use scoped::{ResourceDetail, ScopedAudit, scoped_audit};
pub use summary::{CheckState, FrequencyTable, Freshness, RegistrySummary, summarize};

/// Outcome of an audit run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuditReport {
    HighLevel(RegistrySummary),
    Scoped(ScopedAudit),
}

impl AuditReport {
    /// Whether this is a scoped audit
    pub fn is_scoped(&self) -> bool {
        matches!(self, Self::Scoped(_))
    }
}

/// Run the audit selected by `criteria`
///
/// Empty criteria produce a high-level audit; anything else a scoped one.
pub fn run_audit(
    registry: &ResourceRegistry,
    criteria: &FilterCriteria,
    config: &AuditConfig,
    now: NaiveDateTime,
) -> AuditReport {
    if criteria.is_empty() {
        info!(
            "Running high-level audit over {} resources",
            registry.record_count()
        );
        AuditReport::HighLevel(summarize(
            registry.records(),
            now,
            &config.windows,
            config.top_authors,
        ))
    } else {
        info!(
            "Running scoped audit over {} resources with {} filters",
            registry.record_count(),
            criteria.active_filters().len()
        );
        AuditReport::Scoped(scoped_audit(registry.records(), criteria, now))
    }
}
