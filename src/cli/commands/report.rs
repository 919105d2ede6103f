//! Report rendering for audit results
//!
//! Renders a high-level or scoped audit either as an emoji-decorated text
//! report for the console or as pretty-printed JSON. Rendering is pure: the
//! caller decides where the text goes.

use crate::app::services::audit::{AuditReport, RegistrySummary, ScopedAudit};
use crate::cli::args::OutputFormat;
use crate::constants::{
    HIDDEN_LICENSES, REPORT_BANNER_WIDTH, REPORT_LIST_LIMIT, UNKNOWN_VALUE,
};
use crate::{Error, Result};
use colored::*;

/// Render a report in the requested format
pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Human => Ok(match report {
            AuditReport::HighLevel(summary) => render_summary_text(summary),
            AuditReport::Scoped(audit) => render_scoped_text(audit),
        }),
    }
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &AuditReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialize audit report", e))
}

/// Render a high-level audit as a text report
pub fn render_summary_text(summary: &RegistrySummary) -> String {
    let mut output = String::new();
    push_banner(&mut output, "HIGH-LEVEL AUDIT REPORT");

    output.push_str(&format!("\n{}\n", "📊 OVERVIEW".bold()));
    output.push_str(&format!("  Total Resources: {}\n", summary.total_resources));
    output.push_str(&format!(
        "  Active: {} ({:.1}%)\n",
        summary.active,
        summary.active_percentage()
    ));
    output.push_str(&format!(
        "  Inactive: {} ({:.1}%)\n",
        summary.inactive,
        summary.inactive_percentage()
    ));
    output.push_str(&format!("  Unique Authors: {}\n", summary.unique_authors));

    output.push_str(&format!(
        "\n{}\n",
        format!("📁 CATEGORIES ({} total)", summary.categories.len()).bold()
    ));
    for (category, count) in summary.categories.iter() {
        output.push_str(&format!("  {}: {}\n", category, count));
    }

    output.push_str(&format!(
        "\n{}\n",
        format!("📂 SUB-CATEGORIES ({} total)", summary.sub_categories.len()).bold()
    ));
    for (sub_category, count) in summary.sub_categories.iter().take(REPORT_LIST_LIMIT) {
        output.push_str(&format!("  {}: {}\n", sub_category, count));
    }
    if summary.sub_categories.len() > REPORT_LIST_LIMIT {
        output.push_str(&format!(
            "  ... and {} more\n",
            summary.sub_categories.len() - REPORT_LIST_LIMIT
        ));
    }

    output.push_str(&format!("\n{}\n", "⚖️  LICENSES".bold()));
    output.push_str(&format!(
        "  Resources without license: {}\n",
        summary.no_license
    ));
    output.push_str("  Top licenses:\n");
    for (license, count) in summary
        .licenses
        .iter()
        .take(REPORT_LIST_LIMIT)
        .filter(|(license, _)| !HIDDEN_LICENSES.contains(license))
    {
        output.push_str(&format!("    {}: {}\n", license, count));
    }

    output.push_str(&format!("\n{}\n", "👥 TOP AUTHORS".bold()));
    for (author, count) in summary
        .top_authors
        .iter()
        .take(REPORT_LIST_LIMIT)
        .filter(|(author, _)| *author != UNKNOWN_VALUE)
    {
        output.push_str(&format!("  {}: {} resources\n", author, count));
    }

    let windows = &summary.windows;
    output.push_str(&format!("\n{}\n", "📅 FRESHNESS".bold()));
    output.push_str(&format!(
        "  Recently added (last {} days): {}\n",
        windows.recently_added_days, summary.recently_added
    ));
    output.push_str(&format!(
        "  Recently checked (last {} days): {}\n",
        windows.recently_checked_days, summary.recently_checked
    ));
    output.push_str(&format!("  Never checked: {}\n", summary.never_checked));
    output.push_str(&format!(
        "  Outdated checks (>{} days): {}\n",
        windows.outdated_after_days, summary.outdated_checks
    ));

    output.push_str(&format!("\n{}\n", "⚠️  ISSUES".yellow().bold()));
    let removed = format!("  Removed from origin: {}", summary.removed_from_origin);
    if summary.removed_from_origin > 0 {
        output.push_str(&format!("{}\n", removed.yellow()));
    } else {
        output.push_str(&format!("{}\n", removed));
    }

    push_closing_banner(&mut output);
    output
}

/// Render a scoped audit as a text report
pub fn render_scoped_text(audit: &ScopedAudit) -> String {
    let mut output = String::new();
    push_banner(&mut output, "SCOPED AUDIT REPORT");

    output.push_str(&format!("\n{}\n", "🔍 FILTER CRITERIA:".bold()));
    let filters = audit.filter_criteria.active_filters();
    if filters.is_empty() {
        output.push_str("  No filters applied\n");
    } else {
        for (label, value) in filters {
            output.push_str(&format!("  {}: {}\n", label, value));
        }
    }

    output.push_str(&format!(
        "\n{}\n",
        format!("📊 MATCHED: {} resources", audit.matched_count).bold()
    ));

    if audit.matched_count > 0 {
        output.push_str(&format!("\n{}\n", "📋 RESOURCES:".bold()));
        for (index, resource) in audit.resources.iter().enumerate() {
            let status = if resource.is_active() {
                "✓".green()
            } else {
                "✗".red()
            };
            let days = match resource.days_since_check {
                Some(days) => format!("({}d ago)", days),
                None => "(never checked)".to_string(),
            };

            output.push_str(&format!(
                "\n  {}. {} {}\n",
                index + 1,
                status,
                resource.name.bright_cyan()
            ));
            output.push_str(&format!(
                "     Category: {} / {}\n",
                resource.category, resource.sub_category
            ));
            output.push_str(&format!("     Author: {}\n", resource.author));
            output.push_str(&format!("     License: {}\n", resource.license));
            output.push_str(&format!("     Link: {}\n", resource.primary_link));
            output.push_str(&format!(
                "     Last Checked: {} {}\n",
                resource.last_checked, days
            ));
            if resource.is_removed_from_origin() {
                output.push_str(&format!(
                    "     {}\n",
                    "⚠️  REMOVED FROM ORIGIN".yellow().bold()
                ));
            }
        }
    }

    push_closing_banner(&mut output);
    output
}

fn push_banner(output: &mut String, title: &str) {
    let rule = "=".repeat(REPORT_BANNER_WIDTH);
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&rule);
    output.push('\n');
}

fn push_closing_banner(output: &mut String) {
    output.push('\n');
    output.push_str(&"=".repeat(REPORT_BANNER_WIDTH));
    output.push_str("\n\n");
}
