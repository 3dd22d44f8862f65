//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumb trails.
//! Coloring honors `colored`'s global override, so callers can switch it
//! off for non-terminal output.

use crate::models::{ProductOption, Trail, TrailReport};
use crate::output::NO_BREADCRUMB;
use crate::validate::{CatalogIssue, Severity};
use colored::Colorize;

/// Format a single trail: collections in cyan, product highlighted
pub fn format_trail_ansi(trail: &Trail, separator: &str) -> String {
    let sep = separator.dimmed().to_string();
    let mut parts: Vec<String> = trail
        .collections()
        .iter()
        .map(|title| title.cyan().to_string())
        .collect();

    if let Some(product) = trail.product_title() {
        parts.push(product.bright_yellow().bold().to_string());
    }

    parts.join(&sep)
}

/// Format a breadcrumb report as ANSI colored text
pub fn format_report_ansi(report: &TrailReport, separator: &str) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!(
        "{} {}\n",
        "Breadcrumbs for".bold(),
        report.product_id.bright_white().bold()
    ));

    if report.is_empty() {
        output.push_str(&format!("  {}\n", NO_BREADCRUMB.yellow()));
    } else {
        for (idx, trail) in report.trails.iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}.", idx + 1).dimmed(),
                format_trail_ansi(trail, separator)
            ));
        }
    }

    // Footer
    output.push_str(&format!(
        "{}",
        format!(
            "{} match(es), {} nodes visited in {}us\n",
            report.metadata.matches, report.metadata.nodes_visited, report.metadata.duration_us
        )
        .dimmed()
    ));

    output
}

/// Format selector options as ANSI colored text
pub fn format_options_ansi(options: &[ProductOption]) -> String {
    let width = options.iter().map(|o| o.id.len()).max().unwrap_or(0);

    options
        .iter()
        .map(|o| format!("{}  {}", format!("{:<width$}", o.id).green(), o.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format validation issues as ANSI colored text
pub fn format_issues_ansi(issues: &[CatalogIssue]) -> String {
    if issues.is_empty() {
        return "Catalog OK".green().to_string();
    }

    issues
        .iter()
        .map(|issue| {
            let label = match issue.severity {
                Severity::Error => issue.severity.label().bright_red().bold(),
                Severity::Warning => issue.severity.label().yellow(),
            };
            format!("{}: {} {}", label, issue.kind, format!("({})", issue.location).dimmed())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
