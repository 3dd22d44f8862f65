//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI and plain text
//! rendering of breadcrumb reports, selector options and catalog issues.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::{format_issues_ansi, format_options_ansi, format_report_ansi};
pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::{ProductOption, TrailReport};
use crate::validate::CatalogIssue;
use thiserror::Error;

/// Message shown when a selection matches nothing
pub const NO_BREADCRUMB: &str = "No breadcrumb found.";

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// One trail per line
    #[default]
    Text,
}

/// Format a breadcrumb report in the specified format
pub fn format_report(
    report: &TrailReport,
    format: OutputFormat,
    separator: &str,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Yaml => format_yaml(report),
        OutputFormat::Ansi => Ok(format_report_ansi(report, separator)),
        OutputFormat::Text => Ok(format_report_text(report, separator)),
    }
}

/// Format selector options in the specified format
pub fn format_options(
    options: &[ProductOption],
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(&options),
        OutputFormat::Yaml => format_yaml(&options),
        OutputFormat::Ansi => Ok(format_options_ansi(options)),
        OutputFormat::Text => Ok(options
            .iter()
            .map(|o| format!("{}\t{}", o.id, o.title))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Format validation issues in the specified format
pub fn format_issues(issues: &[CatalogIssue], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(&issues),
        OutputFormat::Yaml => format_yaml(&issues),
        OutputFormat::Ansi => Ok(format_issues_ansi(issues)),
        OutputFormat::Text => Ok(format_issues_text(issues)),
    }
}

/// Format as plain text, one trail per line
fn format_report_text(report: &TrailReport, separator: &str) -> String {
    if report.is_empty() {
        return NO_BREADCRUMB.to_string();
    }

    report
        .trails
        .iter()
        .map(|trail| trail.join(separator))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_issues_text(issues: &[CatalogIssue]) -> String {
    if issues.is_empty() {
        return "Catalog OK".to_string();
    }

    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{ResolveMetadata, Trail};

    pub(crate) fn create_test_report(trails: Vec<Trail>) -> TrailReport {
        TrailReport {
            product_id: "p1".to_string(),
            metadata: ResolveMetadata {
                nodes_visited: 3,
                matches: trails.len(),
                duration_us: 12,
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_version: "0.1.0".to_string(),
            },
            trails,
        }
    }

    #[test]
    fn test_text_one_trail_per_line() {
        let report = create_test_report(vec![
            Trail::from_path(&["Apparel", "Tees"], "Tee"),
            Trail::from_path(&["Sale"], "Tee"),
        ]);
        let text = format_report(&report, OutputFormat::Text, " > ").unwrap();
        assert_eq!(text, "Apparel > Tees > Tee\nSale > Tee");
    }

    #[test]
    fn test_text_empty_report() {
        let report = create_test_report(vec![]);
        let text = format_report(&report, OutputFormat::Text, " > ").unwrap();
        assert_eq!(text, NO_BREADCRUMB);
    }

    #[test]
    fn test_options_text() {
        let options = vec![ProductOption {
            id: "p1".to_string(),
            title: "Oversized Cotton Tee".to_string(),
        }];
        let text = format_options(&options, OutputFormat::Text).unwrap();
        assert_eq!(text, "p1\tOversized Cotton Tee");
    }
}
