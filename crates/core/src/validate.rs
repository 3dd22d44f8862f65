//! Structural checks for catalog documents
//!
//! The resolver accepts any well-formed tree. These checks catch data that
//! would render badly (empty titles, runaway nesting) and flag product
//! identifiers that appear in more than one place.

use crate::models::{Catalog, DEFAULT_SEPARATOR};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// How serious a catalog issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// What is wrong with a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    EmptyTitle,
    EmptyProductId,
    EmptyProductTitle,
    TooDeep { depth: usize, max_depth: usize },
    DuplicateProductId { id: String, occurrences: usize },
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::DuplicateProductId { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::EmptyTitle => write!(f, "collection title is empty"),
            IssueKind::EmptyProductId => write!(f, "product has an empty mainProductId"),
            IssueKind::EmptyProductTitle => write!(f, "product title is empty"),
            IssueKind::TooDeep { depth, max_depth } => {
                write!(f, "nesting depth {} exceeds maximum of {}", depth, max_depth)
            }
            IssueKind::DuplicateProductId { id, occurrences } => {
                write!(f, "product id '{}' is attached to {} nodes", id, occurrences)
            }
        }
    }
}

/// A single finding, located by the titles leading to the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub location: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl CatalogIssue {
    fn new(location: String, kind: IssueKind) -> Self {
        Self {
            severity: kind.severity(),
            location,
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity.label(), self.kind, self.location)
    }
}

/// Check a catalog, returning issues in document order.
///
/// Duplicate-id warnings come last, ordered by first occurrence.
pub fn validate_catalog(catalog: &Catalog, max_depth: Option<usize>) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut path: Vec<&str> = Vec::new();

    // id -> (occurrences, location of first occurrence)
    let mut seen: HashMap<&str, (usize, String)> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for (depth, node) in catalog.nodes() {
        path.truncate(depth - 1);
        path.push(&node.title);
        let location = path.join(DEFAULT_SEPARATOR);

        if node.title.trim().is_empty() {
            issues.push(CatalogIssue::new(location.clone(), IssueKind::EmptyTitle));
        }

        // Only the first level past the limit is reported, not every descendant
        if let Some(max) = max_depth {
            if depth == max + 1 {
                issues.push(CatalogIssue::new(
                    location.clone(),
                    IssueKind::TooDeep {
                        depth,
                        max_depth: max,
                    },
                ));
            }
        }

        if let Some(product) = &node.product {
            if product.main_product_id.trim().is_empty() {
                issues.push(CatalogIssue::new(location.clone(), IssueKind::EmptyProductId));
            } else {
                let entry = seen
                    .entry(product.main_product_id.as_str())
                    .or_insert_with(|| {
                        first_seen.push(product.main_product_id.as_str());
                        (0, location.clone())
                    });
                entry.0 += 1;
            }

            if product.title.trim().is_empty() {
                issues.push(CatalogIssue::new(location, IssueKind::EmptyProductTitle));
            }
        }
    }

    for id in first_seen {
        if let Some((occurrences, location)) = seen.remove(id) {
            if occurrences > 1 {
                issues.push(CatalogIssue::new(
                    location,
                    IssueKind::DuplicateProductId {
                        id: id.to_string(),
                        occurrences,
                    },
                ));
            }
        }
    }

    issues
}
