//! catalog_breadcrumbs_core - Core library for product breadcrumbs
//!
//! This crate resolves the breadcrumb trails leading to a selected product
//! inside a nested catalog of collections.
//!
//! # Features
//!
//! - **Trail Resolution**: Pre-order search of every collection for products
//!   matching an identifier, returning one trail per match in document order.
//! - **Catalog Documents**: JSON and YAML loading with optional structural
//!   validation.
//! - **Selector Options**: The list of products a selector should offer.
//! - **Multiple Output Formats**: JSON, YAML, ANSI-colored and plain text.
//!
//! # Example
//!
//! ```rust
//! use catalog_breadcrumbs_core::{find_trails, Catalog, CollectionNode, Product};
//!
//! let catalog = Catalog::new(vec![CollectionNode::new("Apparel").with_child(
//!     CollectionNode::new("Tees").with_product(Product::new("p1", "Oversized Cotton Tee")),
//! )]);
//!
//! let trails = find_trails(&catalog, "p1");
//! assert_eq!(trails[0].to_string(), "Apparel > Tees > Oversized Cotton Tee");
//! ```

pub mod config;
pub mod engine;
pub mod loader;
pub mod models;
pub mod options;
pub mod output;
pub mod validate;

// Re-exports for convenience
pub use config::{ConfigError, DocumentFormat, ResolverConfig};
pub use engine::{find_trails, BreadcrumbResolver};
pub use loader::{load_catalog, load_document, parse_document, CatalogDocument, CatalogError};
pub use models::{
    Catalog, CollectionNode, Product, ProductOption, ResolveMetadata, Trail, TrailReport,
    DEFAULT_SEPARATOR,
};
pub use options::product_options;
pub use output::{format_issues, format_options, format_report, FormatError, OutputFormat};
pub use validate::{validate_catalog, CatalogIssue, IssueKind, Severity};
