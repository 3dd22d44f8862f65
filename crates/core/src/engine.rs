//! Breadcrumb engine module
//!
//! This module provides the resolver that turns a product selection into
//! the breadcrumb trails leading to it.

use crate::models::{Catalog, ResolveMetadata, Trail, TrailReport};
use std::time::Instant;
use tracing::{debug, trace};

/// Resolves breadcrumb trails against a borrowed catalog.
///
/// The catalog is only read, so one resolver can serve any number of
/// selections, and several resolvers can share a catalog across threads.
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> BreadcrumbResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Find every trail ending at a product with the given identifier
    pub fn find_trails(&self, selected_product_id: &str) -> Vec<Trail> {
        walk(self.catalog, selected_product_id).0
    }

    /// Resolve a selection and wrap the trails with metadata
    pub fn resolve(&self, selected_product_id: &str) -> TrailReport {
        let start = Instant::now();
        let (trails, nodes_visited) = walk(self.catalog, selected_product_id);
        let duration = start.elapsed();

        let metadata = ResolveMetadata {
            nodes_visited,
            matches: trails.len(),
            duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };

        TrailReport {
            product_id: selected_product_id.to_string(),
            trails,
            metadata,
        }
    }
}

/// Find every trail in `catalog` ending at a product with `selected_product_id`.
///
/// Trails come back in document order. An unknown identifier yields an
/// empty list.
pub fn find_trails(catalog: &Catalog, selected_product_id: &str) -> Vec<Trail> {
    walk(catalog, selected_product_id).0
}

/// Pre-order walk returning matched trails and the number of nodes visited
fn walk(catalog: &Catalog, selected_product_id: &str) -> (Vec<Trail>, usize) {
    debug!(
        product_id = selected_product_id,
        roots = catalog.collections.len(),
        "resolving breadcrumbs"
    );

    let mut trails = Vec::new();
    let mut path: Vec<&str> = Vec::new();
    let mut visited = 0;

    for (depth, node) in catalog.nodes() {
        visited += 1;

        // Drop titles belonging to the previous branch
        path.truncate(depth - 1);
        path.push(&node.title);

        if let Some(product) = node
            .product
            .as_ref()
            .filter(|p| p.main_product_id == selected_product_id)
        {
            trace!(depth, collection = %node.title, product = %product.title, "match");
            trails.push(Trail::from_path(&path, &product.title));
        }
    }

    debug!(
        product_id = selected_product_id,
        visited,
        matches = trails.len(),
        "resolution finished"
    );

    (trails, visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CollectionNode, Product};

    fn titles(trails: &[Trail]) -> Vec<Vec<&str>> {
        trails
            .iter()
            .map(|t| t.segments().iter().map(String::as_str).collect())
            .collect()
    }

    fn apparel() -> Catalog {
        Catalog::new(vec![CollectionNode::new("Apparel").with_child(
            CollectionNode::new("Tees").with_product(Product::new("p1", "Oversized Cotton Tee")),
        )])
    }

    #[test]
    fn test_single_match() {
        let trails = find_trails(&apparel(), "p1");
        assert_eq!(
            titles(&trails),
            vec![vec!["Apparel", "Tees", "Oversized Cotton Tee"]]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(find_trails(&apparel(), "p2").is_empty());
        assert!(find_trails(&Catalog::default(), "p1").is_empty());
    }

    #[test]
    fn test_root_product_and_nested_product_both_match() {
        let catalog = Catalog::new(vec![CollectionNode::new("Sale")
            .with_product(Product::new("p9", "Mystery Box"))
            .with_child(
                CollectionNode::new("Boxes").with_product(Product::new("p9", "Mystery Box")),
            )]);

        let trails = find_trails(&catalog, "p9");
        assert_eq!(
            titles(&trails),
            vec![
                vec!["Sale", "Mystery Box"],
                vec!["Sale", "Boxes", "Mystery Box"],
            ]
        );
    }

    #[test]
    fn test_path_resets_between_siblings() {
        let catalog = Catalog::new(vec![CollectionNode::new("Root")
            .with_child(
                CollectionNode::new("Left")
                    .with_child(CollectionNode::new("Deep").with_child(CollectionNode::new("Deeper"))),
            )
            .with_child(CollectionNode::new("Right").with_product(Product::new("x", "X")))]);

        assert_eq!(
            titles(&find_trails(&catalog, "x")),
            vec![vec!["Root", "Right", "X"]]
        );
    }

    #[test]
    fn test_resolve_reports_full_traversal() {
        let catalog = Catalog::new(vec![
            CollectionNode::new("A").with_product(Product::new("p1", "One")),
            CollectionNode::new("B").with_child(CollectionNode::new("B1")),
        ]);
        let resolver = BreadcrumbResolver::new(&catalog);
        let report = resolver.resolve("p1");

        assert_eq!(report.product_id, "p1");
        assert_eq!(report.metadata.matches, 1);
        assert_eq!(report.metadata.nodes_visited, 3);
        assert_eq!(report.trails, resolver.find_trails("p1"));
    }
}
