//! Data models for catalog breadcrumbs
//!
//! This module defines the collection tree consumed by the resolver, the
//! breadcrumb trails it produces, and the report wrapper used for output.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Separator used when a trail is displayed without explicit configuration
pub const DEFAULT_SEPARATOR: &str = " > ";

/// A sellable item attached to a collection node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier matched against the current selection
    pub main_product_id: String,

    /// Display title, used as the last segment of a trail
    pub title: String,
}

impl Product {
    pub fn new(main_product_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            main_product_id: main_product_id.into(),
            title: title.into(),
        }
    }
}

/// One node of the catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNode {
    /// Display title of the collection
    pub title: String,

    /// Product attached at this node, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    /// Nested collections, in display order
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<CollectionNode>,
}

/// Accept an explicit `null` (or a bare YAML key) as "no children"
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CollectionNode {
    /// Create a bare collection with no product and no children
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            product: None,
            children: Vec::new(),
        }
    }

    /// Attach a product (builder pattern)
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }

    /// Append a single child (builder pattern)
    pub fn with_child(mut self, child: CollectionNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this node has neither a product nor children
    pub fn is_bare(&self) -> bool {
        self.product.is_none() && self.children.is_empty()
    }
}

// Unlinks descendants onto a heap stack so dropping a deep tree does not
// recurse once per level.
impl Drop for CollectionNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// The ordered list of root collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub collections: Vec<CollectionNode>,
}

impl Catalog {
    pub fn new(collections: Vec<CollectionNode>) -> Self {
        Self { collections }
    }

    /// Walk every node in pre-order, yielding `(depth, node)` with roots at depth 1
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: self.collections.iter().rev().map(|n| (1, n)).collect(),
        }
    }

    /// Every attached product, in document order
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.nodes().filter_map(|(_, node)| node.product.as_ref())
    }

    /// Count total nodes in the catalog
    pub fn total_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Depth of the deepest node (0 for an empty catalog)
    pub fn max_depth(&self) -> usize {
        self.nodes().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Pre-order iterator over a catalog.
///
/// Uses an explicit stack so traversal depth is bounded by heap, not by the
/// call stack.
pub struct Nodes<'a> {
    stack: Vec<(usize, &'a CollectionNode)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (usize, &'a CollectionNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child is popped next
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Ordered titles from a root collection down to a matched product
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    segments: Vec<String>,
}

impl Trail {
    /// Build a trail from collection titles plus the product title
    pub fn from_path(collections: &[&str], product_title: &str) -> Self {
        let mut segments = Vec::with_capacity(collections.len() + 1);
        segments.extend(collections.iter().map(|s| s.to_string()));
        segments.push(product_title.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Title of the matched product (last segment)
    pub fn product_title(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Titles of the ancestor collections, root first
    pub fn collections(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Depth of the matched node (root = 1)
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Get the formatted path string
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

/// One entry of the product selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub title: String,
}

impl From<&Product> for ProductOption {
    fn from(product: &Product) -> Self {
        Self {
            id: product.main_product_id.clone(),
            title: product.title.clone(),
        }
    }
}

/// Resolution result for a single selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailReport {
    /// The identifier that was looked up
    pub product_id: String,

    /// Matching trails in document order
    pub trails: Vec<Trail>,

    /// Resolution metadata
    pub metadata: ResolveMetadata,
}

impl TrailReport {
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}

/// Metadata about a resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveMetadata {
    /// Nodes visited during traversal
    pub nodes_visited: usize,

    /// Number of trails produced
    pub matches: usize,

    /// Duration of the traversal in microseconds
    pub duration_us: u64,

    /// ISO timestamp of the resolution
    pub timestamp: String,

    /// Tool version
    pub tool_version: String,
}
