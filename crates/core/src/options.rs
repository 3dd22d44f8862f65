//! Selector options derived from a catalog

use crate::models::{Catalog, ProductOption};
use std::collections::HashSet;

/// List each distinct product once, in the order it first appears
pub fn product_options(catalog: &Catalog) -> Vec<ProductOption> {
    let mut seen = HashSet::new();
    catalog
        .products()
        .filter(|product| seen.insert(product.main_product_id.as_str()))
        .map(ProductOption::from)
        .collect()
}
