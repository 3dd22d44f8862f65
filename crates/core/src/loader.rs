//! Catalog document loading
//!
//! A catalog document is the static data file behind the selector: the root
//! collections plus, optionally, the list of products the selector offers.

use crate::config::{ConfigError, DocumentFormat, ResolverConfig};
use crate::models::{Catalog, ProductOption};
use crate::options::product_options;
use crate::validate::validate_catalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Catalog failed validation with {count} error(s), first: {first}")]
    Invalid { count: usize, first: String },
}

/// The on-disk shape of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(flatten)]
    pub catalog: Catalog,

    /// Explicit selector entries; derived from the catalog when absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_options: Vec<ProductOption>,
}

impl CatalogDocument {
    /// Options to offer in the selector
    pub fn selectable_options(&self) -> Vec<ProductOption> {
        if self.product_options.is_empty() {
            product_options(&self.catalog)
        } else {
            self.product_options.clone()
        }
    }
}

/// Parse a catalog document from text
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<CatalogDocument, CatalogError> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(document)
}

/// Read and parse the catalog named by `config`, validating it when enabled
#[instrument(level = "debug", skip(config), fields(path = %config.catalog_path.display()))]
pub fn load_document(config: &ResolverConfig) -> Result<CatalogDocument, CatalogError> {
    config.check()?;
    let format = config.document_format()?;

    let text = fs::read_to_string(&config.catalog_path).map_err(|source| CatalogError::Io {
        path: config.catalog_path.clone(),
        source,
    })?;

    let document = parse_document(&text, format)?;
    debug!(
        roots = document.catalog.collections.len(),
        nodes = document.catalog.total_nodes(),
        options = document.product_options.len(),
        "catalog loaded"
    );

    if document.catalog.is_empty() {
        warn!("catalog has no collections; every selection will resolve to nothing");
    }

    if config.validate {
        let issues = validate_catalog(&document.catalog, config.max_depth);
        let mut errors = Vec::new();
        for issue in issues {
            if issue.is_error() {
                errors.push(issue);
            } else {
                warn!("{}", issue);
            }
        }

        if let Some(first) = errors.first() {
            return Err(CatalogError::Invalid {
                count: errors.len(),
                first: first.to_string(),
            });
        }
    }

    Ok(document)
}

/// Read a catalog file, discarding selector options
pub fn load_catalog(config: &ResolverConfig) -> Result<Catalog, CatalogError> {
    load_document(config).map(|document| document.catalog)
}
