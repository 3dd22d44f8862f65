//! Configuration module for the breadcrumb resolver
//!
//! This module provides the configuration structure controlling how a
//! catalog document is located, parsed, checked, and how trails are joined.

use crate::models::DEFAULT_SEPARATOR;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Serialization format of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    /// Determine format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        path.extension()
            .and_then(|ext| Self::from_extension(&ext.to_string_lossy()))
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Configuration for loading a catalog and rendering its trails
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Path to the catalog document
    pub catalog_path: PathBuf,

    /// Forced document format (None = infer from extension)
    pub format: Option<DocumentFormat>,

    /// Separator placed between trail segments when rendered as text
    pub separator: String,

    /// Whether to reject catalogs with structural errors on load
    pub validate: bool,

    /// Maximum nesting depth accepted by validation
    pub max_depth: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            format: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            validate: true,
            max_depth: None,
        }
    }
}

impl ResolverConfig {
    /// Create new config for a catalog path
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            ..Default::default()
        }
    }

    /// Force a document format (builder pattern)
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set trail separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable or disable validation on load (builder pattern)
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set max depth (builder pattern)
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Format to parse the catalog with
    pub fn document_format(&self) -> Result<DocumentFormat, ConfigError> {
        match self.format {
            Some(format) => Ok(format),
            None => DocumentFormat::from_path(&self.catalog_path),
        }
    }

    /// Reject settings that can never produce a usable resolver
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "max depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
