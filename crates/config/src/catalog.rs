//! FAQ catalog loading
//!
//! The catalog is plain content: an ordered list of question/answer pairs.
//! A built-in Korean housing-finance catalog ships embedded in the binary;
//! deployments can load their own file instead. The catalog is read once
//! at startup and never mutated.

use std::path::Path;

use housing_agent_core::FaqItem;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::ConfigError;

const BUILTIN_CATALOG_YAML: &str = include_str!("../data/faq.yaml");

static BUILTIN_CATALOG: Lazy<FaqCatalog> = Lazy::new(|| {
    FaqCatalog::from_yaml_str(BUILTIN_CATALOG_YAML).expect("built-in FAQ catalog is valid YAML")
});

/// An ordered, load-time-immutable FAQ catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqCatalog {
    /// Entries in priority order; earlier entries win similarity ties
    pub items: Vec<FaqItem>,
}

impl FaqCatalog {
    /// The embedded default catalog
    pub fn builtin() -> &'static FaqCatalog {
        &BUILTIN_CATALOG
    }

    /// Load a catalog from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        let catalog = Self::from_yaml_str(&content)?;
        debug!(
            path = %path.as_ref().display(),
            entries = catalog.items.len(),
            "loaded FAQ catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Entries in catalog order
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
