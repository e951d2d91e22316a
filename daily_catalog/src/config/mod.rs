//! Catalog configuration loaded from TOML.
//!
//! ```toml
//! [[categories]]
//! name = "genre"
//! tag = "g"
//! candidates = ["romance", "fantasy"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::candidates::{default_tag, Category, CategoryTable};
use crate::error::CatalogError;

/// One category as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    /// Defaults to the first character of `name`.
    #[serde(default)]
    pub tag: Option<String>,
    pub candidates: Vec<String>,
}

/// The raw, not yet validated catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

impl CatalogConfig {
    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate every category and build the table.
    pub fn into_table(self) -> Result<CategoryTable, CatalogError> {
        let categories = self
            .categories
            .into_iter()
            .map(|c| {
                let tag = c.tag.unwrap_or_else(|| default_tag(&c.name));
                Category::with_tag(c.name, tag, c.candidates)
            })
            .collect::<Result<Vec<_>, _>>()?;

        CategoryTable::from_categories(categories)
    }
}

/// Load and validate a catalog file in one step.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CategoryTable, CatalogError> {
    CatalogConfig::load(path)?.into_table()
}
