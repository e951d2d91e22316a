//! Service configuration loaded from TOML.
//!
//! ```toml
//! log_level = "info"
//! episode_catalog = "catalogs/episode.toml"
//!
//! [generation.fortune]
//! model = "gpt-4o-mini"
//! temperature = 0.5
//! top_p = 1.0
//! max_tokens = 500
//! frequency_penalty = 0.0
//! presence_penalty = 0.0
//! json_response = true
//! ```
//!
//! Every key is optional; the built-in catalogs and parameters fill the gaps.

use daily_catalog::{CatalogConfig, CatalogError};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::generation::GenerationSettings;
use crate::selector::DailySelector;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// Fallback filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Catalog file replacing the built-in episode lists.
    #[serde(default)]
    pub episode_catalog: Option<PathBuf>,

    /// Catalog file replacing the built-in poetry lists.
    #[serde(default)]
    pub poetry_catalog: Option<PathBuf>,

    #[serde(default)]
    pub generation: GenerationSettings,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            episode_catalog: None,
            poetry_catalog: None,
            generation: GenerationSettings::default(),
        }
    }
}

impl DaybookConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Episode selector from the configured catalog, or the built-in one.
    pub fn episode_selector(&self) -> Result<DailySelector, ConfigError> {
        match &self.episode_catalog {
            Some(path) => Ok(DailySelector::from_config(CatalogConfig::load(path)?)?),
            None => Ok(DailySelector::episode()?),
        }
    }

    /// Poetry selector from the configured catalog, or the built-in one.
    pub fn poetry_selector(&self) -> Result<DailySelector, ConfigError> {
        match &self.poetry_catalog {
            Some(path) => Ok(DailySelector::from_config(CatalogConfig::load(path)?)?),
            None => Ok(DailySelector::poetry()?),
        }
    }
}
