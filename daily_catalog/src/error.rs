//! Catalog construction and loading errors.

use std::io;

use thiserror::Error;

/// Errors raised while building or loading a catalog.
///
/// All of these point at a configuration bug, so callers should fail fast
/// rather than retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("candidate list for category '{category}' is empty")]
    EmptyCandidateList { category: String },

    #[error("candidate '{label}' appears more than once in category '{category}'")]
    DuplicateCandidate { category: String, label: String },

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has an empty name or discriminator tag")]
    BlankCategory(String),

    #[error("catalog config could not be parsed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
