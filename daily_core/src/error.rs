//! Error types for the core crate.

use daily_catalog::CatalogError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::generation::GeneratorError;
use crate::requests::RequestError;
use crate::response::ResponseError;

/// The only way a daily pick can fail: there was nothing to pick from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Everything that can go wrong while serving a daily content request.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("text generation failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("model response could not be used: {0}")]
    Response(#[from] ResponseError),
}

impl ServiceError {
    /// Whether the caller sent bad input, as opposed to a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Request(_))
    }
}
