//! # Daily Catalog
//!
//! The catalog crate - holds every candidate list the daily selector draws from,
//! the category tables that group them, and the small vocabulary shared by requests
//! and prompts. This crate is pure data and does not contain any generation logic.

pub mod candidates;
pub mod config;
pub mod error;
pub mod vocabulary;

pub use candidates::*;
pub use config::*;
pub use error::*;
pub use vocabulary::*;
