//! # Daily Core
//!
//! The engine behind the daily story feed. This crate reads the candidate lists
//! from `daily_catalog`, picks the elements of the day deterministically, and
//! turns validated requests into prompts and model replies into content.
//!
//! ## Core Components
//!
//! - **selector**: Deterministic per-date, per-category picks with no shared state
//! - **prompts**: System and user prompts for episodes, poems and fortunes
//! - **requests**: Validation of incoming request bodies
//! - **response**: Parsing of model replies into typed content
//! - **generation**: The text-generator seam and the service that ties it all together
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The same date always yields the same elements on every instance
//! - **Injected data**: Candidate lists are passed in, never read from globals
//! - **Fail fast**: Configuration errors surface immediately and are never retried

pub mod config;
pub mod error;
pub mod generation;
pub mod observability;
pub mod prompts;
pub mod requests;
pub mod response;
pub mod selector;

pub use config::*;
pub use error::*;
pub use generation::*;
pub use prompts::*;
pub use requests::*;
pub use response::*;
pub use selector::*;
