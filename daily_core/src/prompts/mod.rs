//! Prompt assembly for the three kinds of daily content.
//!
//! Each kind has:
//! - **System prompt**: Role, language, target length and the JSON shape to return
//! - **User prompt**: The request inputs and the elements of the day

mod episode;
mod fortune;
mod poetry;

pub use episode::*;
pub use fortune::*;
pub use poetry::*;

use serde::{Deserialize, Serialize};

/// A system prompt and the user prompt that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Render `- label: value` bullet lines, indented by `indent` spaces.
fn bullet_lines(fields: &[(&str, &str)], indent: usize) -> String {
    let pad = " ".repeat(indent);
    fields
        .iter()
        .map(|(label, value)| format!("{}- {}: {}\n", pad, label, value))
        .collect()
}
