//! CLI support for lorekey
//!
//! Provides programmatic access to the `lorekey` commands so tools can embed
//! them without going through a process boundary.

mod docs;
mod eval;
mod query;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use eval::{EvalOptions, EvalOutput, execute_eval};
pub use query::{QueryOptions, execute_query};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'lorekey docs' to see available categories.")]
    UnknownCategory(String),
}
