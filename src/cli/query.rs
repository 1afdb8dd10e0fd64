//! Resolve a query against an optional JSON document

use tracing::debug;

use super::CliError;
use crate::{Value, query};

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// The query, as JSON text
    pub query: String,
    /// The data document, as JSON text. Without one the query is listed as written.
    pub input: Option<String>,
}

/// Execute a query operation
pub fn execute_query(options: &QueryOptions) -> Result<serde_json::Value, CliError> {
    let query: Value = options.query.parse()?;
    let document = options.input.as_deref().map(str::parse::<Value>).transpose()?;

    debug!(
        directive = query::is_query(&query),
        has_document = document.is_some(),
        "resolving query"
    );
    let result = query::resolve_opt(document.as_ref(), &query);

    Ok(result.clone().into())
}
