//! Evaluate a value-or-condition slot against a saved game state

use tracing::debug;

use super::CliError;
use crate::{GameState, Value, VarOrPredicate};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The slot, as JSON text
    pub expr: String,
    /// Game state, as JSON text. Without one every state lookup is unset.
    pub state: Option<String>,
    /// Report truthiness instead of the value
    pub as_bool: bool,
}

/// Result of an eval operation
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutput {
    Value(serde_json::Value),
    Bool(bool),
}

/// Execute an eval operation
pub fn execute_eval(options: &EvalOptions) -> Result<EvalOutput, CliError> {
    let expr: Value = options.expr.parse()?;
    let game = match &options.state {
        Some(text) => GameState::from_json(text)?,
        None => GameState::new(),
    };

    let slot = VarOrPredicate::resolve(&expr);
    debug!(predicate = slot.is_predicate(), "evaluating slot");

    if options.as_bool {
        Ok(EvalOutput::Bool(slot.evaluate_as_bool(&game)))
    } else {
        Ok(EvalOutput::Value(slot.evaluate_as_value(&game).into()))
    }
}
