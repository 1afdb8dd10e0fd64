use tracing::trace;

use crate::{
    game::Game,
    predicate::Predicate,
    value::Value,
    variable::Variable,
};

/// A slot that may hold either a value or a condition.
///
/// Every configuration field that accepts "a constant or a condition" goes
/// through [`VarOrPredicate::resolve`]: objects with an operator key become
/// predicates, everything else a [`Variable`].
#[derive(Debug, Clone, PartialEq)]
pub enum VarOrPredicate<'a> {
    Variable(Variable<'a>),
    Predicate(Box<Predicate<'a>>),
}

/// Inert slot: a null literal, false as a condition.
impl Default for VarOrPredicate<'_> {
    fn default() -> Self {
        VarOrPredicate::Variable(Variable::default())
    }
}

impl<'a> VarOrPredicate<'a> {
    pub fn resolve(elem: &'a Value) -> Self {
        match Predicate::parse(elem) {
            Some(predicate) => {
                trace!(op = predicate.op.keyword(), "slot holds a predicate");
                VarOrPredicate::Predicate(Box::new(predicate))
            }
            None => VarOrPredicate::Variable(Variable::resolve(elem)),
        }
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, VarOrPredicate::Predicate(_))
    }

    /// Value of the slot. Predicates yield a boolean.
    pub fn evaluate_as_value(&self, game: &dyn Game) -> Value {
        match self {
            VarOrPredicate::Variable(var) => var.evaluate(game),
            VarOrPredicate::Predicate(pred) => Value::Boolean(pred.evaluate(game)),
        }
    }

    /// Truth of the slot. Variables use [`Value::is_truthy`].
    pub fn evaluate_as_bool(&self, game: &dyn Game) -> bool {
        match self {
            VarOrPredicate::Variable(var) => var.evaluate(game).is_truthy(),
            VarOrPredicate::Predicate(pred) => pred.evaluate(game),
        }
    }
}

impl<'a> From<Variable<'a>> for VarOrPredicate<'a> {
    fn from(var: Variable<'a>) -> Self {
        VarOrPredicate::Variable(var)
    }
}

impl<'a> From<Predicate<'a>> for VarOrPredicate<'a> {
    fn from(pred: Predicate<'a>) -> Self {
        VarOrPredicate::Predicate(Box::new(pred))
    }
}

/// Reads `elem[key]` as a [`VarOrPredicate`], or the inert default when absent.
pub fn var_or_predicate_key<'a>(elem: &'a Value, key: &str) -> VarOrPredicate<'a> {
    elem.get(key).map(VarOrPredicate::resolve).unwrap_or_default()
}
