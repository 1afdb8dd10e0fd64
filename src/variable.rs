use tracing::trace;

use crate::{
    domain::Keyword,
    game::{Game, Scope},
    value::{NULL, Value},
};

/// Key of the generic state reference: `{"var": "gold", "scope": "counter"}`.
pub const VAR_KEY: &str = "var";
pub const SCOPE_KEY: &str = "scope";

/// A configuration slot holding either a constant or a reference to game state.
///
/// State references name one of the [`Scope`] stores:
///
/// ```text
/// 5                                  literal
/// "north"                            literal
/// {"flag": "metCain"}                flag store
/// {"counter": "gold"}                counter store
/// {"quest": "butcher"}               quest stage
/// {"text": "playerName"}             text store
/// {"var": "gold", "scope": "counter"}
/// ```
///
/// Anything else, including objects without a reference key, is a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variable<'a> {
    Literal(&'a Value),
    StateRef { scope: Scope, name: &'a str },
}

impl Default for Variable<'_> {
    fn default() -> Self {
        Variable::Literal(&NULL)
    }
}

impl<'a> Variable<'a> {
    pub fn resolve(elem: &'a Value) -> Self {
        match state_ref(elem) {
            Some((scope, name)) => Variable::StateRef { scope, name },
            None => Variable::Literal(elem),
        }
    }

    pub fn is_state_ref(&self) -> bool {
        matches!(self, Variable::StateRef { .. })
    }

    /// Produces the current value. Unset state yields the scope's default.
    pub fn evaluate(&self, game: &dyn Game) -> Value {
        match *self {
            Variable::Literal(value) => value.clone(),
            Variable::StateRef { scope, name } => match game.lookup(scope, name) {
                Some(value) => value,
                None => {
                    trace!(scope = scope.keyword(), name, "unset state, using default");
                    scope.default_value()
                }
            },
        }
    }
}

fn state_ref(elem: &Value) -> Option<(Scope, &str)> {
    if !elem.is_object() {
        return None;
    }
    for scope in Scope::ALL {
        if let Some(name) = elem.get(scope.keyword()) {
            return name.as_str().map(|name| (scope, name));
        }
    }
    let name = elem.get(VAR_KEY)?.as_str()?;
    let scope = match elem.get(SCOPE_KEY) {
        Some(scope) => Scope::from_keyword(scope.as_str()?)?,
        None => Scope::Counter,
    };
    Some((scope, name))
}

/// Reads `elem[key]` as a [`Variable`], or the inert default when absent.
pub fn variable_key<'a>(elem: &'a Value, key: &str) -> Variable<'a> {
    elem.get(key).map(Variable::resolve).unwrap_or_default()
}
