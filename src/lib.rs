pub mod accessors;
pub mod cli;
pub mod domain;
pub mod game;
pub mod predicate;
pub mod query;
pub mod value;
pub mod var_or_predicate;
pub mod variable;

pub use domain::Keyword;
pub use game::{Game, GameState, Scope};
pub use predicate::{Operator, Predicate, compare_values, values_equal};
pub use query::{resolve, resolve_key, resolve_key_in, resolve_opt};
pub use value::{NULL, Value, ValueKind};
pub use var_or_predicate::{VarOrPredicate, var_or_predicate_key};
pub use variable::{Variable, variable_key};
