//! Boolean conditions authored as configuration.
//!
//! A predicate is an object with one operator key whose value lists the
//! operands. Operands are themselves [`VarOrPredicate`]s, so conditions nest:
//!
//! ```text
//! {"and": [{"hasFlag": "metCain"}, {"greaterOrEqual": [{"counter": "gold"}, 100]}]}
//! {"not": {"hasItem": ["horadricCube", "stash"]}}
//! {"matches": [{"text": "playerName"}, "^A"]}
//! ```
//!
//! A non-array operator value is a single operand.
//!
//! Evaluation never fails. Wrong arity or operands of the wrong kind give the
//! operator's neutral result: `true` for an empty `and`, `false` otherwise.

use std::cmp::Ordering;

use regex::Regex;
use tracing::debug;

use crate::{
    game::Game,
    value::Value,
    var_or_predicate::VarOrPredicate,
};

/// Predicate operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Logical
    /// All operands true, left to right, stops at the first false
    And,
    /// Any operand true, left to right, stops at the first true
    Or,
    /// Negation of a single operand
    Not,

    // Comparison
    Equals,
    NotEquals,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,

    // Game state
    /// `[item]` or `[item, inventory]`
    HasItem,
    /// `[flagName]`
    HasFlag,
    /// `[value, pattern]`, regular expression match on strings
    Matches,
}

/// Operator keys in the order they are checked. First match wins.
const OPERATORS: &[(&str, Operator)] = &[
    ("and", Operator::And),
    ("or", Operator::Or),
    ("not", Operator::Not),
    ("equals", Operator::Equals),
    ("notEquals", Operator::NotEquals),
    ("lessThan", Operator::LessThan),
    ("lessOrEqual", Operator::LessOrEqual),
    ("greaterThan", Operator::GreaterThan),
    ("greaterOrEqual", Operator::GreaterOrEqual),
    ("hasItem", Operator::HasItem),
    ("hasFlag", Operator::HasFlag),
    ("matches", Operator::Matches),
];

impl Operator {
    pub fn from_keyword(s: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(key, _)| *key == s)
            .map(|(_, op)| *op)
    }

    pub fn keyword(self) -> &'static str {
        OPERATORS
            .iter()
            .find(|(_, op)| *op == self)
            .map(|(key, _)| *key)
            .unwrap_or("?")
    }

    pub fn keywords() -> impl Iterator<Item = &'static str> {
        OPERATORS.iter().map(|(key, _)| *key)
    }
}

/// Finds the operator key of `elem`, if it has one.
pub fn find_operator(elem: &Value) -> Option<(Operator, &Value)> {
    let Value::Object(map) = elem else {
        return None;
    };
    OPERATORS
        .iter()
        .find_map(|(key, op)| map.get(*key).map(|args| (*op, args)))
}

/// A parsed condition. Borrows its literals from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<'a> {
    pub op: Operator,
    pub operands: Vec<VarOrPredicate<'a>>,
}

/// The predicate of an element with no operator: an empty `or`, always false.
impl Default for Predicate<'_> {
    fn default() -> Self {
        Predicate {
            op: Operator::Or,
            operands: Vec::new(),
        }
    }
}

impl<'a> Predicate<'a> {
    /// Parses `elem` as a predicate, or `None` when it has no operator key.
    pub fn parse(elem: &'a Value) -> Option<Self> {
        let (op, args) = find_operator(elem)?;
        let operands = match args {
            Value::Array(items) => items.iter().map(VarOrPredicate::resolve).collect(),
            single => vec![VarOrPredicate::resolve(single)],
        };
        Some(Predicate { op, operands })
    }

    /// Like [`Predicate::parse`], but an element without an operator becomes
    /// the always-false default.
    pub fn resolve(elem: &'a Value) -> Self {
        Self::parse(elem).unwrap_or_default()
    }

    pub fn evaluate(&self, game: &dyn Game) -> bool {
        let operands = self.operands.as_slice();
        match self.op {
            Operator::And => operands.iter().all(|o| o.evaluate_as_bool(game)),
            Operator::Or => operands.iter().any(|o| o.evaluate_as_bool(game)),
            Operator::Not => match operands {
                [operand] => !operand.evaluate_as_bool(game),
                _ => self.malformed(),
            },
            Operator::Equals => self.compare(game, |ord| ord == Some(Ordering::Equal)),
            Operator::NotEquals => self.compare(game, |ord| ord != Some(Ordering::Equal)),
            Operator::LessThan => self.compare(game, |ord| ord == Some(Ordering::Less)),
            Operator::LessOrEqual => self.compare(game, |ord| {
                matches!(ord, Some(Ordering::Less | Ordering::Equal))
            }),
            Operator::GreaterThan => self.compare(game, |ord| ord == Some(Ordering::Greater)),
            Operator::GreaterOrEqual => self.compare(game, |ord| {
                matches!(ord, Some(Ordering::Greater | Ordering::Equal))
            }),
            Operator::HasItem => self.has_item(game),
            Operator::HasFlag => match operands {
                [name] => match name.evaluate_as_value(game) {
                    Value::String(name) => game.has_flag(&name),
                    _ => false,
                },
                _ => self.malformed(),
            },
            Operator::Matches => self.matches(game),
        }
    }

    fn compare(&self, game: &dyn Game, accept: impl Fn(Option<Ordering>) -> bool) -> bool {
        match self.operands.as_slice() {
            [left, right] => {
                let left = left.evaluate_as_value(game);
                let right = right.evaluate_as_value(game);
                accept(compare_values(&left, &right))
            }
            _ => self.malformed(),
        }
    }

    fn has_item(&self, game: &dyn Game) -> bool {
        let (item, inventory) = match self.operands.as_slice() {
            [item] => (item.evaluate_as_value(game), None),
            [item, inventory] => (item.evaluate_as_value(game), Some(inventory.evaluate_as_value(game))),
            _ => return self.malformed(),
        };
        let Value::String(item) = item else {
            return false;
        };
        match inventory {
            None => game.has_item(&item, None),
            Some(Value::String(inventory)) => game.has_item(&item, Some(&inventory)),
            Some(_) => false,
        }
    }

    fn matches(&self, game: &dyn Game) -> bool {
        let [subject, pattern] = self.operands.as_slice() else {
            return self.malformed();
        };
        let (Value::String(subject), Value::String(pattern)) =
            (subject.evaluate_as_value(game), pattern.evaluate_as_value(game))
        else {
            return false;
        };
        match Regex::new(&pattern) {
            Ok(re) => re.is_match(&subject),
            Err(e) => {
                debug!(%pattern, error = %e, "invalid pattern in predicate");
                false
            }
        }
    }

    fn malformed(&self) -> bool {
        debug!(
            op = self.op.keyword(),
            arity = self.operands.len(),
            "predicate has wrong number of operands"
        );
        false
    }
}

/// Orders two values, or `None` when they cannot be ordered.
///
/// Numbers compare by value whatever their representation; strings compare
/// bytewise; `false < true`. Arrays and objects are only ever equal or
/// unordered, and their members compare by these same rules. Values of
/// different kinds are unordered, never equal.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Boolean(x), Value::Boolean(y)) => Some(x.cmp(y)),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Array(x), Value::Array(y)) => {
            let same = x.len() == y.len() && x.iter().zip(y).all(|(x, y)| values_equal(x, y));
            same.then_some(Ordering::Equal)
        }
        (Value::Object(x), Value::Object(y)) => {
            let same = x.len() == y.len()
                && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)));
            same.then_some(Ordering::Equal)
        }
        _ if a.is_number() && b.is_number() => compare_numbers(a, b),
        _ => None,
    }
}

/// Structural equality with numeric kinds unified.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    compare_values(a, b) == Some(Ordering::Equal)
}

fn compare_numbers(a: &Value, b: &Value) -> Option<Ordering> {
    match (wide_int(a), wide_int(b)) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        (Some(x), None) => compare_int_float(x, b.as_f64()?),
        (None, Some(y)) => compare_int_float(y, a.as_f64()?).map(Ordering::reverse),
        (None, None) => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

fn wide_int(v: &Value) -> Option<i128> {
    match v {
        Value::Integer(n) => Some(i128::from(*n)),
        Value::Unsigned(n) => Some(i128::from(*n)),
        _ => None,
    }
}

/// 2^127: the first float above every `i128`.
const I128_BOUND: f64 = i128::MAX as f64;

/// Orders an integer against a float without rounding either one.
fn compare_int_float(n: i128, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    let floor = f.floor();
    if floor >= I128_BOUND {
        return Some(Ordering::Less);
    }
    if floor < -I128_BOUND {
        return Some(Ordering::Greater);
    }
    // floor is integral and in range, so the cast is exact
    match n.cmp(&(floor as i128)) {
        Ordering::Equal if f > floor => Some(Ordering::Less),
        ord => Some(ord),
    }
}
