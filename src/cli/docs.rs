//! Documentation content for the lorekey CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Directives,
    Variables,
    Operators,
    Truthiness,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "directives" | "directive" | "queries" | "query" => Some(Self::Directives),
            "variables" | "variable" | "vars" | "state" => Some(Self::Variables),
            "operators" | "ops" | "predicates" => Some(Self::Operators),
            "truthiness" | "truth" | "bool" => Some(Self::Truthiness),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"LOREKEY DOCUMENTATION

lorekey resolves data-driven expressions written inside JSON configuration:
queries that pick values out of a document, variables that read game state,
and predicates that test it.

DOCUMENTATION CATEGORIES

  directives        Query objects: key, path, query, default
  variables         Literals and state references (flag, counter, quest, text)
  operators         Predicate operators and their neutral results
  truthiness        How values turn into true/false

QUICK REFERENCE

  {"key": "gold"}                         Member of the data node
  {"path": "player.stats.str"}            Nested member
  {"counter": "gold"}                     Game state reference
  {"and": [..], "or": [..], "not": ..}    Conditions

Run 'lorekey doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Directives) => Ok(DIRECTIVES_DOC),
        Some(DocCategory::Variables) => Ok(VARIABLES_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Truthiness) => Ok(TRUTHINESS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const DIRECTIVES_DOC: &str = r#"DIRECTIVES - Query Objects

A query is any JSON value. Values that are not objects, and objects without
a directive key, resolve to themselves.

KEY
  {"key": "segment"}
    Member of the data node. On arrays a decimal segment is an index.

    Example:
      Data:   {"a": 42}
      Query:  {"key": "a"}
      Output: 42

PATH
  {"path": ["a", "b", 0]}
  {"path": "a.b.0"}
    Descend one segment at a time. An empty path is the data node itself.

NESTED QUERY
  {"key": "player", "query": {"key": "gold"}}
    Resolve "query" against the node the directive reached.

DEFAULT
  {"key": "mana", "default": 0}
    Used when descent or the nested query misses. Resolved against the
    original data node, so it may itself be a query.

MISSING VALUES
  A miss without a default resolves to null. A missing member and a member
  that is explicitly null are indistinguishable.

WITHOUT A DOCUMENT
  lorekey query '{"key": "a"}'
    With no data node the query is printed as written.
"#;

const VARIABLES_DOC: &str = r#"VARIABLES - Literals and State References

LITERALS
  Strings, numbers, booleans, null, arrays, and objects without a reference
  key are constants.

STATE REFERENCES
  {"flag": "metCain"}       Save flag        unset: false
  {"counter": "gold"}       Counter          unset: 0
  {"quest": "butcher"}      Quest stage      unset: 0
  {"text": "playerName"}    Text value       unset: ""

  {"var": "gold", "scope": "counter"}
    Generic form. "scope" defaults to counter.

  A reference whose name is not a string is treated as a literal.
  Reading an unset name never creates it.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Predicates

A predicate is an object with one operator key. Its value is the operand
list; a non-array value is a single operand. Operands may be literals,
state references, or nested predicates.

LOGICAL
  {"and": [a, b, ...]}      Left to right, stops at first false. Empty: true
  {"or":  [a, b, ...]}      Left to right, stops at first true.  Empty: false
  {"not": a}                Exactly one operand

COMPARISON (exactly two operands)
  equals  notEquals  lessThan  lessOrEqual  greaterThan  greaterOrEqual

  Numbers compare by value (1 equals 1.0). Strings compare bytewise.
  false < true. Arrays and objects are only equal or unordered; their
  members compare by value too, so [1] equals [1.0].
  Values of different kinds are never equal and never ordered.

GAME STATE
  {"hasItem": ["potion"]}             Held in any inventory
  {"hasItem": ["potion", "belt"]}     Held in the named inventory
  {"hasFlag": "metCain"}              Flag is set

TEXT
  {"matches": [value, "^pattern$"]}   Regular expression on strings

MALFORMED
  Wrong operand counts, wrong operand kinds and invalid patterns give false.
"#;

const TRUTHINESS_DOC: &str = r#"TRUTHINESS - Values as Conditions

  null                  false
  true / false          itself
  numbers               true when nonzero
  strings               true when non-empty
  arrays, objects       true when non-empty

  A predicate used as a value is the boolean true or false.

  Example:
    lorekey eval '"5"' --bool
    true
"#;
