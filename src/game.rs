//! The game-state boundary consulted by variables and predicates.
//!
//! The engine only ever reads through [`Game`]. Nothing here inserts state,
//! so looking up an unset name leaves the store exactly as it was.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{domain::Keyword, value::Value};

/// Which state store a variable refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Boolean save flags
    Flag,
    /// Integer counters (gold, kills, ...)
    Counter,
    /// Quest stages
    Quest,
    /// Free-form text values
    Text,
}

impl Scope {
    pub const ALL: [Scope; 4] = [Scope::Flag, Scope::Counter, Scope::Quest, Scope::Text];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Counter => "counter",
            Self::Quest => "quest",
            Self::Text => "text",
        }
    }

    /// Value reported for a name that was never set.
    pub fn default_value(self) -> Value {
        match self {
            Self::Flag => Value::Boolean(false),
            Self::Counter | Self::Quest => Value::Integer(0),
            Self::Text => Value::String(String::new()),
        }
    }
}

impl Keyword for Scope {
    fn from_keyword(s: &str) -> Option<Self> {
        Scope::ALL.into_iter().find(|scope| scope.keyword() == s)
    }
}

/// Read-only view of live game state.
pub trait Game {
    /// Current value of `name` in `scope`, or `None` when unset.
    fn lookup(&self, scope: Scope, name: &str) -> Option<Value>;

    /// Whether `item` is held, optionally restricted to one named inventory.
    fn has_item(&self, item: &str, inventory: Option<&str>) -> bool;

    fn has_flag(&self, name: &str) -> bool {
        self.lookup(Scope::Flag, name)
            .is_some_and(|v| v.is_truthy())
    }
}

/// In-memory state store, loadable from a JSON save file.
///
/// ```json
/// {
///   "flags": {"metCain": true},
///   "counters": {"gold": 120},
///   "quests": {"butcher": 2},
///   "text": {"playerName": "Aidan"},
///   "inventories": {"belt": ["potion"], "body": ["shortSword"]}
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub flags: HashMap<String, bool>,
    pub counters: HashMap<String, i64>,
    pub quests: HashMap<String, i64>,
    pub text: HashMap<String, String>,
    pub inventories: HashMap<String, Vec<String>>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    pub fn set_counter(&mut self, name: &str, value: i64) {
        self.counters.insert(name.to_string(), value);
    }

    pub fn set_quest(&mut self, name: &str, stage: i64) {
        self.quests.insert(name.to_string(), stage);
    }

    pub fn set_text(&mut self, name: &str, value: &str) {
        self.text.insert(name.to_string(), value.to_string());
    }

    pub fn add_item(&mut self, inventory: &str, item: &str) {
        self.inventories
            .entry(inventory.to_string())
            .or_default()
            .push(item.to_string());
    }
}

impl Game for GameState {
    fn lookup(&self, scope: Scope, name: &str) -> Option<Value> {
        match scope {
            Scope::Flag => self.flags.get(name).map(|b| Value::Boolean(*b)),
            Scope::Counter => self.counters.get(name).map(|n| Value::Integer(*n)),
            Scope::Quest => self.quests.get(name).map(|n| Value::Integer(*n)),
            Scope::Text => self.text.get(name).map(|s| Value::String(s.clone())),
        }
    }

    fn has_item(&self, item: &str, inventory: Option<&str>) -> bool {
        match inventory {
            Some(inv) => self
                .inventories
                .get(inv)
                .is_some_and(|items| items.iter().any(|i| i == item)),
            None => self
                .inventories
                .values()
                .any(|items| items.iter().any(|i| i == item)),
        }
    }

    fn has_flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
