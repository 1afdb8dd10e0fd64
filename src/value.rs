use std::{collections::HashMap, ops, str::FromStr};

use serde_json::Value as Json;

/// A node of a parsed configuration document.
///
/// Documents are read-only once parsed; every resolution in this crate works
/// on borrowed `&Value`s tied to the lifetime of the document root.
///
/// # Number kinds
///
/// Integers that fit `i64` are stored as [`Value::Integer`]. Only positive
/// integers above `i64::MAX` use [`Value::Unsigned`]. Everything else is a
/// [`Value::Float`].
///
/// # Examples
///
/// ```
/// use lorekey::Value;
/// use std::collections::HashMap;
///
/// let mut obj = HashMap::new();
/// obj.insert("gold".to_string(), Value::Integer(250));
/// let doc = Value::Object(obj);
///
/// assert_eq!(doc["gold"], Value::Integer(250));
/// assert!(doc["missing"].is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// JSON null
    #[default]
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Signed integer
    Integer(i64),

    /// Unsigned integer too large for `Integer`
    Unsigned(u64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object with unique string keys
    Object(HashMap<String, Value>),
}

/// The shared "not found" sentinel.
///
/// Every failed lookup hands out a reference to this one instance, so a miss
/// can be recognized by identity with [`Value::is_sentinel`].
pub static NULL: Value = Value::Null;

/// Coarse classification of a [`Value`], used when comparing across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Unsigned(_) => "unsigned",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True only for the shared [`NULL`] instance, not for any other null.
    pub fn is_sentinel(&self) -> bool {
        std::ptr::eq(self, &NULL)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_number(&self) -> bool {
        self.kind() == ValueKind::Number
    }

    /// Check if the value is truthy (for conditions)
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Integer(n) => *n != 0,
            Unsigned(n) => *n != 0,
            Float(n) => *n != 0.0 && !n.is_nan(),
            String(s) => !s.is_empty(),
            Array(arr) => !arr.is_empty(),
            Object(obj) => !obj.is_empty(),
        }
    }

    /// Looks up an object member. Non-objects have no members.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up an array element. Non-arrays have no elements.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 (integers only, no float truncation)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as u64 (non-negative integers only)
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => u64::try_from(*n).ok(),
            Value::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    /// Get any number as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Unsigned(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Renders scalars as plain text; composites fall back to compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Unsigned(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Null => "null".to_string(),
            composite => Json::from(composite.clone()).to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Parses configuration text into a document tree.
impl FromStr for Value {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Json>(text).map(Value::from)
    }
}

impl From<serde_json::Number> for Value {
    fn from(n: serde_json::Number) -> Self {
        n.as_i64()
            .map(Value::Integer)
            .or_else(|| n.as_u64().map(Value::Unsigned))
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or_default()
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => n.into(),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(members) => {
                Value::Object(members.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(b),
            Value::Integer(n) => n.into(),
            Value::Unsigned(n) => n.into(),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(members) => {
                Json::Object(members.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        self.get_index(index).unwrap_or(&NULL)
    }
}
