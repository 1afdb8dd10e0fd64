//! Query resolution over configuration documents.
//!
//! A *query* is an ordinary [`Value`] read as an instruction. Objects that
//! carry a directive key describe how to descend into a data node; anything
//! else is a literal and resolves to itself.
//!
//! ## Directives
//!
//! | key    | argument                                             |
//! |--------|------------------------------------------------------|
//! | `key`  | one segment: member name, or array index             |
//! | `path` | array of segments, or a `.`-separated string         |
//!
//! A directive object may also carry:
//!
//! - `query` - resolved against the node the directive descended to
//! - `default` - resolved against the original node when descent or the
//!   nested `query` misses
//!
//! ```text
//! data:  {"player": {"name": "Aldric", "gold": 40}}
//! query: {"key": "player", "query": {"key": "gold"}}   => 40
//! query: {"path": "player.name"}                       => "Aldric"
//! query: {"key": "mana", "default": 0}                 => 0
//! query: {"key": "player", "query": {"key": "mana"}, "default": 0}  => 0
//! query: {"key": "mana"}                               => NULL
//! ```

use tracing::trace;

use crate::value::{NULL, Value};

/// Sub-key holding a query applied to the descended node.
pub const NESTED_QUERY_KEY: &str = "query";

/// Sub-key holding the fallback used when descent misses.
pub const DEFAULT_KEY: &str = "default";

type Descend = for<'a> fn(&'a Value, &Value) -> Option<&'a Value>;

/// Directive keys in the order they are checked. First match wins.
const DIRECTIVES: &[(&str, Descend)] = &[
    ("key", descend_key as Descend),
    ("path", descend_path as Descend),
];

fn find_directive(query: &Value) -> Option<(&'static str, Descend, &Value)> {
    let Value::Object(map) = query else {
        return None;
    };
    DIRECTIVES
        .iter()
        .find_map(|(name, descend)| map.get(*name).map(|arg| (*name, *descend, arg)))
}

/// Returns true when `query` carries a recognized directive key.
pub fn is_query(query: &Value) -> bool {
    find_directive(query).is_some()
}

/// Resolves `query` against the data node `elem`.
///
/// Literals and objects without a directive come back unchanged. A miss,
/// whether in descent or in the nested query, falls back to `default`, and
/// without one yields the shared [`NULL`] sentinel.
pub fn resolve<'a>(elem: &'a Value, query: &'a Value) -> &'a Value {
    let Some((directive, descend, arg)) = find_directive(query) else {
        return query;
    };

    let found = match (descend(elem, arg), query.get(NESTED_QUERY_KEY)) {
        (Some(node), Some(nested)) => resolve(node, nested),
        (Some(node), None) => node,
        (None, _) => &NULL,
    };
    if !found.is_sentinel() {
        return found;
    }

    trace!(directive, "query missed");
    match query.get(DEFAULT_KEY) {
        Some(default) => resolve(elem, default),
        None => &NULL,
    }
}

/// Resolves `query` when a data node may be absent.
///
/// Without a data node there is nothing to descend into, so the query is
/// returned as written. This is what listing and static inspection see.
pub fn resolve_opt<'a>(elem: Option<&'a Value>, query: &'a Value) -> &'a Value {
    match elem {
        Some(elem) => resolve(elem, query),
        None => query,
    }
}

/// Looks up `query[key]` and resolves it against an optional data node.
///
/// Returns [`NULL`] when `query` has no member `key`.
pub fn resolve_key<'a>(elem: Option<&'a Value>, query: &'a Value, key: &str) -> &'a Value {
    match query.get(key) {
        Some(field) => resolve_opt(elem, field),
        None => &NULL,
    }
}

/// Looks up `query[key]` and resolves it against a live data node.
pub fn resolve_key_in<'a>(elem: &'a Value, query: &'a Value, key: &str) -> &'a Value {
    resolve_key(Some(elem), query, key)
}

fn descend_key<'a>(elem: &'a Value, segment: &Value) -> Option<&'a Value> {
    descend_segment(elem, segment)
}

fn descend_path<'a>(elem: &'a Value, path: &Value) -> Option<&'a Value> {
    match path {
        Value::Array(segments) => segments
            .iter()
            .try_fold(elem, |node, segment| descend_segment(node, segment)),
        Value::String(s) if s.is_empty() => Some(elem),
        Value::String(s) => s
            .split('.')
            .try_fold(elem, |node, segment| descend_name(node, segment)),
        _ => None,
    }
}

fn descend_segment<'a>(elem: &'a Value, segment: &Value) -> Option<&'a Value> {
    match segment {
        Value::String(name) => descend_name(elem, name),
        Value::Integer(_) | Value::Unsigned(_) => match elem {
            Value::Array(arr) => segment
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| arr.get(i)),
            // Integer segments on objects address the member spelled that way
            Value::Object(map) => map.get(&segment.to_text()),
            _ => None,
        },
        _ => None,
    }
}

fn descend_name<'a>(elem: &'a Value, name: &str) -> Option<&'a Value> {
    match elem {
        Value::Object(map) => map.get(name),
        Value::Array(arr) => name.parse::<usize>().ok().and_then(|i| arr.get(i)),
        _ => None,
    }
}
