//! Typed extraction of leaf values with a fallback.
//!
//! `get_*_val` reads a node; `get_*_key` reads member `key` of an object.
//! None of them fail: a missing member or a value of the wrong type gives
//! back the caller's default.
//!
//! Integer accessors are exact. `get_int_key` only accepts integers that fit
//! an `i32`, `get_uint_key` only non-negative ones that fit a `u32`, and
//! floats are never truncated into integers.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;

use crate::{domain::Keyword, value::Value};

/// Integer rectangle: `[left, top, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Float rectangle: `[left, top, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

static COLOR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})?$").ok());

// [[h:]m:]s[.fff]
static TIME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:(?:(\d+):)?(\d+):)?(\d+)(?:\.(\d{1,3}))?$").ok());

// ========================================
// Primitive values
// ========================================

pub fn get_bool_val(v: &Value, val: bool) -> bool {
    v.as_bool().unwrap_or(val)
}

pub fn get_int_val(v: &Value, val: i32) -> i32 {
    v.as_i64().and_then(|n| i32::try_from(n).ok()).unwrap_or(val)
}

pub fn get_uint_val(v: &Value, val: u32) -> u32 {
    v.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(val)
}

pub fn get_int64_val(v: &Value, val: i64) -> i64 {
    v.as_i64().unwrap_or(val)
}

pub fn get_uint64_val(v: &Value, val: u64) -> u64 {
    v.as_u64().unwrap_or(val)
}

/// Only floating-point numbers qualify; integers fall back to `val`.
pub fn get_double_val(v: &Value, val: f64) -> f64 {
    match v {
        Value::Float(n) => *n,
        _ => val,
    }
}

/// Like [`get_double_val`], and floats outside the finite `f32` range also
/// fall back to `val`.
pub fn get_float_val(v: &Value, val: f32) -> f32 {
    match v {
        Value::Float(n) if n.is_finite() && n.abs() <= f64::from(f32::MAX) => *n as f32,
        _ => val,
    }
}

pub fn get_string_val(v: &Value, val: &str) -> String {
    get_string_view_val(v, val).to_string()
}

pub fn get_string_view_val<'a>(v: &'a Value, val: &'a str) -> &'a str {
    v.as_str().unwrap_or(val)
}

pub fn get_bool_key(elem: &Value, key: &str, val: bool) -> bool {
    elem.get(key).map_or(val, |v| get_bool_val(v, val))
}

pub fn get_int_key(elem: &Value, key: &str, val: i32) -> i32 {
    elem.get(key).map_or(val, |v| get_int_val(v, val))
}

pub fn get_uint_key(elem: &Value, key: &str, val: u32) -> u32 {
    elem.get(key).map_or(val, |v| get_uint_val(v, val))
}

pub fn get_int64_key(elem: &Value, key: &str, val: i64) -> i64 {
    elem.get(key).map_or(val, |v| get_int64_val(v, val))
}

pub fn get_uint64_key(elem: &Value, key: &str, val: u64) -> u64 {
    elem.get(key).map_or(val, |v| get_uint64_val(v, val))
}

pub fn get_double_key(elem: &Value, key: &str, val: f64) -> f64 {
    elem.get(key).map_or(val, |v| get_double_val(v, val))
}

pub fn get_float_key(elem: &Value, key: &str, val: f32) -> f32 {
    elem.get(key).map_or(val, |v| get_float_val(v, val))
}

pub fn get_string_key(elem: &Value, key: &str, val: &str) -> String {
    get_string_view_key(elem, key, val).to_string()
}

pub fn get_string_view_key<'a>(elem: &'a Value, key: &str, val: &'a str) -> &'a str {
    elem.get(key).map_or(val, |v| get_string_view_val(v, val))
}

/// An array gives one string per element (non-strings are rendered as
/// text), a single string gives itself, anything else nothing.
pub fn get_string_vector_key(elem: &Value, key: &str) -> Vec<String> {
    match elem.get(key) {
        Some(Value::Array(items)) => items.iter().map(Value::to_text).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

// ========================================
// Composite values
// ========================================

/// `[start, stop]`, or a single `n` meaning `(n, n)`.
pub fn get_frames_val(v: &Value, val: (u32, u32)) -> (u32, u32) {
    match v {
        Value::Array(items) => match items.as_slice() {
            [start, stop] => match (u32_of(start), u32_of(stop)) {
                (Some(start), Some(stop)) => (start, stop),
                _ => val,
            },
            _ => val,
        },
        single => u32_of(single).map_or(val, |n| (n, n)),
    }
}

pub fn get_int_rect_val(v: &Value, val: IntRect) -> IntRect {
    let Some([left, top, width, height]) = v.as_array().and_then(|a| <&[Value; 4]>::try_from(a).ok())
    else {
        return val;
    };
    match (i32_of(left), i32_of(top), i32_of(width), i32_of(height)) {
        (Some(left), Some(top), Some(width), Some(height)) => IntRect { left, top, width, height },
        _ => val,
    }
}

pub fn get_float_rect_val(v: &Value, val: FloatRect) -> FloatRect {
    let Some([left, top, width, height]) = v.as_array().and_then(|a| <&[Value; 4]>::try_from(a).ok())
    else {
        return val;
    };
    match (left.as_f64(), top.as_f64(), width.as_f64(), height.as_f64()) {
        (Some(left), Some(top), Some(width), Some(height)) => FloatRect {
            left: left as f32,
            top: top as f32,
            width: width as f32,
            height: height as f32,
        },
        _ => val,
    }
}

/// `"#RRGGBB"`, `"#RRGGBBAA"`, `[r, g, b]` or `[r, g, b, a]`.
pub fn get_color_val(v: &Value, val: Color) -> Color {
    match v {
        Value::String(s) => parse_hex_color(s).unwrap_or(val),
        Value::Array(items) => {
            let channels: Option<Vec<u8>> = items.iter().map(u8_of).collect();
            match channels.as_deref() {
                Some(&[r, g, b]) => Color::rgba(r, g, b, 255),
                Some(&[r, g, b, a]) => Color::rgba(r, g, b, a),
                _ => val,
            }
        }
        _ => val,
    }
}

/// Integer milliseconds, or `"[[h:]m:]s[.fff]"`.
pub fn get_time_val(v: &Value, val: Duration) -> Duration {
    match v {
        Value::String(s) => parse_time(s).unwrap_or(val),
        _ => v.as_u64().map_or(val, Duration::from_millis),
    }
}

/// A keyword string naming a `T`; unknown keywords fall back to `val`.
pub fn get_keyword_val<T: Keyword>(v: &Value, val: T) -> T {
    v.as_str().and_then(T::from_keyword).unwrap_or(val)
}

pub fn get_frames_key(elem: &Value, key: &str, val: (u32, u32)) -> (u32, u32) {
    elem.get(key).map_or(val, |v| get_frames_val(v, val))
}

pub fn get_int_rect_key(elem: &Value, key: &str, val: IntRect) -> IntRect {
    elem.get(key).map_or(val, |v| get_int_rect_val(v, val))
}

pub fn get_float_rect_key(elem: &Value, key: &str, val: FloatRect) -> FloatRect {
    elem.get(key).map_or(val, |v| get_float_rect_val(v, val))
}

pub fn get_color_key(elem: &Value, key: &str, val: Color) -> Color {
    elem.get(key).map_or(val, |v| get_color_val(v, val))
}

pub fn get_time_key(elem: &Value, key: &str, val: Duration) -> Duration {
    elem.get(key).map_or(val, |v| get_time_val(v, val))
}

pub fn get_keyword_key<T: Keyword>(elem: &Value, key: &str, val: T) -> T {
    elem.get(key).map_or(val, |v| get_keyword_val(v, val))
}

fn i32_of(v: &Value) -> Option<i32> {
    v.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn u32_of(v: &Value) -> Option<u32> {
    v.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn u8_of(v: &Value) -> Option<u8> {
    v.as_u64().and_then(|n| u8::try_from(n).ok())
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let caps = (*COLOR_PATTERN).as_ref()?.captures(s)?;
    let channel = |i: usize| caps.get(i).and_then(|m| u8::from_str_radix(m.as_str(), 16).ok());
    Some(Color::rgba(
        channel(1)?,
        channel(2)?,
        channel(3)?,
        channel(4).unwrap_or(255),
    ))
}

fn parse_time(s: &str) -> Option<Duration> {
    let caps = (*TIME_PATTERN).as_ref()?.captures(s)?;
    let part = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let (hours, minutes, seconds) = (part(1)?, part(2)?, part(3)?);
    // ".5" is half a second, not five milliseconds
    let millis = match caps.get(4) {
        Some(m) => {
            let digits = m.as_str();
            let n: u64 = digits.parse().ok()?;
            n * 10u64.pow(3 - digits.len() as u32)
        }
        None => 0,
    };
    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    Some(Duration::from_secs(total) + Duration::from_millis(millis))
}
