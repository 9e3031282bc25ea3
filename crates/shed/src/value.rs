//! Value types flowing in and out of the resolver.
//!
//! [`CssValue`] is what a theme stores and what a resolved style holds: either
//! a piece of CSS text (`"1.125rem"`, `"flex-start"`) or a bare number (`0`,
//! `400`). Numbers print the way a browser would print them, so `1.0` is `1`,
//! `0.5` is `0.5` and `2^-20` is `9.5367431640625e-7`. Serialized, whole
//! numbers are JSON integers.
//!
//! Shorthand props arrive as [`serde_json::Value`]s. Only strings and numbers
//! are meaningful; falsy values (`null`, `false`, `""`, `0`) are no-ops and
//! anything else is rejected with [`ResolveError::InvalidValue`].

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ResolveError, Result};

/// A resolved CSS value: text or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A bare number, e.g. the `0` of `z0` or a raw `fontWeight`.
    Number(f64),
    /// CSS text, e.g. `"1.125rem"` or `"center"`.
    Text(String),
}

impl CssValue {
    /// Returns the text, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }

    /// Returns the number, if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }

    /// Returns `false` for empty text, zero and NaN.
    pub fn is_truthy(&self) -> bool {
        match self {
            CssValue::Text(s) => !s.is_empty(),
            CssValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }
}

/// Largest magnitude at which every whole `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CssValue::Text(s) => serializer.serialize_str(s),
            CssValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            CssValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Text(s) => f.write_str(s),
            CssValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        CssValue::Text(s)
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<i32> for CssValue {
    fn from(n: i32) -> Self {
        CssValue::Number(n as f64)
    }
}

impl From<u32> for CssValue {
    fn from(n: u32) -> Self {
        CssValue::Number(n as f64)
    }
}

/// Prints a number the way a JavaScript runtime does.
///
/// Rust's shortest round-trip digits match the browser's. Outside
/// `[1e-6, 1e21)` the browser switches to exponent form with an explicit
/// sign (`1e+21`, `9.5367431640625e-7`), and negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() < 1e-6 || n.abs() >= 1e21 {
        let exponential = format!("{:e}", n);
        match exponential.split_once('e') {
            Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
            Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
            None => exponential,
        }
    } else {
        format!("{}", n)
    }
}

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is valid")
});

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("int prefix pattern is valid"));

/// Parses the longest leading float, like `parseFloat`. Returns NaN when
/// nothing parses.
pub(crate) fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    match FLOAT_PREFIX.find(s) {
        Some(m) => {
            let text = m.as_str().replace("Infinity", "inf");
            text.parse::<f64>().unwrap_or(f64::NAN)
        }
        None => f64::NAN,
    }
}

/// Parses the leading integer, like `parseInt(s, 10)`.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    INT_PREFIX.find(s).and_then(|m| m.as_str().parse::<i64>().ok())
}

/// A validated, non-falsy prop value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Raw<'a> {
    Str(&'a str),
    Num(f64),
}

impl<'a> Raw<'a> {
    /// The value as text; numbers are printed.
    pub(crate) fn text(&self) -> Cow<'a, str> {
        match self {
            Raw::Str(s) => Cow::Borrowed(s),
            Raw::Num(n) => Cow::Owned(format_number(*n)),
        }
    }

    /// Matches the value against a string literal. Numbers never match.
    pub(crate) fn is(&self, literal: &str) -> bool {
        matches!(self, Raw::Str(s) if *s == literal)
    }

    /// The value as it would appear in JSON, used in error messages.
    pub(crate) fn json(&self) -> String {
        match self {
            Raw::Str(s) => Value::from(*s).to_string(),
            Raw::Num(n) => format_number(*n),
        }
    }

    pub(crate) fn to_css(self) -> CssValue {
        match self {
            Raw::Str(s) => CssValue::Text(s.to_string()),
            Raw::Num(n) => CssValue::Number(n),
        }
    }
}

/// Returns true for `null`, `false`, `""` and numeric zero.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f == 0.0 || f.is_nan()).unwrap_or(false),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Converts a raw prop value to a [`CssValue`] without interpretation.
///
/// `null` and booleans have no CSS form and yield `None`.
pub fn raw_to_css(value: &Value) -> Option<CssValue> {
    match value {
        Value::String(s) => Some(CssValue::Text(s.clone())),
        Value::Number(n) => n.as_f64().map(CssValue::Number),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks a prop value: `Ok(None)` when falsy, the typed value when it is a
/// string or number, an error otherwise.
pub(crate) fn validate<'a>(prop: &'static str, value: &'a Value) -> Result<Option<Raw<'a>>> {
    if is_falsy(value) {
        return Ok(None);
    }
    match value {
        Value::String(s) => Ok(Some(Raw::Str(s))),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Ok(Some(Raw::Num(f))),
            None => Err(invalid_value(prop, value)),
        },
        _ => Err(invalid_value(prop, value)),
    }
}

fn invalid_value(prop: &'static str, value: &Value) -> ResolveError {
    ResolveError::InvalidValue {
        prop,
        value: value.to_string(),
        kind: kind_of(value),
    }
}
