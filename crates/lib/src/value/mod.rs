//! The nested value model.
//!
//! This module provides the [`Value`] enum that every operation in the crate
//! works on. A value is either a scalar (null, boolean, integer, float, text)
//! or a container: an ordered [`Value::List`] or an insertion-ordered
//! [`Value::Map`] keyed by [`Key`].
//!
//! A list is the special case of an associative container whose keys are
//! `0..n` in order. Equality follows that view, so a list and a map holding the
//! same entries in the same order compare equal:
//!
//! ```
//! # use dotted::{Map, Value};
//! let list = Value::List(vec![Value::from("a"), Value::from("b")]);
//! let map: Map = [(0u64, "a"), (1u64, "b")].into_iter().collect();
//! assert_eq!(list, Value::Map(map));
//! ```

use std::{borrow::Cow, fmt};

mod container;
mod convert;
pub mod errors;
pub mod key;
pub mod map;

pub use container::Entries;
pub use errors::ValueError;
pub use key::Key;
pub use map::Map;

/// A nested value: scalar, list or map.
///
/// # Value Types
///
/// ## Scalars
/// - [`Value::Null`] - Absent/empty value
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Containers
/// - [`Value::List`] - Ordered sequence, implicitly keyed `0..n`
/// - [`Value::Map`] - Insertion-ordered map from [`Key`] to value
///
/// # Comparisons
///
/// Scalars compare strictly: `Int(1)`, `Float(1.0)` and `Text("1")` are all
/// different. Containers compare by their ordered entries.
///
/// ```
/// # use dotted::Value;
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(Value::Int(1) != Value::Float(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Insertion-ordered mapping
    Map(Map),
}

impl Value {
    /// Creates an empty map value
    pub fn empty_map() -> Self {
        Value::Map(Map::new())
    }

    /// Returns true for lists and maps
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true for every non-container value
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string form used when values are compared as text.
    ///
    /// `null` and `false` become `""`, `true` becomes `"1"`, numbers use their
    /// shortest decimal form and containers become `"Array"`.
    ///
    /// Floats are always written positionally, never with an exponent, so
    /// `1e20` is `"100000000000000000000"` rather than `"1.0E+20"`. String
    /// comparisons of very large or very small floats order by that form.
    /// Non-finite floats are `"NAN"`, `"INF"` and `"-INF"`.
    ///
    /// ```
    /// # use dotted::Value;
    /// assert_eq!(Value::Bool(true).to_text(), "1");
    /// assert_eq!(Value::Null.to_text(), "");
    /// assert_eq!(Value::Float(2.0).to_text(), "2");
    /// assert_eq!(Value::Float(0.5).to_text(), "0.5");
    /// assert_eq!(Value::Float(1e20).to_text(), "100000000000000000000");
    /// ```
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null | Value::Bool(false) => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("1"),
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::Float(f) => Cow::Owned(float_text(*f)),
            Value::Text(s) => Cow::Borrowed(s),
            Value::List(_) | Value::Map(_) => Cow::Borrowed("Array"),
        }
    }

    /// Returns the numeric form used by numeric sorting.
    ///
    /// Text contributes its leading numeric prefix (`"12abc"` is 12, `"abc"`
    /// is 0). Empty containers are 0, other containers 1.
    ///
    /// ```
    /// # use dotted::Value;
    /// assert_eq!(Value::from(" 12.5kg").to_number(), 12.5);
    /// assert_eq!(Value::from("abc").to_number(), 0.0);
    /// assert_eq!(Value::Bool(true).to_number(), 1.0);
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null | Value::Bool(false) => 0.0,
            Value::Bool(true) => 1.0,
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Text(s) => leading_number(s),
            Value::List(_) | Value::Map(_) => {
                if self.container_len() == 0 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        let text = if f > 0.0 { "INF" } else { "-INF" };
        text.to_string()
    } else {
        format!("{f}")
    }
}

/// Parses the longest numeric prefix of `s` after leading whitespace.
fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // A list and a map are equal when their entries line up
            (a, b) if a.is_container() && b.is_container() => {
                a.container_len() == b.container_len()
                    && a
                        .entries()
                        .zip(b.entries())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(_) | Value::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            Value::Null => write!(f, "null"),
            other => write!(f, "{}", other.to_text()),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(f) if f == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
