//! Keys for associative containers.
//!
//! A [`Key`] is either a non-negative integer index or a name. Text that is the
//! canonical decimal form of a non-negative integer is normalized to an index,
//! so `"3"` and `3` address the same slot and a path segment `"0"` reaches the
//! first element of a list.

use std::{borrow::Cow, fmt};

use super::{Value, ValueError};

/// A key within a [`Map`](super::Map) or a position within a list.
///
/// # Examples
///
/// ```
/// # use dotted::Key;
/// assert_eq!(Key::from("7"), Key::Index(7));
/// assert_eq!(Key::from("07"), Key::Name("07".to_string()));
/// assert_eq!(Key::from("-1"), Key::Name("-1".to_string()));
/// assert_eq!(Key::from("name").to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key (list position, or numeric map key)
    Index(u64),
    /// String key
    Name(String),
}

impl Key {
    /// Returns the index if this is an integer key
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }

    /// Returns the key as text, borrowing when possible.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Index(i) => Cow::Owned(i.to_string()),
            Key::Name(s) => Cow::Borrowed(s),
        }
    }
}

/// Parses `s` as a canonical non-negative integer: digits only, no sign and
/// no leading zero unless the whole string is `"0"`.
fn canonical_index(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_index(value) {
            Some(i) => Key::Index(i),
            None => Key::Name(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_index(&value) {
            Some(i) => Key::Index(i),
            None => Key::Name(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as u64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as u64)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        int_key(value as i64)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// Converts a value into the key it would occupy when used as an array key.
///
/// `Null` becomes `""`, booleans become 0 or 1, floats are truncated, text is
/// normalized and negative integers keep their decimal text.
///
/// # Errors
/// Lists and maps cannot be keys and yield [`ValueError::IllegalKey`].
impl TryFrom<&Value> for Key {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Name(String::new())),
            Value::Bool(b) => Ok(Key::Index(u64::from(*b))),
            Value::Int(n) => Ok(int_key(*n)),
            Value::Float(f) => Ok(int_key(*f as i64)),
            Value::Text(s) => Ok(Key::from(s.as_str())),
            Value::List(_) | Value::Map(_) => Err(ValueError::IllegalKey {
                found: value.type_name(),
            }),
        }
    }
}

fn int_key(n: i64) -> Key {
    match u64::try_from(n) {
        Ok(i) => Key::Index(i),
        Err(_) => Key::Name(n.to_string()),
    }
}

impl serde::Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Key::from(s))
    }
}
