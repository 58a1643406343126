//! URL query string encoding.
//!
//! The output uses the bracket convention for nested keys, which bracket-aware
//! query parsers read back into the same nesting:
//!
//! - Pairs are joined with `&`.
//! - Keys and values are percent-encoded per RFC 3986: only the unreserved
//!   characters `A-Z a-z 0-9 - _ . ~` pass through, a space becomes `%20`.
//! - Nested entries are named `parent[child]`, with the brackets themselves
//!   encoded (`a%5Bb%5D=1`).
//! - `Null` values and empty containers emit nothing; booleans emit `1`/`0`.

use std::fmt::Write;

use crate::value::{Value, ValueError};

/// Percent-encodes `s` per RFC 3986, leaving unreserved characters as is.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

fn append_pairs(pairs: &mut Vec<String>, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push(format!("{name}={}", u8::from(*b))),
        Value::List(_) | Value::Map(_) => {
            for (key, child) in value.entries() {
                let child_name = format!("{name}%5B{}%5D", encode_component(&key.as_text()));
                append_pairs(pairs, &child_name, child);
            }
        }
        scalar => pairs.push(format!("{name}={}", encode_component(&scalar.to_text()))),
    }
}

/// Serializes `map` into a URL query string.
///
/// # Errors
/// Returns [`ValueError::NotAContainer`] if `map` is a scalar.
///
/// ```
/// use dotted::{Value, query};
/// use serde_json::json;
///
/// let params = Value::from(json!({
///     "q": "rust lang",
///     "filter": {"year": 2024, "tags": ["a", "b"]},
///     "page": null,
/// }));
///
/// assert_eq!(
///     query::query(&params)?,
///     "q=rust%20lang&filter%5Byear%5D=2024&filter%5Btags%5D%5B0%5D=a&filter%5Btags%5D%5B1%5D=b"
/// );
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn query(map: &Value) -> Result<String, ValueError> {
    let map = map.require_container("query")?;

    let mut pairs = Vec::new();
    for (key, value) in map.entries() {
        append_pairs(&mut pairs, &encode_component(&key.as_text()), value);
    }
    Ok(pairs.join("&"))
}
