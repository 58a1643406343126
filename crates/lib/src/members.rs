//! Value-set membership and keyed existence checks.
//!
//! The membership queries flatten the container with [`path::dot`] and match
//! values by their string form, so a nested `1` satisfies a query for `"1"`.

use std::collections::HashSet;

use crate::{
    path,
    value::{Value, ValueError},
};

/// Collects the string forms of every scalar nested anywhere in `container`.
fn flattened_texts(container: &Value) -> HashSet<String> {
    path::dot(container, "")
        .values()
        .map(|value| value.to_text().into_owned())
        .collect()
}

/// Returns the entries of `values` that occur anywhere in `container`, in the
/// order of `values`.
///
/// ```
/// use dotted::{Value, members};
/// use serde_json::json;
///
/// let roles = Value::from(json!({"user": {"roles": ["admin", "editor"]}}));
/// let wanted = [Value::from("viewer"), Value::from("editor")];
/// assert_eq!(members::get_any_values(&roles, &wanted), vec![Value::from("editor")]);
/// ```
pub fn get_any_values(container: &Value, values: &[Value]) -> Vec<Value> {
    let present = flattened_texts(container);
    values
        .iter()
        .filter(|value| present.contains(value.to_text().as_ref()))
        .cloned()
        .collect()
}

/// Returns true if any of `values` occurs anywhere in `container`.
pub fn has_any_values(container: &Value, values: &[Value]) -> bool {
    !get_any_values(container, values).is_empty()
}

/// Returns true if every entry of `values` occurs somewhere in `container`.
///
/// An empty `values` slice is trivially satisfied.
///
/// ```
/// use dotted::{Value, members};
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": [1, 2], "b": {"c": 3}}));
/// assert!(members::has_all_values(&value, &[Value::Int(1), Value::Int(3)]));
/// assert!(!members::has_all_values(&value, &[Value::Int(1), Value::Int(4)]));
/// ```
pub fn has_all_values(container: &Value, values: &[Value]) -> bool {
    get_any_values(container, values).len() == values.len()
}

/// Appends `item` to `list` unless an element already has the same value at
/// `unique_key`.
///
/// Both sides are resolved with [`path::get_or`] (defaulting to `Null`) and
/// compared strictly, so `1` and `"1"` are different identifiers. The input
/// is not modified; the returned list either equals it or has `item` appended.
///
/// # Errors
/// Returns [`ValueError::NotAContainer`] if `list` is a scalar.
///
/// ```
/// use dotted::{Value, members};
/// use serde_json::json;
///
/// let list = Value::from(json!([{"id": 1}]));
///
/// let unchanged = members::ensure_has(&list, &Value::from(json!({"id": 1, "x": 2})), "id")?;
/// assert_eq!(unchanged, list);
///
/// let grown = members::ensure_has(&list, &Value::from(json!({"id": 2})), "id")?;
/// assert_eq!(grown, Value::from(json!([{"id": 1}, {"id": 2}])));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn ensure_has(list: &Value, item: &Value, unique_key: &str) -> Result<Value, ValueError> {
    let list = list.require_container("ensure_has")?;
    // Unresolved identifiers compare as Null on both sides
    let identifier = path::get_or(item, unique_key, Value::Null);

    let exists = list
        .values()
        .any(|existing| path::get_or(existing, unique_key, Value::Null) == identifier);

    let mut result = list.clone();
    if !exists {
        result.push(item.clone())?;
    }
    Ok(result)
}
