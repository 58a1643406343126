//! Dot-notation path engine.
//!
//! A path is a string of segments separated by `.`, one segment per level of
//! nesting: `"user.address.city"`. Segments are never split further, so a key
//! that itself contains a `.` can only be reached through the literal-key fast
//! path of [`get`].
//!
//! # Operations
//!
//! - [`dot`] / [`undot`] - Flatten a nested value into a single-level dotted map and back
//! - [`get`] / [`get_or`] / [`has`] / [`walk`] - Read access
//! - [`set`] - In-place write, creating intermediate maps
//! - [`forget`] - In-place removal
//!
//! # Known Limitations
//!
//! - Empty containers vanish when flattened, so they do not survive a
//!   `dot`/`undot` round trip.
//! - [`has`] treats a key holding `Null` the same as an absent key.
//!
//! ```
//! use dotted::{Value, path};
//!
//! let mut value = Value::empty_map();
//! path::set(&mut value, "a.b", 1)?;
//! path::set(&mut value, "a.c", Value::empty_map())?;
//!
//! let flat = path::dot(&value, "");
//! assert_eq!(flat.len(), 1); // "a.c" was empty and is dropped
//! # Ok::<(), dotted::ValueError>(())
//! ```

use crate::value::{Key, Map, Value, ValueError};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Splits a path into its segment keys.
///
/// An empty path is a single empty segment.
///
/// ```
/// # use dotted::{Key, path::segments};
/// let keys: Vec<Key> = segments("users.0.name").collect();
/// assert_eq!(keys, vec![Key::from("users"), Key::Index(0), Key::from("name")]);
/// assert_eq!(segments("").count(), 1);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = Key> + '_ {
    path.split(SEPARATOR).map(Key::from)
}

/// Splits a path into its leading segments and its final segment.
fn split_last(path: &str) -> (Vec<Key>, Key) {
    let mut keys: Vec<Key> = segments(path).collect();
    // split() always yields at least one item
    let last = keys.pop().unwrap_or_else(|| Key::from(""));
    (keys, last)
}

/// Flattens a nested value into a single-level map keyed by dotted paths.
///
/// Every scalar is recorded under `prefix` followed by its full path. Empty
/// containers produce no entries. When two entries flatten to the same path
/// the later value wins and keeps the earlier position. A scalar `value`
/// yields an empty map.
///
/// ```
/// use dotted::{Key, Value, path};
///
/// let value = Value::from(serde_json::json!({
///     "user": {"name": "Ada", "tags": ["a", "b"]},
///     "empty": {},
/// }));
/// let flat = path::dot(&value, "");
///
/// assert_eq!(flat.get(&Key::from("user.name")), Some(&Value::from("Ada")));
/// assert_eq!(flat.get(&Key::from("user.tags.1")), Some(&Value::from("b")));
/// assert!(!flat.contains_key(&Key::from("empty")));
///
/// let prefixed = path::dot(&value, "cfg.");
/// assert!(prefixed.contains_key(&Key::from("cfg.user.name")));
/// ```
pub fn dot(value: &Value, prefix: &str) -> Map {
    let mut results = Map::new();
    dot_into(value, prefix, &mut results);
    results
}

fn dot_into(value: &Value, prefix: &str, results: &mut Map) {
    for (key, child) in value.entries() {
        if child.is_container() {
            dot_into(child, &format!("{prefix}{key}{SEPARATOR}"), results);
        } else {
            results.insert(format!("{prefix}{key}"), child.clone());
        }
    }
}

/// Rebuilds a nested value from a dotted map.
///
/// Entries are applied in order with [`set`], so later entries overwrite
/// earlier ones and may replace a scalar with a map.
///
/// ```
/// use dotted::{Map, Value, path};
///
/// let flat: Map = [("a.b", 1), ("a.c", 2), ("d", 3)].into_iter().collect();
/// let nested = path::undot(&flat);
///
/// assert_eq!(
///     nested,
///     Value::from(serde_json::json!({"a": {"b": 1, "c": 2}, "d": 3}))
/// );
/// ```
pub fn undot(dotted: &Map) -> Value {
    let mut result = Value::empty_map();
    for (key, value) in dotted {
        // The accumulator is always a map, so set cannot fail
        let _ = set(&mut result, &key.as_text(), value.clone());
    }
    result
}

/// Sets the value at `path`, creating intermediate maps as needed.
///
/// Every segment but the last must lead to a container; an absent key or a
/// scalar in the way is overwritten with an empty map. The final segment is
/// assigned `value`, replacing whatever was there.
///
/// # Errors
/// Returns [`ValueError::NotAContainer`] if `container` itself is a scalar.
///
/// ```
/// use dotted::{Value, path};
///
/// let mut value = Value::from(serde_json::json!({"a": 5}));
/// path::set(&mut value, "a.b.c", "deep")?;
///
/// // The scalar at "a" was replaced by a map
/// assert_eq!(path::get(&value, "a.b.c"), Some(&Value::from("deep")));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn set(container: &mut Value, path: &str, value: impl Into<Value>) -> Result<(), ValueError> {
    if container.is_scalar() {
        return Err(ValueError::NotAContainer {
            operation: "set",
            found: container.type_name(),
        });
    }

    let (parents, last) = split_last(path);
    let mut current = container;
    for key in parents {
        let slot = current.slot_mut(key)?;
        if slot.is_scalar() {
            if !slot.is_null() {
                tracing::debug!(
                    path,
                    replaced = slot.type_name(),
                    "Replacing scalar with map while setting path"
                );
            }
            *slot = Value::empty_map();
        }
        current = slot;
    }
    current.insert_key(last, value.into())?;
    Ok(())
}

/// Returns the value at `path`, or `None` if the path does not resolve.
///
/// If `path` is literally a top-level key holding a non-null value, that value
/// is returned without splitting on dots. A flat key therefore takes
/// precedence over a nested path spelled the same way. Otherwise the path is
/// walked one segment at a time.
///
/// ```
/// use dotted::{Value, path};
///
/// let value = Value::from(serde_json::json!({"a.b": 1, "a": {"b": 2}}));
/// assert_eq!(path::get(&value, "a.b"), Some(&Value::Int(1)));
///
/// let value = Value::from(serde_json::json!({"a": {"b": null}}));
/// assert_eq!(path::get(&value, "a.b"), Some(&Value::Null));
/// assert_eq!(path::get(&value, "a.b.c"), None);
/// ```
pub fn get<'a>(container: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(found) = container
        .get_key(&Key::from(path))
        .filter(|found| !found.is_null())
    {
        return Some(found);
    }

    walk(container, path)
}

/// Resolves `path` one segment at a time, without the literal-key fast path
/// of [`get`].
///
/// ```
/// use dotted::{Value, path};
///
/// let value = Value::from(serde_json::json!({"a.b": 1, "a": {"b": 2}}));
/// assert_eq!(path::walk(&value, "a.b"), Some(&Value::Int(2)));
/// ```
pub fn walk<'a>(container: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = container;
    for key in segments(path) {
        current = current.get_key(&key)?;
    }
    Some(current)
}

/// Returns a copy of the value at `path`, or `default` if it does not resolve.
///
/// A `Null` that is actually stored at `path` is returned as `Null`.
pub fn get_or(container: &Value, path: &str, default: impl Into<Value>) -> Value {
    match get(container, path) {
        Some(found) => found.clone(),
        None => default.into(),
    }
}

/// Returns true if `path` resolves to a non-null value.
///
/// A key explicitly holding `Null` is reported as absent.
///
/// ```
/// use dotted::{Value, path};
///
/// let value = Value::from(serde_json::json!({"a": null, "b": 0}));
/// assert!(!path::has(&value, "a"));
/// assert!(path::has(&value, "b"));
/// ```
pub fn has(container: &Value, path: &str) -> bool {
    get(container, path).is_some_and(|found| !found.is_null())
}

/// Removes the value at each of `paths`.
///
/// Each path is resolved from the root independently. The walk descends
/// through a segment only when it names an existing container; otherwise it
/// stays where it is and tries the next segment at the same level. The final
/// segment is removed from wherever the walk ended, so a path with a missing
/// middle segment can remove a key at a shallower level. Missing keys are
/// ignored.
///
/// ```
/// use dotted::{Value, path};
///
/// let mut value = Value::from(serde_json::json!({"a": {"b": 1, "c": 2}, "d": 3}));
/// path::forget(&mut value, ["a.b", "d"]);
/// assert_eq!(value, Value::from(serde_json::json!({"a": {"c": 2}})));
///
/// // "x" does not exist, so "c" is removed from "a" after the walk moves on
/// path::forget(&mut value, ["x.a.c"]);
/// assert_eq!(value, Value::from(serde_json::json!({"a": {}})));
/// ```
pub fn forget<I, P>(container: &mut Value, paths: I)
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    for path in paths {
        let (parents, last) = split_last(path.as_ref());
        forget_from(container, &parents, &last);
    }
}

fn forget_from(current: &mut Value, parents: &[Key], last: &Key) {
    let Some((key, rest)) = parents.split_first() else {
        current.remove_key(last);
        return;
    };

    if current.get_key(key).is_some_and(Value::is_container) {
        if let Some(next) = current.get_key_mut(key) {
            return forget_from(next, rest, last);
        }
    }

    tracing::trace!(segment = %key, "Segment is not a container, staying at current level");
    forget_from(current, rest, last);
}
