//! Filtering and projection over lists and maps.
//!
//! Key-based filters keep the keys of the entries they retain, so filtering a
//! list can produce a map with gaps (`only(["a", "b", "c"], [0, 2])` is
//! `{0: "a", 2: "c"}`). Results whose keys come out as `0..n` are returned as
//! lists.
//!
//! Every function here requires a container and fails with
//! [`ValueError::NotAContainer`] when handed a scalar.

use std::collections::{HashMap, HashSet};

use crate::{
    path,
    value::{Key, Map, Value, ValueError},
};

fn key_set<I, K>(keys: I) -> HashSet<Key>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    keys.into_iter().map(Into::into).collect()
}

/// Returns the entries of `map` whose key is in `keys`, in `map` order.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let user = Value::from(json!({"id": 1, "name": "Ada", "password": "x"}));
/// let public = filter::only(&user, ["name", "id"])?;
/// assert_eq!(public, Value::from(json!({"id": 1, "name": "Ada"})));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn only<I, K>(map: &Value, keys: I) -> Result<Value, ValueError>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    let wanted = key_set(keys);
    let map = map.require_container("only")?;
    Ok(Value::from_entries(
        map.entries()
            .filter(|(key, _)| wanted.contains(key))
            .map(|(key, value)| (key, value.clone())),
    ))
}

/// Returns the entries of `map` whose key is not in `keys`, in `map` order.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let user = Value::from(json!({"id": 1, "name": "Ada", "password": "x"}));
/// let public = filter::except(&user, ["password"])?;
/// assert_eq!(public, Value::from(json!({"id": 1, "name": "Ada"})));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn except<I, K>(map: &Value, keys: I) -> Result<Value, ValueError>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    let unwanted = key_set(keys);
    let map = map.require_container("except")?;
    Ok(Value::from_entries(
        map.entries()
            .filter(|(key, _)| !unwanted.contains(key))
            .map(|(key, value)| (key, value.clone())),
    ))
}

/// Returns the values of `map` that match none of `values`, re-indexed as a
/// list.
///
/// Values are matched by their string form ([`Value::to_text`]), so `1` and
/// `"1"` match each other.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let tags = Value::from(json!(["red", "green", "blue", "green"]));
/// let kept = filter::except_values(&tags, &[Value::from("green")])?;
/// assert_eq!(kept, Value::from(json!(["red", "blue"])));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn except_values(map: &Value, values: &[Value]) -> Result<Value, ValueError> {
    let map = map.require_container("except_values")?;
    let unwanted: HashSet<_> = values.iter().map(Value::to_text).collect();
    Ok(Value::List(
        map.values()
            .filter(|value| !unwanted.contains(value.to_text().as_ref()))
            .cloned()
            .collect(),
    ))
}

/// Returns the requested keys that are absent from `map`.
///
/// Each missing key is reported once, in the order it was first requested.
///
/// ```
/// use dotted::{Key, Value, filter};
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": 1}));
/// assert_eq!(filter::missing(&value, ["a", "b"])?, vec![Key::from("b")]);
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn missing<I, K>(map: &Value, keys: I) -> Result<Vec<Key>, ValueError>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    let map = map.require_container("missing")?;
    let mut seen = HashSet::new();
    Ok(keys
        .into_iter()
        .map(Into::into)
        .filter(|key| seen.insert(key.clone()) && !map.contains_key(key))
        .collect())
}

/// Returns true if any of `keys` is absent from `map`.
pub fn is_missing<I, K>(map: &Value, keys: I) -> Result<bool, ValueError>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    Ok(!missing(map, keys)?.is_empty())
}

/// Extracts the value at `value_path` from every element of `list`.
///
/// Without `key_path` the result is a list. With `key_path` the result is
/// keyed by each element's value at that path; duplicate keys keep the last
/// value. Paths that do not resolve yield `Null`.
///
/// # Errors
/// Fails if `list` is a scalar, or if a resolved key is a list or map.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let users = Value::from(json!([
///     {"id": 7, "profile": {"name": "Ada"}},
///     {"id": 9, "profile": {"name": "Grace"}},
/// ]));
///
/// let names = filter::pluck(&users, "profile.name", None)?;
/// assert_eq!(names, Value::from(json!(["Ada", "Grace"])));
///
/// let by_id = filter::pluck(&users, "profile.name", Some("id"))?;
/// assert_eq!(by_id, Value::from(json!({"7": "Ada", "9": "Grace"})));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn pluck(list: &Value, value_path: &str, key_path: Option<&str>) -> Result<Value, ValueError> {
    let list = list.require_container("pluck")?;

    let Some(key_path) = key_path else {
        return Ok(Value::List(
            list.values()
                .map(|item| path::get_or(item, value_path, Value::Null))
                .collect(),
        ));
    };

    let mut results = Map::with_capacity(list.container_len());
    for item in list.values() {
        let key = Key::try_from(&path::get_or(item, key_path, Value::Null))?;
        results.insert(key, path::get_or(item, value_path, Value::Null));
    }
    Ok(Value::from_entries(results))
}

/// Renames keys of `map` according to `renames`, keeping entry order.
///
/// Keys without a rename pass through unchanged. If two entries end up with
/// the same key, the later value wins and keeps the earlier position.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let row = Value::from(json!({"first_name": "Ada", "age": 36}));
/// let renamed = filter::rename_keys(&row, [("first_name", "name")])?;
/// assert_eq!(renamed, Value::from(json!({"name": "Ada", "age": 36})));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn rename_keys<I, F, T>(map: &Value, renames: I) -> Result<Value, ValueError>
where
    I: IntoIterator<Item = (F, T)>,
    F: Into<Key>,
    T: Into<Key>,
{
    let map = map.require_container("rename_keys")?;
    let renames: HashMap<Key, Key> = renames
        .into_iter()
        .map(|(from, to)| (from.into(), to.into()))
        .collect();

    let renamed: Map = map
        .entries()
        .map(|(key, value)| {
            let key = renames.get(&key).cloned().unwrap_or(key);
            (key, value.clone())
        })
        .collect();
    Ok(Value::from_entries(renamed))
}

/// Reorders `map` to follow `order`.
///
/// Keys named in `order` come first, in that order, skipping any that `map`
/// lacks. The remaining keys of `map` follow in their original order.
///
/// ```
/// use dotted::{Value, filter};
/// use serde_json::json;
///
/// let value = Value::from(json!({"c": 3, "a": 1, "d": 4, "b": 2}));
/// let ordered = filter::order(&value, ["a", "b", "z"])?;
///
/// let keys: Vec<String> = ordered.entries().map(|(k, _)| k.to_string()).collect();
/// assert_eq!(keys, vec!["a", "b", "c", "d"]);
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn order<I, K>(map: &Value, order: I) -> Result<Value, ValueError>
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    let map = map.require_container("order")?;

    // Skeleton of placeholders in the requested order
    let mut ordered = Map::new();
    for key in order {
        let key = key.into();
        if !ordered.contains_key(&key) {
            ordered.insert(key, Value::Null);
        }
    }

    // Overlay real values; keys not in the skeleton land at the end
    for (key, value) in map.entries() {
        ordered.insert(key, value.clone());
    }

    // Drop placeholders that never received a value
    ordered.retain(|key, _| map.contains_key(key));
    Ok(Value::from_entries(ordered))
}
