//! Key-based access to list and map containers.
//!
//! Lists and maps share one keyed interface here. Writes that a list cannot
//! represent positionally (a name key, or an index past the end) promote the
//! list to a map holding the same entries, so existing keys never shift.

use std::{iter::Enumerate, slice};

use super::{Key, Map, Value, ValueError};

/// Iterator over the `(key, value)` entries of a container.
///
/// Yields nothing for scalars.
pub enum Entries<'a> {
    Empty,
    List(Enumerate<slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, Key, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Empty => None,
            Entries::List(iter) => iter.next().map(|(i, v)| (Key::from(i), v)),
            Entries::Map(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
        }
    }
}

fn list_position(key: &Key) -> Option<usize> {
    key.as_index().and_then(|i| usize::try_from(i).ok())
}

impl Value {
    /// Returns `self` if it is a container.
    ///
    /// # Errors
    /// Returns [`ValueError::NotAContainer`] naming `operation` for scalars.
    pub fn require_container(&self, operation: &'static str) -> Result<&Self, ValueError> {
        if self.is_container() {
            Ok(self)
        } else {
            Err(ValueError::NotAContainer {
                operation,
                found: self.type_name(),
            })
        }
    }

    /// Number of entries in a container; 0 for scalars.
    pub fn container_len(&self) -> usize {
        match self {
            Value::List(list) => list.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    /// Iterates the entries of a container in order.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Value::List(list) => Entries::List(list.iter().enumerate()),
            Value::Map(map) => Entries::Map(map.iter()),
            _ => Entries::Empty,
        }
    }

    /// Iterates the values of a container in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries().map(|(_, v)| v)
    }

    /// Consumes a container into its entries; scalars yield none.
    pub fn into_entries(self) -> Vec<(Key, Value)> {
        match self {
            Value::List(list) => list
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v))
                .collect(),
            Value::Map(map) => map.into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Consumes a container into its values; scalars yield none.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Value::List(list) => list,
            Value::Map(map) => map.into_iter().map(|(_, v)| v).collect(),
            _ => Vec::new(),
        }
    }

    /// Builds a container from entries, as a list when the keys are `0..n`
    /// in order and as a map otherwise.
    ///
    /// ```
    /// # use dotted::{Key, Value};
    /// let list = Value::from_entries([(Key::Index(0), Value::Int(5))]);
    /// assert!(matches!(list, Value::List(_)));
    ///
    /// let map = Value::from_entries([(Key::Index(1), Value::Int(5))]);
    /// assert!(matches!(map, Value::Map(_)));
    /// ```
    pub fn from_entries(entries: impl IntoIterator<Item = (Key, Value)>) -> Value {
        let map: Map = entries.into_iter().collect();
        if map.is_list() {
            Value::List(map.into_iter().map(|(_, v)| v).collect())
        } else {
            Value::Map(map)
        }
    }

    /// Looks up a single key in a container.
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::List(list) => list_position(key).and_then(|i| list.get(i)),
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up a single key in a container for modification.
    pub fn get_key_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self {
            Value::List(list) => list_position(key).and_then(|i| list.get_mut(i)),
            Value::Map(map) => map.get_mut(key),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    /// Writes `value` under `key`, returning the value it replaced.
    ///
    /// # Errors
    /// Returns [`ValueError::NotAContainer`] if `self` is a scalar.
    pub fn insert_key(&mut self, key: Key, value: Value) -> Result<Option<Value>, ValueError> {
        if let Value::List(list) = self {
            match list_position(&key) {
                Some(i) if i < list.len() => {
                    return Ok(Some(std::mem::replace(&mut list[i], value)));
                }
                Some(i) if i == list.len() => {
                    list.push(value);
                    return Ok(None);
                }
                _ => {}
            }
        }

        let found = self.type_name();
        match self.promote_list() {
            Some(map) => Ok(map.insert(key, value)),
            None => Err(ValueError::NotAContainer {
                operation: "insert",
                found,
            }),
        }
    }

    /// Returns the value stored under `key`, creating a `Null` entry first if
    /// the key is absent.
    ///
    /// # Errors
    /// Returns [`ValueError::NotAContainer`] if `self` is a scalar.
    pub fn slot_mut(&mut self, key: Key) -> Result<&mut Value, ValueError> {
        let position = match self {
            Value::List(list) => list_position(&key).filter(|&i| i <= list.len()),
            _ => None,
        };
        if let Some(i) = position {
            if let Value::List(list) = self {
                if i == list.len() {
                    list.push(Value::Null);
                }
                return Ok(&mut list[i]);
            }
        }

        let found = self.type_name();
        match self.promote_list() {
            Some(map) => Ok(map.slot(key)),
            None => Err(ValueError::NotAContainer {
                operation: "insert",
                found,
            }),
        }
    }

    /// Removes `key` from a container, returning its value.
    ///
    /// Removing the last element of a list pops it; removing any other
    /// element turns the list into a map so the remaining keys are unchanged.
    /// Scalars and absent keys yield `None`.
    pub fn remove_key(&mut self, key: &Key) -> Option<Value> {
        if let Value::List(list) = self {
            let i = list_position(key)?;
            if i >= list.len() {
                return None;
            }
            if i + 1 == list.len() {
                return list.pop();
            }
        }

        match self.promote_list() {
            Some(map) => map.remove(key),
            None => None,
        }
    }

    /// Appends `value` under the next free index and returns its key.
    ///
    /// # Errors
    /// Returns [`ValueError::NotAContainer`] if `self` is a scalar.
    pub fn push(&mut self, value: Value) -> Result<Key, ValueError> {
        match self {
            Value::List(list) => {
                list.push(value);
                Ok(Key::from(list.len() - 1))
            }
            Value::Map(map) => Ok(map.push(value)),
            other => Err(ValueError::NotAContainer {
                operation: "push",
                found: other.type_name(),
            }),
        }
    }

    /// Converts a list into an equivalent map in place and returns the map.
    /// Returns `None` for scalars.
    fn promote_list(&mut self) -> Option<&mut Map> {
        if let Value::List(list) = self {
            let map = Map::from(std::mem::take(list));
            *self = Value::Map(map);
        }
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}
