//! Sorting lists of maps by a column.
//!
//! Two sorts are provided and they compare differently:
//!
//! - [`multisort`] reads a flat key and compares **numerically**.
//! - [`numeric_multisort`] reads a dotted path and, despite its name, compares
//!   the **string forms** of the values byte by byte. `"10"` sorts before
//!   `"9"`. Callers rely on this ordering, so it is kept as is.

use crate::{
    path,
    value::{Key, Map, Value, ValueError},
};

/// Sorts the elements of `list` by the numeric value of their `key` column.
///
/// `key` is a flat key; dots are not traversed. Ties keep their original
/// order. Name keys of `list` are kept with their elements and integer keys
/// are renumbered from 0.
///
/// Cells compare by [`Value::to_number`] under IEEE 754 total order, so a
/// `NAN` cell sorts after every number.
///
/// # Errors
/// Returns [`ValueError::NotAContainer`] if `list` is a scalar, and
/// [`ValueError::MissingColumn`] if any element lacks the column or is not a
/// container.
///
/// ```
/// use dotted::{Value, sort};
/// use serde_json::json;
///
/// let rows = Value::from(json!([{"k": 3}, {"k": 1}, {"k": "2"}]));
///
/// let ascending = sort::multisort(&rows, "k", false)?;
/// assert_eq!(ascending, Value::from(json!([{"k": 1}, {"k": "2"}, {"k": 3}])));
///
/// let descending = sort::multisort(&rows, "k", true)?;
/// assert_eq!(descending, Value::from(json!([{"k": 3}, {"k": "2"}, {"k": 1}])));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn multisort(list: &Value, key: &str, descending: bool) -> Result<Value, ValueError> {
    let list = list.require_container("multisort")?;
    let column = Key::from(key);

    let mut rows = Vec::with_capacity(list.container_len());
    for (row_key, item) in list.entries() {
        let Some(cell) = item.get_key(&column) else {
            tracing::debug!(key, row = %row_key, "Row has no sort column");
            return Err(ValueError::MissingColumn {
                row: row_key,
                column: key.to_string(),
            });
        };
        rows.push((row_key, cell.to_number(), item));
    }

    rows.sort_by(|(_, a, _), (_, b, _)| {
        let ordering = a.total_cmp(b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    let mut sorted = Map::with_capacity(rows.len());
    for (row_key, _, item) in rows {
        match row_key {
            Key::Name(_) => {
                sorted.insert(row_key, item.clone());
            }
            Key::Index(_) => {
                sorted.push(item.clone());
            }
        }
    }
    Ok(Value::from_entries(sorted))
}

/// Sorts the elements of `list` by the value at `dotted_key`, comparing string
/// forms.
///
/// The value is resolved with [`path::walk`]; unresolved paths compare as
/// `Null` (the empty string). The comparison is byte-wise lexicographic on
/// [`Value::to_text`], **not** numeric, and is reversed when `descending` is
/// set. The result is re-indexed as a list.
///
/// ```
/// use dotted::{Value, sort};
/// use serde_json::json;
///
/// let rows = Value::from(json!([
///     {"meta": {"rank": 9}},
///     {"meta": {"rank": 10}},
///     {"meta": {}},
/// ]));
///
/// let sorted = sort::numeric_multisort(&rows, "meta.rank", false)?;
/// assert_eq!(
///     sorted,
///     Value::from(json!([{"meta": {}}, {"meta": {"rank": 10}}, {"meta": {"rank": 9}}]))
/// );
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn numeric_multisort(
    list: &Value,
    dotted_key: &str,
    descending: bool,
) -> Result<Value, ValueError> {
    let list = list.require_container("numeric_multisort")?;

    let mut rows: Vec<(String, &Value)> = list
        .values()
        .map(|item| {
            let text = path::walk(item, dotted_key)
                .map(|found| found.to_text().into_owned())
                .unwrap_or_default();
            (text, item)
        })
        .collect();

    rows.sort_by(|(a, _), (b, _)| {
        let ordering = a.as_bytes().cmp(b.as_bytes());
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    Ok(Value::List(
        rows.into_iter().map(|(_, item)| item.clone()).collect(),
    ))
}
