//! Tests for multisort and numeric_multisort

use dotted::{Key, Map, Value, ValueError, filter, sort};
use serde_json::json;

use crate::helpers::{keys_of, sample_users, v};

fn names(sorted: &Value) -> Value {
    filter::pluck(sorted, "name", None).unwrap()
}

// ===== MULTISORT =====

#[test]
fn test_multisort_ascending_and_descending() -> dotted::Result<()> {
    let users = sample_users();

    let ascending = sort::multisort(&users, "id", false)?;
    assert_eq!(names(&ascending), v(json!(["Alice", "Bob", "Carol"])));

    let descending = sort::multisort(&users, "id", true)?;
    assert_eq!(names(&descending), v(json!(["Carol", "Bob", "Alice"])));
    Ok(())
}

#[test]
fn test_multisort_compares_numerically() -> dotted::Result<()> {
    let rows = v(json!([{"n": "10"}, {"n": 9}, {"n": "9.5"}, {"n": "abc"}]));
    let sorted = sort::multisort(&rows, "n", false)?;

    assert_eq!(
        sorted,
        v(json!([{"n": "abc"}, {"n": 9}, {"n": "9.5"}, {"n": "10"}]))
    );
    Ok(())
}

#[test]
fn test_multisort_is_stable() -> dotted::Result<()> {
    let rows = v(json!([
        {"n": 1, "tag": "first"},
        {"n": 0},
        {"n": 1, "tag": "second"},
    ]));

    let sorted = sort::multisort(&rows, "n", false)?;
    assert_eq!(
        filter::pluck(&sorted, "tag", None)?,
        v(json!([null, "first", "second"]))
    );

    let sorted = sort::multisort(&rows, "n", true)?;
    assert_eq!(
        filter::pluck(&sorted, "tag", None)?,
        v(json!(["first", "second", null]))
    );
    Ok(())
}

#[test]
fn test_multisort_does_not_traverse_dots() {
    // "profile.age" is not a column of any row
    let err = sort::multisort(&sample_users(), "profile.age", false).unwrap_err();
    assert!(err.is_missing_column());
}

#[test]
fn test_multisort_row_without_column_fails() {
    let rows = v(json!({"a": {"k": 3}, "b": {"x": 1}, "c": {"k": 2}}));
    let err = sort::multisort(&rows, "k", false).unwrap_err();

    assert_eq!(
        err,
        ValueError::MissingColumn {
            row: Key::from("b"),
            column: "k".to_string(),
        }
    );
    assert_eq!(err.to_string(), r#"Row b has no sort column "k""#);

    // Scalar rows have no columns either
    let rows = v(json!([{"k": 1}, 5]));
    assert!(sort::multisort(&rows, "k", false).unwrap_err().is_missing_column());
}

#[test]
fn test_multisort_with_nan_cells() -> dotted::Result<()> {
    let rows: Vec<Value> = (0..64)
        .map(|i| {
            let cell = if i % 3 == 0 {
                Value::Float(f64::NAN)
            } else {
                Value::Int(64 - i)
            };
            let mut row = Map::new();
            row.insert("i", i);
            row.insert("k", cell);
            Value::Map(row)
        })
        .collect();
    let list = Value::List(rows);

    let sorted = sort::multisort(&list, "k", false)?;
    let cells: Vec<f64> = sorted
        .values()
        .map(|row| row.get_key(&Key::from("k")).map_or(0.0, Value::to_number))
        .collect();

    assert_eq!(cells.len(), 64);
    // Numbers ascend, then every NAN cell follows
    let numbers = cells.iter().take_while(|n| !n.is_nan()).count();
    assert_eq!(numbers, 42);
    assert!(cells[..numbers].windows(2).all(|w| w[0] <= w[1]));
    assert!(cells[numbers..].iter().all(|n| n.is_nan()));

    let descending = sort::multisort(&list, "k", true)?;
    let first = descending.values().next().and_then(|row| row.get_key(&Key::from("k")));
    assert!(first.is_some_and(|cell| cell.to_number().is_nan()));
    Ok(())
}

#[test]
fn test_multisort_map_keeps_name_keys() -> dotted::Result<()> {
    let rows = v(json!({"b": {"n": 2}, "a": {"n": 3}, "c": {"n": 1}}));
    let sorted = sort::multisort(&rows, "n", false)?;

    assert_eq!(keys_of(&sorted), vec!["c", "b", "a"]);
    Ok(())
}

#[test]
fn test_multisort_empty_list() -> dotted::Result<()> {
    let empty = v(json!([]));
    assert_eq!(sort::multisort(&empty, "n", false)?, empty);
    Ok(())
}

// ===== NUMERIC MULTISORT =====

#[test]
fn test_numeric_multisort_compares_string_forms() -> dotted::Result<()> {
    let users = sample_users();

    // Ages 41, 9, 100 compare as "100" < "41" < "9"
    let ascending = sort::numeric_multisort(&users, "profile.age", false)?;
    assert_eq!(names(&ascending), v(json!(["Bob", "Carol", "Alice"])));

    let descending = sort::numeric_multisort(&users, "profile.age", true)?;
    assert_eq!(names(&descending), v(json!(["Alice", "Carol", "Bob"])));
    Ok(())
}

#[test]
fn test_numeric_multisort_by_text_path() -> dotted::Result<()> {
    let users = sample_users();
    let sorted = sort::numeric_multisort(&users, "profile.city", false)?;
    assert_eq!(names(&sorted), v(json!(["Bob", "Alice", "Carol"])));
    Ok(())
}

#[test]
fn test_numeric_multisort_reindexes() -> dotted::Result<()> {
    let rows = v(json!({"x": {"k": "b"}, "y": {"k": "a"}}));
    let sorted = sort::numeric_multisort(&rows, "k", false)?;

    assert!(matches!(sorted, Value::List(_)));
    assert_eq!(sorted, v(json!([{"k": "a"}, {"k": "b"}])));
    Ok(())
}

#[test]
fn test_sorts_reject_scalars() {
    assert!(sort::multisort(&Value::Int(1), "n", false).unwrap_err().is_not_a_container());
    assert_eq!(
        sort::numeric_multisort(&Value::Null, "n", false)
            .unwrap_err()
            .operation(),
        Some("numeric_multisort")
    );
}
