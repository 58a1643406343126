//! Tests for dot/undot flattening

use dotted::{Key, Map, Value, path};
use serde_json::json;

use crate::helpers::{keys_of, sample_config, v};

// ===== DOT =====

#[test]
fn test_dot_records_every_scalar_under_its_path() {
    let flat = Value::Map(path::dot(&sample_config(), ""));

    assert_eq!(
        keys_of(&flat),
        vec![
            "app.name",
            "app.debug",
            "app.ratio",
            "db.primary.host",
            "db.primary.port",
            "db.replicas.0.host",
            "db.replicas.0.port",
            "db.replicas.1.host",
            "db.replicas.1.port",
            "features.0",
            "features.1",
            "owner",
        ]
    );
    assert_eq!(flat.get_key(&Key::from("db.replicas.1.port")), Some(&Value::Int(5434)));
    assert_eq!(flat.get_key(&Key::from("owner")), Some(&Value::Null));
}

#[test]
fn test_dot_has_no_container_values() {
    let flat = path::dot(&sample_config(), "");
    assert!(flat.values().all(Value::is_scalar));
}

#[test]
fn test_dot_with_prefix() {
    let value = v(json!({"a": {"b": 1}, "c": 2}));
    let flat = Value::Map(path::dot(&value, "root."));
    assert_eq!(keys_of(&flat), vec!["root.a.b", "root.c"]);

    // The prefix is prepended verbatim
    let flat = Value::Map(path::dot(&value, "x_"));
    assert_eq!(keys_of(&flat), vec!["x_a.b", "x_c"]);
}

#[test]
fn test_dot_drops_empty_containers() {
    let value = v(json!({"a": {}, "b": [], "c": {"d": {}}, "e": 1}));
    let flat = path::dot(&value, "");

    assert_eq!(flat.len(), 1);
    assert_eq!(flat.get(&Key::from("e")), Some(&Value::Int(1)));
}

#[test]
fn test_dot_of_scalar_is_empty() {
    assert!(path::dot(&Value::Int(7), "").is_empty());
    assert!(path::dot(&Value::Null, "p.").is_empty());
}

#[test]
fn test_dot_collision_keeps_last_value() {
    let value = v(json!({"a.b": 1, "a": {"b": 2}}));
    let flat = path::dot(&value, "");

    assert_eq!(flat.len(), 1);
    assert_eq!(flat.get(&Key::from("a.b")), Some(&Value::Int(2)));
}

// ===== UNDOT =====

#[test]
fn test_undot_builds_nested_maps() {
    let flat: Map = [("user.name", "Ada"), ("user.lang", "en"), ("id", "7")]
        .into_iter()
        .collect();

    assert_eq!(
        path::undot(&flat),
        v(json!({"user": {"name": "Ada", "lang": "en"}, "id": "7"}))
    );
}

#[test]
fn test_undot_later_entry_replaces_scalar() {
    let mut flat = Map::new();
    flat.insert("a", 1);
    flat.insert("a.b", 2);

    assert_eq!(path::undot(&flat), v(json!({"a": {"b": 2}})));
}

#[test]
fn test_undot_of_empty_map_is_empty() {
    let nested = path::undot(&Map::new());
    assert_eq!(nested.container_len(), 0);
    assert!(nested.is_container());
}

// ===== ROUND TRIP =====

#[test]
fn test_dot_undot_round_trip() {
    // No empty containers, so the structure survives; list positions come back
    // as integer keys, which compare equal to the original lists
    let original = sample_config();
    let restored = path::undot(&path::dot(&original, ""));
    assert_eq!(restored, original);
}

#[test]
fn test_round_trip_loses_empty_containers() {
    let original = v(json!({"kept": 1, "gone": {}}));
    let restored = path::undot(&path::dot(&original, ""));

    assert_ne!(restored, original);
    assert_eq!(restored, v(json!({"kept": 1})));
}
