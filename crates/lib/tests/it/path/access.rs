//! Tests for get/get_or/has/walk

use dotted::{Value, path};
use serde_json::json;

use crate::helpers::{sample_config, v};

#[test]
fn test_get_nested_and_indexed() {
    let config = sample_config();

    assert_eq!(path::get(&config, "app.name"), Some(&Value::from("dotted")));
    assert_eq!(path::get(&config, "db.primary.port"), Some(&Value::Int(5432)));
    assert_eq!(path::get(&config, "db.replicas.1.host"), Some(&Value::from("r2")));
    assert_eq!(path::get(&config, "features.0"), Some(&Value::from("search")));
    assert_eq!(path::get(&config, "app.ratio"), Some(&Value::Float(0.75)));
}

#[test]
fn test_get_returns_containers() {
    let config = sample_config();
    let primary = path::get(&config, "db.primary").unwrap();
    assert_eq!(primary, &v(json!({"host": "localhost", "port": 5432})));
}

#[test]
fn test_get_unresolved_paths() {
    let config = sample_config();

    assert_eq!(path::get(&config, "app.missing"), None);
    assert_eq!(path::get(&config, "db.replicas.5"), None);
    // Walking through a scalar does not resolve
    assert_eq!(path::get(&config, "app.name.first"), None);
    assert_eq!(path::get(&config, ""), None);
}

#[test]
fn test_get_on_scalar_root() {
    assert_eq!(path::get(&Value::from("text"), "a"), None);
    assert!(!path::has(&Value::Int(1), "a"));
}

#[test]
fn test_get_literal_key_takes_precedence() {
    let value = v(json!({"a.b": "flat", "a": {"b": "nested"}}));

    assert_eq!(path::get(&value, "a.b"), Some(&Value::from("flat")));
    assert_eq!(path::walk(&value, "a.b"), Some(&Value::from("nested")));
}

#[test]
fn test_get_null_literal_key_falls_back_to_walk() {
    let value = v(json!({"a.b": null, "a": {"b": "nested"}}));
    assert_eq!(path::get(&value, "a.b"), Some(&Value::from("nested")));

    // With nothing to walk to, the null is unreachable through the fast path
    let value = v(json!({"a.b": null}));
    assert_eq!(path::get(&value, "a.b"), None);
}

#[test]
fn test_get_empty_segment_key() {
    let value = v(json!({"": {"": 5}}));
    assert_eq!(path::get(&value, "."), Some(&Value::Int(5)));
}

#[test]
fn test_get_or_default() {
    let config = sample_config();

    assert_eq!(path::get_or(&config, "app.name", "fallback"), Value::from("dotted"));
    assert_eq!(path::get_or(&config, "app.port", 8080), Value::Int(8080));
    // A stored null is returned, not the default
    assert_eq!(path::get_or(&config, "owner", "nobody"), Value::Null);
}

#[test]
fn test_has_treats_null_as_absent() {
    let config = sample_config();

    assert!(path::has(&config, "app.debug"));
    assert!(path::has(&config, "db.replicas.0"));
    assert!(!path::has(&config, "owner"));
    assert!(!path::has(&config, "app.missing"));
}

#[test]
fn test_has_falsy_values() {
    let value = v(json!({"zero": 0, "empty": "", "no": false, "list": []}));

    for key in ["zero", "empty", "no", "list"] {
        assert!(path::has(&value, key), "{key} should be present");
    }
}

#[test]
fn test_walk_does_not_use_literal_key() {
    let value = v(json!({"x.y": 1}));
    assert_eq!(path::walk(&value, "x.y"), None);
    assert_eq!(path::walk(&value, "x"), None);
}
