//! Tests for set/forget

use dotted::{Value, path};
use serde_json::json;

use crate::helpers::{keys_of, sample_config, v};

// ===== SET =====

#[test]
fn test_set_creates_intermediate_maps() -> dotted::Result<()> {
    let mut value = Value::empty_map();
    path::set(&mut value, "server.tls.cert", "/etc/cert.pem")?;

    assert_eq!(
        value,
        v(json!({"server": {"tls": {"cert": "/etc/cert.pem"}}}))
    );
    Ok(())
}

#[test]
fn test_set_then_get_is_consistent() -> dotted::Result<()> {
    let mut config = sample_config();
    for (key, written) in [
        ("app.name", Value::from("renamed")),
        ("db.primary.port", Value::Int(6543)),
        ("cache.ttl", Value::Float(1.5)),
        ("features.2", Value::from("import")),
    ] {
        path::set(&mut config, key, written.clone())?;
        assert_eq!(path::get(&config, key), Some(&written), "{key}");
    }
    Ok(())
}

#[test]
fn test_set_replaces_scalar_in_the_way() -> dotted::Result<()> {
    let mut value = v(json!({"a": "scalar", "b": null}));
    path::set(&mut value, "a.x", 1)?;
    path::set(&mut value, "b.y", 2)?;

    assert_eq!(value, v(json!({"a": {"x": 1}, "b": {"y": 2}})));
    Ok(())
}

#[test]
fn test_set_overwrites_container_at_final_segment() -> dotted::Result<()> {
    let mut value = v(json!({"a": {"b": {"c": 1}}}));
    path::set(&mut value, "a.b", "flat")?;

    assert_eq!(value, v(json!({"a": {"b": "flat"}})));
    Ok(())
}

#[test]
fn test_set_on_scalar_root_is_an_error() {
    let mut value = Value::from("text");
    let err = path::set(&mut value, "a", 1).unwrap_err();

    assert!(err.is_not_a_container());
    assert_eq!(value, Value::from("text"));

    let err: dotted::Error = err.into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "value");
}

#[test]
fn test_set_list_positions() -> dotted::Result<()> {
    let mut value = v(json!({"tags": ["a", "b"]}));

    // Next index keeps the list
    path::set(&mut value, "tags.2", "c")?;
    assert!(matches!(path::get(&value, "tags"), Some(Value::List(list)) if list.len() == 3));

    // An index past the end turns it into a map without shifting keys
    path::set(&mut value, "tags.9", "z")?;
    let tags = path::get(&value, "tags").unwrap();
    assert!(matches!(tags, Value::Map(_)));
    assert_eq!(keys_of(tags), vec!["0", "1", "2", "9"]);
    Ok(())
}

// ===== FORGET =====

#[test]
fn test_forget_nested_and_top_level() {
    let mut config = sample_config();
    path::forget(&mut config, ["app.debug", "owner", "db"]);

    assert_eq!(
        config,
        v(json!({
            "app": {"name": "dotted", "ratio": 0.75},
            "features": ["search", "export"],
        }))
    );
}

#[test]
fn test_forget_is_idempotent() {
    let mut once = sample_config();
    path::forget(&mut once, ["db.primary.host"]);

    let mut twice = once.clone();
    path::forget(&mut twice, ["db.primary.host"]);

    assert_eq!(once, twice);
    assert_eq!(path::get(&once, "db.primary.host"), None);
}

#[test]
fn test_forget_missing_paths_is_noop() {
    let mut config = sample_config();
    path::forget(&mut config, ["nope", "app.nope"]);
    assert_eq!(config, sample_config());

    let no_paths: [&str; 0] = [];
    path::forget(&mut config, no_paths);
    assert_eq!(config, sample_config());
}

#[test]
fn test_forget_walk_stays_at_level_past_missing_segment() {
    // "x" is absent, so "b" is removed from the root
    let mut value = v(json!({"a": 1, "b": 2}));
    path::forget(&mut value, ["x.b"]);
    assert_eq!(value, v(json!({"a": 1})));

    // "a" is a scalar, so the walk does not descend into it either
    let mut value = v(json!({"a": 1, "b": 2}));
    path::forget(&mut value, ["a.b"]);
    assert_eq!(value, v(json!({"a": 1})));

    // Descent resumes at the next segment that names a container
    let mut value = v(json!({"a": {"c": 2, "d": 3}}));
    path::forget(&mut value, ["x.a.c"]);
    assert_eq!(value, v(json!({"a": {"d": 3}})));
}

#[test]
fn test_forget_list_elements() {
    let mut value = v(json!(["a", "b", "c"]));
    path::forget(&mut value, ["2"]);
    assert_eq!(value, v(json!(["a", "b"])));

    let mut value = v(json!(["a", "b", "c"]));
    path::forget(&mut value, ["0"]);
    // Remaining keys are unchanged, so the result is no longer a list
    assert_eq!(keys_of(&value), vec!["1", "2"]);
}

#[test]
fn test_forget_on_scalar_is_noop() {
    let mut value = Value::Int(5);
    path::forget(&mut value, ["a"]);
    assert_eq!(value, Value::Int(5));
}
