//! Shared fixtures and assertions for the integration tests.

use dotted::{Key, Value};

/// Build a Value from a JSON literal
pub fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Keys of a container, rendered as strings, in order
pub fn keys_of(value: &Value) -> Vec<String> {
    value.entries().map(|(key, _)| key.to_string()).collect()
}

/// Build a list of keys from string literals
pub fn keys(names: &[&str]) -> Vec<Key> {
    names.iter().map(|name| Key::from(*name)).collect()
}

/// A nested fixture with no empty containers anywhere
pub fn sample_config() -> Value {
    v(serde_json::json!({
        "app": {
            "name": "dotted",
            "debug": false,
            "ratio": 0.75,
        },
        "db": {
            "primary": {"host": "localhost", "port": 5432},
            "replicas": [
                {"host": "r1", "port": 5433},
                {"host": "r2", "port": 5434},
            ],
        },
        "features": ["search", "export"],
        "owner": null,
    }))
}

/// A list of user records used by projection and sorting tests
pub fn sample_users() -> Value {
    v(serde_json::json!([
        {"id": 3, "name": "Carol", "profile": {"age": 41, "city": "Oslo"}},
        {"id": 1, "name": "Alice", "profile": {"age": 9, "city": "Lima"}},
        {"id": 2, "name": "Bob", "profile": {"age": 100, "city": "Kyiv"}},
    ]))
}
