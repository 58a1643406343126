//! Reading the input document and JSON arguments.

use std::{io::Read, path::Path};

use dotted::Value;

/// Read and parse the JSON document from `path`, or from stdin.
pub fn read_document(path: Option<&Path>) -> dotted::Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    tracing::debug!(bytes = text.len(), "Read input document");
    Ok(serde_json::from_str(&text)?)
}

/// Parse a JSON argument.
pub fn parse_json(text: &str) -> dotted::Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON argument, taking text that is not JSON as a string.
pub fn parse_json_or_text(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Argument is not JSON, using it as a string");
            Value::from(text)
        }
    }
}
