use std::path::Path;

use serde_json::Value;

use crate::LoadError;

/// Parse the bytes of `path` as a JSON document.
pub(crate) fn parse_json_bytes(path: &Path, bytes: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

/// Parse a document that must be a JSON array, returning its elements.
pub(crate) fn parse_json_array(path: &Path, bytes: &[u8]) -> Result<Vec<Value>, LoadError> {
    match parse_json_bytes(path, bytes)? {
        Value::Array(items) => Ok(items),
        other => Err(LoadError::Shape {
            path: path.to_path_buf(),
            reason: format!("expected a JSON array of records, found {}", json_kind(&other)),
        }),
    }
}

/// Parse a document that must be a GeoJSON FeatureCollection (an object with a `features` array).
pub(crate) fn parse_feature_collection(path: &Path, bytes: &[u8]) -> Result<Value, LoadError> {
    let value = parse_json_bytes(path, bytes)?;
    match value.get("features") {
        Some(Value::Array(_)) => Ok(value),
        _ => Err(LoadError::Shape {
            path: path.to_path_buf(),
            reason: format!("expected a FeatureCollection with a `features` array, found {}", json_kind(&value)),
        }),
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
