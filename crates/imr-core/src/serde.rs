//! Canonical JSON helpers with deterministic key ordering.

use std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, ImrError};

fn serde_error(code: &str, err: impl ToString) -> ImrError {
    ImrError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<_, _> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ImrError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Serializes a value into a pretty-printed canonical JSON string.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, ImrError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_string_pretty(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Restores a value from JSON text.
pub fn from_json_str<T: for<'de> Deserialize<'de>>(data: &str) -> Result<T, ImrError> {
    serde_json::from_str(data).map_err(|err| serde_error("json-read", err))
}
