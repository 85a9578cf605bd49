//! Loading of the aggregated findings document and schema-tolerant field access.
//!
//! The upstream tools emit loosely shaped JSON, so the lookups below treat a
//! missing key, a `null`, or a value of the wrong type as "absent" and hand back
//! the caller's default instead of failing. Severity labels are the exception:
//! see `severity_or`.

use crate::error::{ConvertError, Result};
use serde_json::{Map, Value};
use std::path::Path;

pub fn load(path: &Path) -> Result<Value> {
    tracing::info!(path = %path.display(), "loading findings document");
    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&content).map_err(|source| ConvertError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;
    if !doc.is_object() {
        return Err(ConvertError::NotAnObject(path.to_path_buf()));
    }
    Ok(doc)
}

/// Top-level section of the input document, if it is a mapping.
pub fn section<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|value| value.is_object())
}

pub fn object_at<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

pub fn list_at<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

/// Follows a chain of object keys, e.g. `["extra", "metadata", "file"]`.
pub fn path_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}

pub fn text_or(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(as_text)
        .unwrap_or_else(|| default.to_string())
}

/// Severity label at `key`. Only a missing key takes the default; a present
/// `null` or non-string yields an empty label, which normalises to a warning.
pub fn severity_or(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => String::new(),
    }
}

/// Text form of a scalar; `null` is treated as absent.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Text at `keys`, or `None` when it is absent, `null`, or an empty string.
pub fn non_empty_text(value: &Value, keys: &[&str]) -> Option<String> {
    path_at(value, keys)
        .and_then(as_text)
        .filter(|text| !text.is_empty())
}

/// 1-based line number. Zero, negative, and unusable values all become 1.
pub fn line_of(value: Option<&Value>) -> u64 {
    let line = match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f.trunc() as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    line.filter(|line| *line >= 1).unwrap_or(1)
}
