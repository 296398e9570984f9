//! Request parameter extraction

use serde_json::Value;

use crate::shared::models::{Result, TreeIndexError};

/// Params must be a JSON object; `null` counts as empty
pub fn ensure_object(params: &Value) -> Result<()> {
    match params {
        Value::Object(_) | Value::Null => Ok(()),
        other => Err(TreeIndexError::invalid_argument(format!(
            "params must be an object, got {}",
            type_name(other)
        ))),
    }
}

pub fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    match params.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(TreeIndexError::invalid_argument(format!(
            "'{}' must be a string, got {}",
            key,
            type_name(other)
        ))),
        None => Err(TreeIndexError::invalid_argument(format!(
            "missing required parameter '{}'",
            key
        ))),
    }
}

/// 1-based line number
pub fn required_line(params: &Value, key: &str) -> Result<u32> {
    let value = params.get(key).ok_or_else(|| {
        TreeIndexError::invalid_argument(format!("missing required parameter '{}'", key))
    })?;
    value
        .as_u64()
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            TreeIndexError::invalid_argument(format!(
                "'{}' must be a positive integer, got {}",
                key, value
            ))
        })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
