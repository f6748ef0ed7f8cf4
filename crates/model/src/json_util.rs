//! Permissive field extraction from parsed JSON objects.
//!
//! The `opt_*` helpers never fail: a missing, null or mismatched value falls
//! back to the caller's default. The `get_*` helpers are strict and are used
//! only where a malformed value must abort the decode.

use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

pub type JsonObject = Map<String, Value>;

/// Returns the value under `key` unless it is missing or JSON null.
pub fn non_null<'a>(json: &'a JsonObject, key: &str) -> Option<&'a Value> {
    match json.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Renders any non-null JSON value as a string.
///
/// Strings are taken as-is, scalars use their textual form and containers
/// their JSON text.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Reads a number under `key`, accepting numeric strings.
pub fn opt_double(json: &JsonObject, key: &str, fallback: f64) -> f64 {
    match json.get(key) {
        None | Some(Value::Null) => fallback,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(fallback),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::trace!(key, fallback, "non-numeric string, using default");
            fallback
        }),
        Some(other) => {
            tracing::trace!(key, fallback, kind = kind(other), "not a number, using default");
            fallback
        }
    }
}

/// Reads an integer under `key`.
///
/// Fractional values truncate toward zero; out-of-range values saturate.
pub fn opt_int(json: &JsonObject, key: &str, fallback: i32) -> i32 {
    match json.get(key) {
        None | Some(Value::Null) => fallback,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            None => n.as_f64().map(|f| f as i32).unwrap_or(fallback),
        },
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) => f as i32,
            Err(_) => {
                tracing::trace!(key, fallback, "non-numeric string, using default");
                fallback
            }
        },
        Some(other) => {
            tracing::trace!(key, fallback, kind = kind(other), "not a number, using default");
            fallback
        }
    }
}

/// Maps a JSON array onto strings element-wise.
///
/// Null elements are skipped; anything other than an array yields an empty
/// list.
pub fn get_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(coerce_string).collect(),
        Some(other) => {
            tracing::trace!(kind = kind(other), "not an array, using empty list");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Requires `value` to be a JSON object.
pub fn get_object<'a>(key: &'static str, value: &'a Value) -> Result<&'a JsonObject> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::structure(key, format!("expected object, found {}", kind(value))))
}

/// Requires `value` to be a JSON string.
pub fn get_str<'a>(key: &'static str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::structure(key, format!("expected string, found {}", kind(value))))
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn non_null_treats_missing_and_null_alike() {
        let json = obj(json!({"a": null, "b": 0}));
        assert!(non_null(&json, "a").is_none());
        assert!(non_null(&json, "missing").is_none());
        assert_eq!(non_null(&json, "b"), Some(&json!(0)));
    }

    #[test]
    fn coerce_string_matrix() {
        assert_eq!(coerce_string(&json!("x")), Some("x".to_string()));
        assert_eq!(coerce_string(&json!(42)), Some("42".to_string()));
        assert_eq!(coerce_string(&json!(4.5)), Some("4.5".to_string()));
        assert_eq!(coerce_string(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_string(&json!({"k": 1})), Some("{\"k\":1}".to_string()));
        assert_eq!(coerce_string(&json!(null)), None);
    }

    #[test]
    fn opt_double_matrix() {
        let json = obj(json!({
            "n": 4.5,
            "i": 3,
            "s": " 2.25 ",
            "bad": "abc",
            "b": true,
            "z": null
        }));
        assert_eq!(opt_double(&json, "n", 0.0), 4.5);
        assert_eq!(opt_double(&json, "i", 0.0), 3.0);
        assert_eq!(opt_double(&json, "s", 0.0), 2.25);
        assert_eq!(opt_double(&json, "bad", 0.0), 0.0);
        assert_eq!(opt_double(&json, "b", -1.0), -1.0);
        assert_eq!(opt_double(&json, "z", -1.0), -1.0);
        assert_eq!(opt_double(&json, "missing", 0.0), 0.0);
    }

    #[test]
    fn opt_int_matrix() {
        let json = obj(json!({
            "i": 42,
            "f": -7.9,
            "s": "12",
            "big": 10_000_000_000_i64,
            "bad": [1]
        }));
        assert_eq!(opt_int(&json, "i", 0), 42);
        assert_eq!(opt_int(&json, "f", 0), -7);
        assert_eq!(opt_int(&json, "s", 0), 12);
        assert_eq!(opt_int(&json, "big", 0), i32::MAX);
        assert_eq!(opt_int(&json, "bad", 0), 0);
        assert_eq!(opt_int(&json, "missing", 0), 0);
    }

    #[test]
    fn string_list_coerces_and_skips_nulls() {
        let value = json!(["a", 1, null, false]);
        assert_eq!(
            get_string_list(Some(&value)),
            vec!["a".to_string(), "1".to_string(), "false".to_string()]
        );
        assert!(get_string_list(Some(&json!("a"))).is_empty());
        assert!(get_string_list(None).is_empty());
    }

    #[test]
    fn strict_getters_name_the_key() {
        let err = get_object("location", &json!("nope")).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedJsonStructure { key: "location", .. }
        ));
        let err = get_str("url", &json!(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed JSON structure at `url`: expected string, found number"
        );
    }
}
