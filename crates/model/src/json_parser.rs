//! JSON ingest contract.

use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::json_util::{kind, JsonObject};

/// An entity that can be populated from a JSON object.
///
/// Decoding mutates the target in place, so decoding into the same instance
/// from two threads at once must be serialized by the caller.
pub trait JsonParser: Default {
    /// Entity name used in logs and errors.
    const ENTITY: &'static str;

    /// Populates `self` from `json`, field by field.
    ///
    /// Fields whose key is absent keep their current value unless the
    /// entity documents a forced default for them. On error the target is
    /// left in an unspecified state and should be discarded.
    fn read_from_json(&mut self, json: &JsonObject) -> Result<()>;

    /// Decodes a fresh instance from a JSON object.
    fn parse(json: &Value) -> Result<Self> {
        let obj = json.as_object().ok_or_else(|| DecodeError::MalformedJsonStructure {
            key: Self::ENTITY,
            reason: format!("expected object, found {}", kind(json)),
        })?;
        let mut entity = Self::default();
        if let Err(e) = entity.read_from_json(obj) {
            tracing::debug!(entity = Self::ENTITY, error = %e, "JSON decode failed");
            return Err(e);
        }
        Ok(entity)
    }

    /// Decodes every element of a JSON array.
    fn parse_list(json: &Value) -> Result<Vec<Self>> {
        let items = json.as_array().ok_or_else(|| DecodeError::MalformedJsonStructure {
            key: Self::ENTITY,
            reason: format!("expected array, found {}", kind(json)),
        })?;
        items.iter().map(Self::parse).collect()
    }

    /// Parses JSON text and decodes a fresh instance from it.
    fn parse_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::parse(&json)
    }
}
