//! Decode error type.

use parcelgen_parcel::ParcelError;
use thiserror::Error;

/// Fatal failure of an entity decode.
///
/// Type-mismatched or absent optional JSON fields are not errors; they
/// resolve to the field's default and decoding continues.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed parcel stream: {0}")]
    MalformedStream(#[from] ParcelError),
    #[error("malformed JSON structure at `{key}`: {reason}")]
    MalformedJsonStructure { key: &'static str, reason: String },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn structure(key: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::MalformedJsonStructure {
            key,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
