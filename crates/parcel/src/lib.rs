//! Position-based binary parcel encoding.
//!
//! A parcel is a flat byte stream with no field names: an entity writes its
//! fields in declaration order and reads them back in the same order. Nullable
//! strings and nested entities travel in self-describing tagged slots, numeric
//! fields are written raw and fixed-width.
//!
//! # Overview
//!
//! - [`ParcelWriter`] - Appends primitives, slots and lists to a growable buffer
//! - [`ParcelReader`] - Bounds-checked cursor over an encoded parcel
//! - [`Slot`] - The closed set of values a tagged slot can hold
//! - [`Parcelable`] - Per-entity encode/decode contract
//! - [`ParcelWriter::write_uri`] / [`ParcelReader::read_uri`] - URI slots
//!
//! # Example
//!
//! ```
//! use parcelgen_parcel::{ParcelReader, ParcelWriter};
//!
//! let mut writer = ParcelWriter::new();
//! writer.write_string_value(Some("Austin"));
//! writer.write_double(30.27);
//! writer.write_int(42);
//! let data = writer.flush();
//!
//! let mut reader = ParcelReader::new(&data);
//! assert_eq!(reader.read_string_value().unwrap().as_deref(), Some("Austin"));
//! assert_eq!(reader.read_double().unwrap(), 30.27);
//! assert_eq!(reader.read_int().unwrap(), 42);
//! ```

mod parcelable;
mod reader;
mod uri;
mod value;
mod writer;

pub use parcelable::{marshall, unmarshall, Parcelable};
pub use reader::ParcelReader;
pub use uri::URI_CREATOR;
pub use value::{Slot, VAL_NULL, VAL_PARCELABLE, VAL_STRING};
pub use writer::ParcelWriter;

use thiserror::Error;

/// Error type for parcel decoding.
///
/// Every variant means the stream is malformed for the entity being read;
/// there is no partial-success mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParcelError {
    #[error("unexpected end of parcel")]
    UnexpectedEof,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid length prefix: {0}")]
    InvalidLength(i32),
    #[error("unknown slot tag: {0}")]
    UnknownTag(i32),
    #[error("expected {expected} slot, found {found}")]
    UnexpectedSlot {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expected parcelable `{expected}`, found `{found}`")]
    UnknownCreator { expected: &'static str, found: String },
    #[error("null element in list")]
    NullElement,
    #[error("invalid URI in parcel: {0}")]
    InvalidUri(String),
    #[error("{0} trailing bytes after parcel")]
    TrailingBytes(usize),
}
