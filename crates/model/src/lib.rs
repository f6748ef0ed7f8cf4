//! Business and Location entities with two independent wire contracts.
//!
//! - Parcel: a compact position-based binary encoding for handing entities
//!   between components, via [`Parcelable`].
//! - JSON: tolerant, ingest-only decoding of search service payloads, via
//!   [`JsonParser`].
//!
//! JSON null handling differs per field and is kept as-is because consumers
//! depend on it: list fields of [`Location`] and its `geo_accuracy` are reset
//! to their defaults when their key is missing or null, while optional strings
//! and [`Business::location`] keep whatever value they held.
//!
//! # Example
//!
//! ```
//! use parcelgen_model::{Business, JsonParser};
//!
//! let business = Business::parse_str(
//!     r#"{"id":"abc123","name":"Joe's Diner","review_count":42,"rating":4.5}"#,
//! )
//! .unwrap();
//! assert_eq!(business.review_count, 42);
//!
//! let bin = business.to_parcel_bytes();
//! assert_eq!(Business::from_parcel_bytes(&bin).unwrap(), business);
//! ```

mod business;
mod error;
mod json_parser;
mod location;

pub mod json_util;

pub use business::Business;
pub use error::{DecodeError, Result};
pub use json_parser::JsonParser;
pub use location::{Location, GEO_ACCURACY_UNKNOWN};

pub use parcelgen_parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};
