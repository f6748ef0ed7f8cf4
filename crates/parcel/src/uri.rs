//! URI slots.
//!
//! A URI travels as a nested slot with creator name [`URI_CREATOR`] and its
//! text as the body.

use url::Url;

use crate::value::VAL_PARCELABLE;
use crate::{ParcelError, ParcelReader, ParcelWriter};

/// Creator name of URI slots.
pub const URI_CREATOR: &str = "Uri";

impl ParcelWriter {
    /// Writes a URI slot, or an absent slot for `None`.
    pub fn write_uri(&mut self, val: Option<&Url>) {
        match val {
            Some(url) => {
                self.write_int(VAL_PARCELABLE);
                self.write_string(Some(URI_CREATOR));
                self.write_string(Some(url.as_str()));
            }
            None => self.write_value_null(),
        }
    }
}

impl ParcelReader<'_> {
    /// Reads a URI slot. The body must be a non-null absolute URI.
    pub fn read_uri(&mut self) -> Result<Option<Url>, ParcelError> {
        if !self.read_nested_header(URI_CREATOR)? {
            return Ok(None);
        }
        let s = self
            .read_string()?
            .ok_or(ParcelError::InvalidUri(String::from("null")))?;
        Url::parse(&s)
            .map(Some)
            .map_err(|e| ParcelError::InvalidUri(format!("{s}: {e}")))
    }
}
