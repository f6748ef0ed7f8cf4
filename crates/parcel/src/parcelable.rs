//! Per-entity encode/decode contract.

use crate::{ParcelError, ParcelReader, ParcelWriter};

/// A type with a fixed, position-based parcel layout.
///
/// `write_to_parcel` and `read_from_parcel` must visit fields in the same
/// order; that order is the wire format.
pub trait Parcelable: Sized {
    /// Creator name written into tagged slots so a reader can check that the
    /// nested body belongs to the expected type.
    const CREATOR: &'static str;

    fn write_to_parcel(&self, parcel: &mut ParcelWriter);

    /// Overwrites every field of `self` from `source`.
    fn read_from_parcel(&mut self, source: &mut ParcelReader<'_>) -> Result<(), ParcelError>;

    /// Builds a fresh value and fills it from `source`.
    fn create_from_parcel(source: &mut ParcelReader<'_>) -> Result<Self, ParcelError>
    where
        Self: Default,
    {
        let mut value = Self::default();
        value.read_from_parcel(source)?;
        Ok(value)
    }
}

/// Encodes `value` into a standalone byte buffer.
pub fn marshall<T: Parcelable>(value: &T) -> Vec<u8> {
    let mut writer = ParcelWriter::new();
    value.write_to_parcel(&mut writer);
    writer.flush()
}

/// Decodes a `T` from a buffer produced by [`marshall`].
///
/// The whole buffer must be consumed.
pub fn unmarshall<T: Parcelable + Default>(data: &[u8]) -> Result<T, ParcelError> {
    let mut reader = ParcelReader::new(data);
    let value = T::create_from_parcel(&mut reader)?;
    match reader.remaining() {
        0 => Ok(value),
        n => Err(ParcelError::TrailingBytes(n)),
    }
}
