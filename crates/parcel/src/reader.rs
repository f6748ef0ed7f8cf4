//! Parcel reader with cursor tracking.

use std::str;

use crate::parcelable::Parcelable;
use crate::value::{Slot, VAL_NULL, VAL_PARCELABLE, VAL_STRING};
use crate::ParcelError;

/// Reads parcel primitives from a byte slice.
///
/// Every read is bounds-checked: running out of data returns
/// [`ParcelError::UnexpectedEof`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use parcelgen_parcel::{ParcelError, ParcelReader};
///
/// let data = [0x00, 0x00, 0x00, 0x2a, 0x00];
/// let mut reader = ParcelReader::new(&data);
///
/// assert_eq!(reader.read_int(), Ok(42));
/// assert_eq!(reader.read_int(), Err(ParcelError::UnexpectedEof));
/// ```
pub struct ParcelReader<'a> {
    uint8: &'a [u8],
    x: usize,
}

impl<'a> ParcelReader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), ParcelError> {
        if n > self.remaining() {
            Err(ParcelError::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    fn buf(&mut self, size: usize) -> Result<&'a [u8], ParcelError> {
        self.check(size)?;
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        Ok(bin)
    }

    /// Reads a 32-bit signed integer.
    #[inline]
    pub fn read_int(&mut self) -> Result<i32, ParcelError> {
        self.check(4)?;
        let val = i32::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a 64-bit float.
    #[inline]
    pub fn read_double(&mut self) -> Result<f64, ParcelError> {
        self.check(8)?;
        let val = f64::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
            self.uint8[self.x + 4],
            self.uint8[self.x + 5],
            self.uint8[self.x + 6],
            self.uint8[self.x + 7],
        ]);
        self.x += 8;
        Ok(val)
    }

    /// Reads a nullable length-prefixed string.
    pub fn read_string(&mut self) -> Result<Option<String>, ParcelError> {
        let start = self.x;
        let length = self.read_int()?;
        if length == -1 {
            return Ok(None);
        }
        if length < 0 {
            self.x = start;
            return Err(ParcelError::InvalidLength(length));
        }
        let bytes = match self.buf(length as usize) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.x = start;
                return Err(e);
            }
        };
        match str::from_utf8(bytes) {
            Ok(s) => Ok(Some(s.to_owned())),
            Err(_) => {
                self.x = start;
                Err(ParcelError::InvalidUtf8)
            }
        }
    }

    /// Reads a tagged slot header.
    ///
    /// For a nested slot the entity body is left in the stream.
    pub fn read_value(&mut self) -> Result<Slot, ParcelError> {
        match self.read_int()? {
            VAL_NULL => Ok(Slot::Absent),
            VAL_STRING => match self.read_string()? {
                Some(s) => Ok(Slot::Str(s)),
                None => Ok(Slot::Absent),
            },
            VAL_PARCELABLE => match self.read_string()? {
                Some(creator) => Ok(Slot::Nested(creator)),
                None => Ok(Slot::Absent),
            },
            tag => Err(ParcelError::UnknownTag(tag)),
        }
    }

    /// Reads a tagged slot that must hold a string or nothing.
    pub fn read_string_value(&mut self) -> Result<Option<String>, ParcelError> {
        match self.read_value()? {
            Slot::Absent => Ok(None),
            Slot::Str(s) => Ok(Some(s)),
            other => Err(ParcelError::UnexpectedSlot {
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    /// Reads a count-prefixed list of strings.
    pub fn read_string_list(&mut self) -> Result<Vec<String>, ParcelError> {
        let count = self.read_int()?;
        if count == -1 {
            return Ok(Vec::new());
        }
        if count < 0 {
            return Err(ParcelError::InvalidLength(count));
        }
        // Each element needs at least its 4-byte length prefix.
        self.check((count as usize).saturating_mul(4))?;
        let mut list = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match self.read_string()? {
                Some(s) => list.push(s),
                None => return Err(ParcelError::NullElement),
            }
        }
        Ok(list)
    }

    /// Reads the header of a tagged slot that must hold a body created by
    /// `creator` or nothing. Returns `true` when the body follows.
    pub(crate) fn read_nested_header(&mut self, creator: &'static str) -> Result<bool, ParcelError> {
        match self.read_value()? {
            Slot::Absent => Ok(false),
            Slot::Nested(found) if found == creator => Ok(true),
            Slot::Nested(found) => Err(ParcelError::UnknownCreator {
                expected: creator,
                found,
            }),
            other => Err(ParcelError::UnexpectedSlot {
                expected: "parcelable",
                found: other.kind(),
            }),
        }
    }

    /// Reads a tagged slot that must hold a `T` or nothing.
    pub fn read_parcelable<T: Parcelable + Default>(&mut self) -> Result<Option<T>, ParcelError> {
        if self.read_nested_header(T::CREATOR)? {
            T::create_from_parcel(self).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Reads a count-prefixed list of entities written by
    /// [`ParcelWriter::write_typed_list`](crate::ParcelWriter::write_typed_list).
    pub fn read_typed_list<T: Parcelable + Default>(&mut self) -> Result<Vec<T>, ParcelError> {
        let count = self.read_int()?;
        if count == -1 {
            return Ok(Vec::new());
        }
        if count < 0 {
            return Err(ParcelError::InvalidLength(count));
        }
        self.check((count as usize).saturating_mul(4))?;
        let mut list = Vec::with_capacity(count as usize);
        for _ in 0..count {
            if self.read_int()? == 0 {
                return Err(ParcelError::NullElement);
            }
            list.push(T::create_from_parcel(self)?);
        }
        Ok(list)
    }
}
