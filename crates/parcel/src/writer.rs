//! Parcel writer with auto-growing capacity.

use crate::parcelable::Parcelable;
use crate::value::{VAL_NULL, VAL_PARCELABLE, VAL_STRING};

/// Appends parcel primitives to a buffer that grows as needed.
///
/// All multi-byte values are big-endian.
///
/// # Example
///
/// ```
/// use parcelgen_parcel::ParcelWriter;
///
/// let mut writer = ParcelWriter::new();
/// writer.write_int(1);
/// writer.write_string(Some("ab"));
/// assert_eq!(writer.flush(), [0, 0, 0, 1, 0, 0, 0, 2, b'a', b'b']);
/// ```
pub struct ParcelWriter {
    uint8: Vec<u8>,
    /// Position where last flush happened.
    x0: usize,
    x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for ParcelWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParcelWriter {
    /// Creates a new writer with the default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    fn raw(&mut self, bytes: &[u8]) {
        let length = bytes.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(bytes);
        self.x += length;
    }

    /// Writes a 32-bit signed integer.
    #[inline]
    pub fn write_int(&mut self, val: i32) {
        self.raw(&val.to_be_bytes());
    }

    /// Writes a 64-bit float.
    #[inline]
    pub fn write_double(&mut self, val: f64) {
        self.raw(&val.to_be_bytes());
    }

    /// Writes a nullable string: byte length then UTF-8 bytes, `-1` for `None`.
    ///
    /// # Panics
    ///
    /// Panics if the string is longer than `i32::MAX` bytes.
    pub fn write_string(&mut self, val: Option<&str>) {
        match val {
            Some(s) => {
                let bytes = s.as_bytes();
                self.write_int(frame_len(bytes.len()));
                self.raw(bytes);
            }
            None => self.write_int(-1),
        }
    }

    /// Writes an absent tagged slot.
    pub fn write_value_null(&mut self) {
        self.write_int(VAL_NULL);
    }

    /// Writes a string tagged slot, or an absent slot for `None`.
    pub fn write_string_value(&mut self, val: Option<&str>) {
        match val {
            Some(s) => {
                self.write_int(VAL_STRING);
                self.write_string(Some(s));
            }
            None => self.write_value_null(),
        }
    }

    /// Writes a count-prefixed list of strings.
    ///
    /// An empty list and a list that was never populated share the same
    /// encoding (count `0`).
    ///
    /// # Panics
    ///
    /// Panics if the list or one of its strings exceeds `i32::MAX`.
    pub fn write_string_list(&mut self, list: &[String]) {
        self.write_int(frame_len(list.len()));
        for s in list {
            self.write_string(Some(s));
        }
    }

    /// Writes a nested entity as a tagged slot.
    pub fn write_parcelable<T: Parcelable>(&mut self, val: Option<&T>) {
        match val {
            Some(v) => {
                self.write_int(VAL_PARCELABLE);
                self.write_string(Some(T::CREATOR));
                v.write_to_parcel(self);
            }
            None => self.write_value_null(),
        }
    }

    /// Writes a count-prefixed list of entities, each preceded by a presence
    /// flag.
    ///
    /// # Panics
    ///
    /// Panics if the list has more than `i32::MAX` elements.
    pub fn write_typed_list<T: Parcelable>(&mut self, list: &[T]) {
        self.write_int(frame_len(list.len()));
        for item in list {
            self.write_int(1);
            item.write_to_parcel(self);
        }
    }
}

/// Converts a byte length or element count to its `i32` prefix.
fn frame_len(len: usize) -> i32 {
    match i32::try_from(len) {
        Ok(n) => n,
        Err(_) => panic!("length {len} does not fit a parcel length prefix"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_int() {
        let mut writer = ParcelWriter::new();
        writer.write_int(0x01020304);
        assert_eq!(writer.flush(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_write_int_negative() {
        let mut writer = ParcelWriter::new();
        writer.write_int(-1);
        assert_eq!(writer.flush(), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_write_double() {
        let mut writer = ParcelWriter::new();
        writer.write_double(-1.0);
        let data = writer.flush();
        assert_eq!(data.len(), 8);
        assert_eq!(f64::from_be_bytes(data.try_into().unwrap()), -1.0);
    }

    #[test]
    fn test_write_string_none() {
        let mut writer = ParcelWriter::new();
        writer.write_string(None);
        assert_eq!(writer.flush(), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_write_string_utf8_length_is_bytes() {
        let mut writer = ParcelWriter::new();
        writer.write_string(Some("café"));
        let data = writer.flush();
        assert_eq!(&data[..4], &[0, 0, 0, 5]);
        assert_eq!(&data[4..], "café".as_bytes());
    }

    #[test]
    fn test_string_value_slots() {
        let mut writer = ParcelWriter::new();
        writer.write_string_value(None);
        writer.write_string_value(Some("x"));
        assert_eq!(
            writer.flush(),
            [0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0, 0, 0, 0, 1, b'x']
        );
    }

    #[test]
    fn test_empty_string_list_is_zero_count() {
        let mut writer = ParcelWriter::new();
        writer.write_string_list(&[]);
        assert_eq!(writer.flush(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_grows_past_alloc_size() {
        let mut writer = ParcelWriter::with_alloc_size(4);
        for i in 0..10 {
            writer.write_int(i);
        }
        assert_eq!(writer.len(), 40);
        let data = writer.flush();
        assert_eq!(&data[36..], &[0, 0, 0, 9]);
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = ParcelWriter::new();
        writer.write_int(1);
        assert_eq!(writer.flush(), [0, 0, 0, 1]);
        assert!(writer.is_empty());
        writer.write_int(2);
        assert_eq!(writer.flush(), [0, 0, 0, 2]);
    }

    #[test]
    fn test_frame_len_at_limit() {
        assert_eq!(frame_len(0), 0);
        assert_eq!(frame_len(i32::MAX as usize), i32::MAX);
    }

    #[test]
    #[should_panic(expected = "does not fit a parcel length prefix")]
    fn test_frame_len_rejects_oversized() {
        frame_len(i32::MAX as usize + 1);
    }
}
