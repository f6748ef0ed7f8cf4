//! Tagged slot values.

/// Slot tag for an absent value.
pub const VAL_NULL: i32 = -1;
/// Slot tag for a length-prefixed UTF-8 string.
pub const VAL_STRING: i32 = 0;
/// Slot tag for a nested parcelable, followed by its creator name and body.
pub const VAL_PARCELABLE: i32 = 4;

/// Header of a tagged slot as read from a parcel.
///
/// For [`Slot::Nested`] only the creator name has been consumed; the entity
/// body still follows in the stream and must be read by the matching
/// [`Parcelable`](crate::Parcelable) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Absent,
    Str(String),
    Nested(String),
}

impl Slot {
    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Absent => "absent",
            Slot::Str(_) => "string",
            Slot::Nested(_) => "parcelable",
        }
    }
}
