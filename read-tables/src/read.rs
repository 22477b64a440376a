//! Traits and errors for interpreting font data.

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This trait is implemented by tables that are self-describing: the
/// input data is expected to start at the first byte of the table, and
/// `read` is responsible for validating the structure it decodes. On
/// success the returned value owns everything it parsed; it does not
/// borrow from the input.
pub trait FontRead: Sized {
    /// Reads an instance of `Self` from the provided data, performing
    /// validation.
    fn read(data: FontData) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data.
///
/// Decoders fail fast: the first structural violation aborts the parse
/// and no partial structure is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadError {
    /// A read extended past the end of the data.
    OutOfBounds,
    /// A format field held a value the decoder does not recognize.
    // i64 is flexible enough to store any value we might encounter
    InvalidFormat(i64),
    /// A packed offset had a width outside the 1..=4 byte range.
    InvalidOffsetSize(u8),
    /// The paint graph nested deeper than the decoder allows.
    DepthLimitExceeded,
    /// An array length was inconsistent with its contents.
    InvalidArrayLen,
    /// A structural violation not covered by the other variants.
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidFormat(x) => write!(f, "Invalid format '{x}'"),
            ReadError::InvalidOffsetSize(n) => write!(f, "Invalid offset size '{n}'"),
            ReadError::DepthLimitExceeded => write!(f, "Recursion depth limit exceeded"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

impl std::error::Error for ReadError {}
