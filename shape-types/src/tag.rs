//! Four-byte tags for tables, scripts and features.

use crate::Scalar;

/// An OpenType tag: four bytes of printable ASCII.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag([u8; 4]);

impl Tag {
    /// Constructs a tag from raw bytes.
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }

    /// The raw bytes of the tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    /// The tag as a `u32`, big-endian.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// The tag bytes interpreted as a string, replacing non-ASCII bytes
    /// with '?'.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl Default for Tag {
    fn default() -> Self {
        // The 'null' tag per the OpenType spec.
        Tag([b' '; 4])
    }
}

impl Scalar for Tag {
    type Raw = [u8; 4];

    const RAW_BYTE_LEN: usize = 4;

    fn to_raw(self) -> Self::Raw {
        self.0
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Self(raw)
    }

    fn read(slice: &[u8]) -> Option<Self> {
        slice.get(..4)?.try_into().ok().map(Self)
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Tag(\"{}\")", self.as_str())
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_u32() {
        let latn = Tag::new(b"latn");
        assert_eq!(latn.to_string(), "latn");
        assert_eq!(latn.to_u32(), 0x6C61_746E);
    }
}
