//! Glyph identifiers.

use crate::raw::newtype_scalar;

/// A 16-bit glyph identifier.
///
/// This is the identifier used within font tables; the wider [`GlyphId`]
/// exists for API surfaces that may also address glyphs beyond the 16-bit
/// range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct GlyphId16(u16);

impl GlyphId16 {
    /// The identifier reserved for unknown glyphs.
    pub const NOTDEF: GlyphId16 = GlyphId16(0);

    /// Creates a new glyph identifier.
    pub const fn new(raw: u16) -> Self {
        GlyphId16(raw)
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// The identifier as a u32.
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }
}

/// A 32-bit glyph identifier.
///
/// Glyphs are opaque indices: no interpretation beyond equality and
/// ordering is defined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct GlyphId(u32);

impl GlyphId {
    /// The identifier reserved for unknown glyphs.
    pub const NOTDEF: GlyphId = GlyphId(0);

    /// Creates a new glyph identifier.
    pub const fn new(raw: u32) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u32.
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

newtype_scalar!(GlyphId16, u16);
newtype_scalar!(GlyphId, u32);

impl From<GlyphId16> for GlyphId {
    fn from(src: GlyphId16) -> Self {
        Self(src.0 as u32)
    }
}

impl From<u16> for GlyphId16 {
    fn from(src: u16) -> Self {
        Self(src)
    }
}

impl From<u32> for GlyphId {
    fn from(src: u32) -> Self {
        Self(src)
    }
}

/// The error returned when a glyph identifier does not fit in 16 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TryFromGlyphIdError;

impl core::fmt::Display for TryFromGlyphIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "glyph identifier does not fit in 16 bits")
    }
}

impl std::error::Error for TryFromGlyphIdError {}

impl TryFrom<GlyphId> for GlyphId16 {
    type Error = TryFromGlyphIdError;

    fn try_from(value: GlyphId) -> Result<Self, Self::Error> {
        u16::try_from(value.0)
            .map(GlyphId16)
            .map_err(|_| TryFromGlyphIdError)
    }
}

impl core::fmt::Display for GlyphId16 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}

impl core::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "GID_{}", self.0)
    }
}
