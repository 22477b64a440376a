//! Signed and unsigned quantities in font design units.

use crate::raw::newtype_scalar;
use crate::Fixed;

/// A 16-bit signed quantity in font design units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FWord(i16);

/// A 16-bit unsigned quantity in font design units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct UFWord(u16);

impl FWord {
    /// Creates a new value in design units.
    pub const fn new(raw: i16) -> Self {
        Self(raw)
    }

    /// Returns the design unit value as a primitive.
    pub const fn to_i16(self) -> i16 {
        self.0
    }

    /// Converts the design unit value to 16.16 fixed point.
    pub const fn to_fixed(self) -> Fixed {
        Fixed::from_i32(self.0 as i32)
    }

    /// Returns this value as a float with the given variation delta
    /// applied. Deltas for design unit values are carried 1:1.
    pub fn apply_float_delta(self, delta: f64) -> f32 {
        (self.0 as f64 + delta) as f32
    }
}

impl UFWord {
    /// Creates a new value in design units.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the design unit value as a primitive.
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Returns this value as a float with the given variation delta
    /// applied.
    pub fn apply_float_delta(self, delta: f64) -> f32 {
        (self.0 as f64 + delta) as f32
    }
}

newtype_scalar!(FWord, i16);
newtype_scalar!(UFWord, u16);

impl core::fmt::Display for FWord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::fmt::Display for UFWord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
