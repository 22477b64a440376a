//! An axis-aligned bounding box.

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction.
    pub x_min: T,
    /// Minimum extent in the y direction.
    pub y_min: T,
    /// Maximum extent in the x direction.
    pub x_max: T,
    /// Maximum extent in the y direction.
    pub y_max: T,
}
