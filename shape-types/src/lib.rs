//! Scalar types used in font tables and text layout.
//!
//! The types in this crate are small, copyable value types that mirror the
//! numeric encodings used in OpenType font files: big-endian integers,
//! fixed-point fractions in various widths, glyph identifiers and tags.
//! They are shared by the raw table parsing in `read-tables` and the
//! higher-level semantics in `teikna`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod fixed;
mod fword;
mod glyph_id;
mod point;
mod raw;
mod tag;
mod uint24;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub mod test_helpers;

pub use bbox::BoundingBox;
pub use fixed::{F26Dot6, F2Dot14, Fixed};
pub use fword::{FWord, UFWord};
pub use glyph_id::{GlyphId, GlyphId16, TryFromGlyphIdError};
pub use point::Point;
pub use raw::Scalar;
pub use tag::Tag;
pub use uint24::Uint24;
