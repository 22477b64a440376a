//! Text analysis and glyph rendering primitives for OpenType fonts.
//!
//! This crate sits on top of the raw table parsing in [`read_tables`]
//! and provides the semantics a shaping and rendering pipeline needs:
//!
//! - [`color`]: resolution of `COLR` paints with variation deltas
//!   applied, ready for a renderer to walk.
//! - [`text`]: Unicode script segmentation, line-break analysis and
//!   the bidirectional algorithm.
//! - [`outline`]: validation of glyph outlines and their decomposition
//!   into a scanline rasterizer's 26.6 fixed-point command stream.
//! - [`analysis`]: the segmentation passes bundled for a whole string.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analysis;
pub mod color;
pub mod outline;
pub mod text;

pub use read_tables;
pub use read_tables::types;
