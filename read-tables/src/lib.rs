//! Reading OpenType color and variation tables.
//!
//! This crate provides bounds-checked parsing for the tables that drive
//! color glyph rendering in variable fonts: `COLR` (color layers and the
//! v1 paint graph), `CPAL` (color palettes) and the common
//! `ItemVariationStore`/`DeltaSetIndexMap` structures they embed.
//!
//! Parsing is strict: decoders fail fast on the first structural
//! violation and never return a partial table. Lookups on a successfully
//! parsed table, by contrast, treat out-of-range indices as "no data"
//! and return `None` (or a zero delta) rather than an error.
//!
//! All parsed tables are owned values; no structure retains a reference
//! to the input bytes once parsing returns.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod font_data;
pub mod tables;

mod read;

pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError};

/// Public re-export of the shape-types crate.
pub use shape_types as types;
