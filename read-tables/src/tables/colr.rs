//! The [COLR](https://docs.microsoft.com/en-us/typography/opentype/spec/colr) table.
//!
//! Version 0 of the table is a pair of parallel arrays mapping base
//! glyphs to runs of layer records. Version 1 adds a graph of paint
//! subtables describing gradients, transforms and compositions, along
//! with optional variation data.
//!
//! Paints are decoded into an arena owned by the parsed table; paint
//! subtables reference their children through [`PaintId`] handles. The
//! child offsets stored in the file are relative to the first byte of
//! the enclosing paint's format field, except for offsets to objects in
//! the layer list and clip list, which are relative to the start of
//! that list.

use std::collections::HashMap;

use shape_types::{F2Dot14, FWord, Fixed, GlyphId, GlyphId16, UFWord, Uint24};

use super::variations::{DeltaSetIndex, DeltaSetIndexMap, ItemVariationStore};
use crate::font_data::{Cursor, FontData};
use crate::read::{FontRead, ReadError};

/// Maximum nesting depth of the paint graph.
///
/// Parsing fails with [`ReadError::DepthLimitExceeded`] beyond this, so
/// a malformed or malicious font cannot exhaust the stack.
pub const MAX_PAINT_DEPTH: u32 = 64;

// Variation index base value that indicates no deltas should be applied.
const NO_VARIATION_INDEX: u32 = 0xFFFF_FFFF;

/// Handle to a paint in the table's paint arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaintId(u32);

impl PaintId {
    /// The arena slot this handle refers to.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A COLRv0 base glyph record: a window into the layer record array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseGlyphRecord {
    /// The base glyph this record describes.
    pub glyph_id: GlyphId16,
    /// Index of the record's first layer.
    pub first_layer_index: u16,
    /// Number of consecutive layers.
    pub num_layers: u16,
}

/// A COLRv0 layer: a glyph outline filled with a palette color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerRecord {
    /// The glyph providing the layer outline.
    pub glyph_id: GlyphId16,
    /// Index into the selected `CPAL` palette, or 0xFFFF for the
    /// foreground color.
    pub palette_index: u16,
}

/// A COLRv1 base glyph record: the root paint for a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BaseGlyphPaintRecord {
    /// The base glyph this record describes.
    pub glyph_id: GlyphId16,
    /// The root of the glyph's paint graph.
    pub paint: PaintId,
}

/// A clip list entry covering an inclusive range of glyphs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clip {
    /// First glyph covered by this clip, inclusive.
    pub start_glyph_id: GlyphId16,
    /// Last glyph covered by this clip, inclusive.
    pub end_glyph_id: GlyphId16,
    /// The clip geometry.
    pub clip_box: ClipBox,
}

/// A clip box in font design units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipBox {
    /// A static clip box.
    Format1 {
        /// Minimum x.
        x_min: FWord,
        /// Minimum y.
        y_min: FWord,
        /// Maximum x.
        x_max: FWord,
        /// Maximum y.
        y_max: FWord,
    },
    /// A clip box with variation deltas.
    Format2 {
        /// Minimum x.
        x_min: FWord,
        /// Minimum y.
        y_min: FWord,
        /// Maximum x.
        x_max: FWord,
        /// Maximum y.
        y_max: FWord,
        /// Base index into the variation store, one delta per edge.
        var_index_base: u32,
    },
}

/// Behavior of a color line outside its defined interval.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extend {
    /// Use the nearest stop color.
    #[default]
    Pad,
    /// Repeat from the farthest stop.
    Repeat,
    /// Mirror the color line.
    Reflect,
}

impl Extend {
    // Reserved values are to be interpreted as Pad.
    fn new(raw: u8) -> Self {
        match raw {
            1 => Self::Repeat,
            2 => Self::Reflect,
            _ => Self::Pad,
        }
    }
}

/// A stop on a color line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// Position on the color line, nominally in [0, 1].
    pub stop_offset: F2Dot14,
    /// Index into the selected `CPAL` palette.
    pub palette_index: u16,
    /// Alpha multiplier.
    pub alpha: F2Dot14,
}

/// A stop on a color line with variation deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VarColorStop {
    /// Position on the color line, nominally in [0, 1].
    pub stop_offset: F2Dot14,
    /// Index into the selected `CPAL` palette.
    pub palette_index: u16,
    /// Alpha multiplier.
    pub alpha: F2Dot14,
    /// Base index into the variation store; deltas apply to the stop
    /// offset and alpha.
    pub var_index_base: u32,
}

/// The stops defining a gradient's colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorLine {
    /// Extension mode outside the defined stops.
    pub extend: Extend,
    /// The color stops, in file order.
    pub stops: Vec<ColorStop>,
}

/// The stops defining a variable gradient's colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarColorLine {
    /// Extension mode outside the defined stops.
    pub extend: Extend,
    /// The color stops, in file order.
    pub stops: Vec<VarColorStop>,
}

/// A 2x3 affine transformation matrix in 16.16 fixed point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Affine2x3 {
    /// X component of the transformed x basis vector.
    pub xx: Fixed,
    /// Y component of the transformed x basis vector.
    pub yx: Fixed,
    /// X component of the transformed y basis vector.
    pub xy: Fixed,
    /// Y component of the transformed y basis vector.
    pub yy: Fixed,
    /// X translation.
    pub dx: Fixed,
    /// Y translation.
    pub dy: Fixed,
}

/// A 2x3 affine transformation matrix with variation deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VarAffine2x3 {
    /// X component of the transformed x basis vector.
    pub xx: Fixed,
    /// Y component of the transformed x basis vector.
    pub yx: Fixed,
    /// X component of the transformed y basis vector.
    pub xy: Fixed,
    /// Y component of the transformed y basis vector.
    pub yy: Fixed,
    /// X translation.
    pub dx: Fixed,
    /// Y translation.
    pub dy: Fixed,
    /// Base index into the variation store, one delta per element.
    pub var_index_base: u32,
}

/// Porter-Duff and blend modes for [`Paint::Composite`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CompositeMode {
    /// No regions are enabled.
    Clear = 0,
    /// Only the source is enabled.
    SrcCopy = 1,
    /// Only the backdrop is enabled.
    Dest = 2,
    /// Source is placed over the backdrop.
    SrcOver = 3,
    /// Backdrop is placed over the source.
    DestOver = 4,
    /// The source that overlaps the backdrop replaces the backdrop.
    SrcIn = 5,
    /// Backdrop that overlaps the source replaces the source.
    DestIn = 6,
    /// Source is placed where it falls outside of the backdrop.
    SrcOut = 7,
    /// Backdrop is placed where it falls outside of the source.
    DestOut = 8,
    /// Source that overlaps the backdrop is composited with the backdrop.
    SrcAtop = 9,
    /// Backdrop that overlaps the source is composited with the source.
    DestAtop = 10,
    /// Non-overlapping regions of source and backdrop are combined.
    Xor = 11,
    /// Sum of the source and backdrop.
    Plus = 12,
    /// Complement of the product of the complements.
    Screen = 13,
    /// Multiplies or screens depending on the backdrop.
    Overlay = 14,
    /// Selects the darker color.
    Darken = 15,
    /// Selects the lighter color.
    Lighten = 16,
    /// Brightens the backdrop to reflect the source.
    ColorDodge = 17,
    /// Darkens the backdrop to reflect the source.
    ColorBurn = 18,
    /// Multiplies or screens depending on the source.
    HardLight = 19,
    /// Darkens or lightens depending on the source.
    SoftLight = 20,
    /// Absolute difference of source and backdrop.
    Difference = 21,
    /// A lower-contrast difference.
    Exclusion = 22,
    /// Product of source and backdrop.
    Multiply = 23,
    /// Hue of the source with saturation and luminosity of the backdrop.
    HslHue = 24,
    /// Saturation of the source with hue and luminosity of the backdrop.
    HslSaturation = 25,
    /// Hue and saturation of the source with luminosity of the backdrop.
    HslColor = 26,
    /// Luminosity of the source with hue and saturation of the backdrop.
    HslLuminosity = 27,
}

impl CompositeMode {
    fn new(raw: u8) -> Option<Self> {
        use CompositeMode::*;
        Some(match raw {
            0 => Clear,
            1 => SrcCopy,
            2 => Dest,
            3 => SrcOver,
            4 => DestOver,
            5 => SrcIn,
            6 => DestIn,
            7 => SrcOut,
            8 => DestOut,
            9 => SrcAtop,
            10 => DestAtop,
            11 => Xor,
            12 => Plus,
            13 => Screen,
            14 => Overlay,
            15 => Darken,
            16 => Lighten,
            17 => ColorDodge,
            18 => ColorBurn,
            19 => HardLight,
            20 => SoftLight,
            21 => Difference,
            22 => Exclusion,
            23 => Multiply,
            24 => HslHue,
            25 => HslSaturation,
            26 => HslColor,
            27 => HslLuminosity,
            _ => return None,
        })
    }
}

/// A node in the COLRv1 paint graph.
///
/// Variants correspond one-to-one with the paint formats of the table;
/// children are referenced through arena handles.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Format 1: a slice of the shared layer list.
    ColrLayers {
        /// Number of layers to render.
        num_layers: u8,
        /// Index of the first layer in the layer list.
        first_layer_index: u32,
    },
    /// Format 2: a solid palette color.
    Solid {
        /// Index into the selected `CPAL` palette.
        palette_index: u16,
        /// Alpha multiplier.
        alpha: F2Dot14,
    },
    /// Format 3: a solid palette color with variation deltas.
    VarSolid {
        /// Index into the selected `CPAL` palette.
        palette_index: u16,
        /// Alpha multiplier.
        alpha: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 4: a linear gradient.
    LinearGradient {
        /// The gradient color stops.
        color_line: ColorLine,
        /// Start point x.
        x0: FWord,
        /// Start point y.
        y0: FWord,
        /// End point x.
        x1: FWord,
        /// End point y.
        y1: FWord,
        /// Rotation point x.
        x2: FWord,
        /// Rotation point y.
        y2: FWord,
    },
    /// Format 5: a linear gradient with variation deltas.
    VarLinearGradient {
        /// The gradient color stops.
        color_line: VarColorLine,
        /// Start point x.
        x0: FWord,
        /// Start point y.
        y0: FWord,
        /// End point x.
        x1: FWord,
        /// End point y.
        y1: FWord,
        /// Rotation point x.
        x2: FWord,
        /// Rotation point y.
        y2: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 6: a radial gradient between two circles.
    RadialGradient {
        /// The gradient color stops.
        color_line: ColorLine,
        /// First circle center x.
        x0: FWord,
        /// First circle center y.
        y0: FWord,
        /// First circle radius.
        radius0: UFWord,
        /// Second circle center x.
        x1: FWord,
        /// Second circle center y.
        y1: FWord,
        /// Second circle radius.
        radius1: UFWord,
    },
    /// Format 7: a radial gradient with variation deltas.
    VarRadialGradient {
        /// The gradient color stops.
        color_line: VarColorLine,
        /// First circle center x.
        x0: FWord,
        /// First circle center y.
        y0: FWord,
        /// First circle radius.
        radius0: UFWord,
        /// Second circle center x.
        x1: FWord,
        /// Second circle center y.
        y1: FWord,
        /// Second circle radius.
        radius1: UFWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 8: a sweep gradient around a center point.
    SweepGradient {
        /// The gradient color stops.
        color_line: ColorLine,
        /// Center x.
        center_x: FWord,
        /// Center y.
        center_y: FWord,
        /// Start angle, in 180° units.
        start_angle: F2Dot14,
        /// End angle, in 180° units.
        end_angle: F2Dot14,
    },
    /// Format 9: a sweep gradient with variation deltas.
    VarSweepGradient {
        /// The gradient color stops.
        color_line: VarColorLine,
        /// Center x.
        center_x: FWord,
        /// Center y.
        center_y: FWord,
        /// Start angle, in 180° units.
        start_angle: F2Dot14,
        /// End angle, in 180° units.
        end_angle: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 10: clip a paint by a glyph outline.
    Glyph {
        /// The paint to clip.
        paint: PaintId,
        /// The glyph providing the clip outline.
        glyph_id: GlyphId16,
    },
    /// Format 11: reuse another glyph's entire paint graph.
    ColrGlyph {
        /// A glyph with its own base glyph paint record.
        glyph_id: GlyphId16,
    },
    /// Format 12: an arbitrary affine transformation.
    Transform {
        /// The paint to transform.
        paint: PaintId,
        /// The transformation matrix.
        transform: Affine2x3,
    },
    /// Format 13: an affine transformation with variation deltas.
    VarTransform {
        /// The paint to transform.
        paint: PaintId,
        /// The transformation matrix.
        transform: VarAffine2x3,
    },
    /// Format 14: a translation.
    Translate {
        /// The paint to translate.
        paint: PaintId,
        /// X offset, in design units.
        dx: FWord,
        /// Y offset, in design units.
        dy: FWord,
    },
    /// Format 15: a translation with variation deltas.
    VarTranslate {
        /// The paint to translate.
        paint: PaintId,
        /// X offset, in design units.
        dx: FWord,
        /// Y offset, in design units.
        dy: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 16: a scale about the origin.
    Scale {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in x.
        scale_x: F2Dot14,
        /// Scale factor in y.
        scale_y: F2Dot14,
    },
    /// Format 17: a scale with variation deltas.
    VarScale {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in x.
        scale_x: F2Dot14,
        /// Scale factor in y.
        scale_y: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 18: a scale about a center point.
    ScaleAroundCenter {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in x.
        scale_x: F2Dot14,
        /// Scale factor in y.
        scale_y: F2Dot14,
        /// Center of scaling, x.
        center_x: FWord,
        /// Center of scaling, y.
        center_y: FWord,
    },
    /// Format 19: a scale about a center point with variation deltas.
    VarScaleAroundCenter {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in x.
        scale_x: F2Dot14,
        /// Scale factor in y.
        scale_y: F2Dot14,
        /// Center of scaling, x.
        center_x: FWord,
        /// Center of scaling, y.
        center_y: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 20: a uniform scale about the origin.
    ScaleUniform {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in both directions.
        scale: F2Dot14,
    },
    /// Format 21: a uniform scale with variation deltas.
    VarScaleUniform {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in both directions.
        scale: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 22: a uniform scale about a center point.
    ScaleUniformAroundCenter {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in both directions.
        scale: F2Dot14,
        /// Center of scaling, x.
        center_x: FWord,
        /// Center of scaling, y.
        center_y: FWord,
    },
    /// Format 23: a uniform scale about a center point with variation
    /// deltas.
    VarScaleUniformAroundCenter {
        /// The paint to scale.
        paint: PaintId,
        /// Scale factor in both directions.
        scale: F2Dot14,
        /// Center of scaling, x.
        center_x: FWord,
        /// Center of scaling, y.
        center_y: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 24: a rotation about the origin.
    Rotate {
        /// The paint to rotate.
        paint: PaintId,
        /// Rotation angle, in 180° units.
        angle: F2Dot14,
    },
    /// Format 25: a rotation with variation deltas.
    VarRotate {
        /// The paint to rotate.
        paint: PaintId,
        /// Rotation angle, in 180° units.
        angle: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 26: a rotation about a center point.
    RotateAroundCenter {
        /// The paint to rotate.
        paint: PaintId,
        /// Rotation angle, in 180° units.
        angle: F2Dot14,
        /// Center of rotation, x.
        center_x: FWord,
        /// Center of rotation, y.
        center_y: FWord,
    },
    /// Format 27: a rotation about a center point with variation
    /// deltas.
    VarRotateAroundCenter {
        /// The paint to rotate.
        paint: PaintId,
        /// Rotation angle, in 180° units.
        angle: F2Dot14,
        /// Center of rotation, x.
        center_x: FWord,
        /// Center of rotation, y.
        center_y: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 28: a skew about the origin.
    Skew {
        /// The paint to skew.
        paint: PaintId,
        /// Skew angle in x, in 180° units.
        x_skew_angle: F2Dot14,
        /// Skew angle in y, in 180° units.
        y_skew_angle: F2Dot14,
    },
    /// Format 29: a skew with variation deltas.
    VarSkew {
        /// The paint to skew.
        paint: PaintId,
        /// Skew angle in x, in 180° units.
        x_skew_angle: F2Dot14,
        /// Skew angle in y, in 180° units.
        y_skew_angle: F2Dot14,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 30: a skew about a center point.
    SkewAroundCenter {
        /// The paint to skew.
        paint: PaintId,
        /// Skew angle in x, in 180° units.
        x_skew_angle: F2Dot14,
        /// Skew angle in y, in 180° units.
        y_skew_angle: F2Dot14,
        /// Center of the skew, x.
        center_x: FWord,
        /// Center of the skew, y.
        center_y: FWord,
    },
    /// Format 31: a skew about a center point with variation deltas.
    VarSkewAroundCenter {
        /// The paint to skew.
        paint: PaintId,
        /// Skew angle in x, in 180° units.
        x_skew_angle: F2Dot14,
        /// Skew angle in y, in 180° units.
        y_skew_angle: F2Dot14,
        /// Center of the skew, x.
        center_x: FWord,
        /// Center of the skew, y.
        center_y: FWord,
        /// Base index into the variation store.
        var_index_base: u32,
    },
    /// Format 32: a Porter-Duff or blend composition of two paints.
    Composite {
        /// The source paint.
        source_paint: PaintId,
        /// How source and backdrop combine.
        mode: CompositeMode,
        /// The backdrop paint.
        backdrop_paint: PaintId,
    },
}

/// A parsed `COLR` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Colr {
    version: u16,
    base_glyph_records: Vec<BaseGlyphRecord>,
    layer_records: Vec<LayerRecord>,
    base_glyph_paint_records: Vec<BaseGlyphPaintRecord>,
    layer_paints: Vec<PaintId>,
    clips: Vec<Clip>,
    var_index_map: Option<DeltaSetIndexMap>,
    var_store: Option<ItemVariationStore>,
    paints: Vec<Paint>,
}

impl Colr {
    /// The table version: 0 or 1.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// The v0 base glyph records, sorted by glyph identifier.
    pub fn base_glyph_records(&self) -> &[BaseGlyphRecord] {
        &self.base_glyph_records
    }

    /// The v0 layer records.
    pub fn layer_records(&self) -> &[LayerRecord] {
        &self.layer_records
    }

    /// The v1 base glyph paint records, sorted by glyph identifier.
    pub fn base_glyph_paint_records(&self) -> &[BaseGlyphPaintRecord] {
        &self.base_glyph_paint_records
    }

    /// The variation index map, if the table has one.
    pub fn var_index_map(&self) -> Option<&DeltaSetIndexMap> {
        self.var_index_map.as_ref()
    }

    /// The item variation store, if the table has one.
    pub fn var_store(&self) -> Option<&ItemVariationStore> {
        self.var_store.as_ref()
    }

    /// Resolves a paint handle.
    pub fn paint(&self, id: PaintId) -> Option<&Paint> {
        self.paints.get(id.index())
    }

    /// Returns the v0 layer records for the given glyph, or `None` if
    /// the glyph has no v0 color layers.
    pub fn color_layers(&self, glyph_id: GlyphId) -> Option<&[LayerRecord]> {
        let glyph_id: GlyphId16 = glyph_id.try_into().ok()?;
        let ix = self
            .base_glyph_records
            .binary_search_by(|rec| rec.glyph_id.cmp(&glyph_id))
            .ok()?;
        let record = &self.base_glyph_records[ix];
        let start = record.first_layer_index as usize;
        self.layer_records
            .get(start..start + record.num_layers as usize)
    }

    /// Returns the root of the v1 paint graph for the given glyph, or
    /// `None` if the glyph has no paint record.
    pub fn color_paint(&self, glyph_id: GlyphId) -> Option<PaintId> {
        let glyph_id: GlyphId16 = glyph_id.try_into().ok()?;
        let ix = self
            .base_glyph_paint_records
            .binary_search_by(|rec| rec.glyph_id.cmp(&glyph_id))
            .ok()?;
        Some(self.base_glyph_paint_records[ix].paint)
    }

    /// `true` if either the v0 or the v1 lookup succeeds for the glyph.
    pub fn has_color_glyph(&self, glyph_id: GlyphId) -> bool {
        self.color_layers(glyph_id).is_some() || self.color_paint(glyph_id).is_some()
    }

    /// Returns the first clip whose inclusive glyph range contains the
    /// given glyph.
    pub fn clip_box(&self, glyph_id: GlyphId) -> Option<&ClipBox> {
        let glyph_id: GlyphId16 = glyph_id.try_into().ok()?;
        self.clips
            .iter()
            .find(|clip| glyph_id >= clip.start_glyph_id && glyph_id <= clip.end_glyph_id)
            .map(|clip| &clip.clip_box)
    }

    /// Returns the paint at the given index of the shared layer list.
    pub fn layer_paint(&self, index: usize) -> Option<PaintId> {
        self.layer_paints.get(index).copied()
    }

    /// The number of entries in the shared layer list.
    pub fn num_layer_paints(&self) -> usize {
        self.layer_paints.len()
    }

    /// Computes the variation delta for a flat variation index and a
    /// set of normalized coordinates.
    ///
    /// The index is remapped through the variation index map when one
    /// is present, and otherwise split into packed (outer, inner)
    /// halves. The result is an unrounded floating point sum; missing
    /// variation data yields zero.
    pub fn variation_delta(&self, var_index: u32, coords: &[F2Dot14]) -> f64 {
        let Some(store) = &self.var_store else {
            return 0.0;
        };
        if var_index == NO_VARIATION_INDEX {
            return 0.0;
        }
        let index = match &self.var_index_map {
            Some(map) => match map.get(var_index) {
                Some(index) => index,
                None => return 0.0,
            },
            None => DeltaSetIndex::from_packed(var_index),
        };
        store.delta(index, coords)
    }
}

impl FontRead for Colr {
    fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        if version > 1 {
            return Err(ReadError::InvalidFormat(version as i64));
        }
        let num_base_glyph_records: u16 = cursor.read()?;
        let base_glyph_records_offset: u32 = cursor.read()?;
        let layer_records_offset: u32 = cursor.read()?;
        let num_layer_records: u16 = cursor.read()?;

        let mut table = Colr {
            version,
            ..Default::default()
        };

        if base_glyph_records_offset != 0 {
            let mut records = data.cursor_at(base_glyph_records_offset as usize);
            for _ in 0..num_base_glyph_records {
                table.base_glyph_records.push(BaseGlyphRecord {
                    glyph_id: records.read()?,
                    first_layer_index: records.read()?,
                    num_layers: records.read()?,
                });
            }
        }
        if layer_records_offset != 0 {
            let mut records = data.cursor_at(layer_records_offset as usize);
            for _ in 0..num_layer_records {
                table.layer_records.push(LayerRecord {
                    glyph_id: records.read()?,
                    palette_index: records.read()?,
                });
            }
        }
        if version == 0 {
            return Ok(table);
        }

        let base_glyph_list_offset: u32 = cursor.read()?;
        let layer_list_offset: u32 = cursor.read()?;
        let clip_list_offset: u32 = cursor.read()?;
        let var_index_map_offset: u32 = cursor.read()?;
        let var_store_offset: u32 = cursor.read()?;

        let mut paints = PaintDecoder::new(data);
        if base_glyph_list_offset != 0 {
            let list_base = base_glyph_list_offset as usize;
            let mut list = data.cursor_at(list_base);
            let count: u32 = list.read()?;
            for _ in 0..count {
                let glyph_id: GlyphId16 = list.read()?;
                let paint_offset: u32 = list.read()?;
                // offsets in the base glyph list are relative to the list
                let paint = paints.parse(list_base + paint_offset as usize, 0)?;
                table
                    .base_glyph_paint_records
                    .push(BaseGlyphPaintRecord { glyph_id, paint });
            }
        }
        if layer_list_offset != 0 {
            let list_base = layer_list_offset as usize;
            let mut list = data.cursor_at(list_base);
            let count: u32 = list.read()?;
            for _ in 0..count {
                let paint_offset: u32 = list.read()?;
                let paint = paints.parse(list_base + paint_offset as usize, 0)?;
                table.layer_paints.push(paint);
            }
        }
        if clip_list_offset != 0 {
            let list_base = clip_list_offset as usize;
            let mut list = data.cursor_at(list_base);
            let format: u8 = list.read()?;
            if format != 1 {
                return Err(ReadError::InvalidFormat(format as i64));
            }
            let count: u32 = list.read()?;
            for _ in 0..count {
                let start_glyph_id: GlyphId16 = list.read()?;
                let end_glyph_id: GlyphId16 = list.read()?;
                let box_offset = list.read::<Uint24>()?.to_u32() as usize;
                table.clips.push(Clip {
                    start_glyph_id,
                    end_glyph_id,
                    clip_box: read_clip_box(data, list_base + box_offset)?,
                });
            }
        }
        if var_index_map_offset != 0 {
            let map_data = data
                .split_off(var_index_map_offset as usize)
                .ok_or(ReadError::OutOfBounds)?;
            table.var_index_map = Some(DeltaSetIndexMap::read(map_data)?);
        }
        if var_store_offset != 0 {
            let store_data = data
                .split_off(var_store_offset as usize)
                .ok_or(ReadError::OutOfBounds)?;
            table.var_store = Some(ItemVariationStore::read(store_data)?);
        }
        table.paints = paints.finish();
        Ok(table)
    }
}

fn read_clip_box(data: FontData, pos: usize) -> Result<ClipBox, ReadError> {
    let mut cursor = data.cursor_at(pos);
    let format: u8 = cursor.read()?;
    let x_min = cursor.read()?;
    let y_min = cursor.read()?;
    let x_max = cursor.read()?;
    let y_max = cursor.read()?;
    match format {
        1 => Ok(ClipBox::Format1 {
            x_min,
            y_min,
            x_max,
            y_max,
        }),
        2 => Ok(ClipBox::Format2 {
            x_min,
            y_min,
            x_max,
            y_max,
            var_index_base: cursor.read()?,
        }),
        _ => Err(ReadError::InvalidFormat(format as i64)),
    }
}

/// Recursive-descent decoder for the paint graph.
///
/// Shared subgraphs are deduplicated through an offset memo so that a
/// node reachable along several edges is decoded once; cycles are
/// rejected by the depth limit before the memo is populated.
struct PaintDecoder<'a> {
    data: FontData<'a>,
    paints: Vec<Paint>,
    memo: HashMap<usize, PaintId>,
}

impl<'a> PaintDecoder<'a> {
    fn new(data: FontData<'a>) -> Self {
        Self {
            data,
            paints: Vec::new(),
            memo: HashMap::new(),
        }
    }

    fn finish(self) -> Vec<Paint> {
        self.paints
    }

    fn push(&mut self, paint: Paint) -> PaintId {
        let id = PaintId(self.paints.len() as u32);
        self.paints.push(paint);
        id
    }

    /// Decodes the paint whose format byte is at `base`.
    ///
    /// Child offsets are added to `base`, never to the current read
    /// position.
    fn parse(&mut self, base: usize, depth: u32) -> Result<PaintId, ReadError> {
        if depth > MAX_PAINT_DEPTH {
            return Err(ReadError::DepthLimitExceeded);
        }
        if let Some(id) = self.memo.get(&base) {
            return Ok(*id);
        }
        let mut cursor = self.data.cursor_at(base);
        let format: u8 = cursor.read()?;
        let paint = match format {
            1 => Paint::ColrLayers {
                num_layers: cursor.read()?,
                first_layer_index: cursor.read()?,
            },
            2 => Paint::Solid {
                palette_index: cursor.read()?,
                alpha: cursor.read()?,
            },
            3 => Paint::VarSolid {
                palette_index: cursor.read()?,
                alpha: cursor.read()?,
                var_index_base: cursor.read()?,
            },
            4 | 5 => {
                let color_line_offset = read_offset24(&mut cursor)?;
                let x0 = cursor.read()?;
                let y0 = cursor.read()?;
                let x1 = cursor.read()?;
                let y1 = cursor.read()?;
                let x2 = cursor.read()?;
                let y2 = cursor.read()?;
                if format == 4 {
                    Paint::LinearGradient {
                        color_line: read_color_line(self.data, base + color_line_offset)?,
                        x0,
                        y0,
                        x1,
                        y1,
                        x2,
                        y2,
                    }
                } else {
                    Paint::VarLinearGradient {
                        color_line: read_var_color_line(self.data, base + color_line_offset)?,
                        x0,
                        y0,
                        x1,
                        y1,
                        x2,
                        y2,
                        var_index_base: cursor.read()?,
                    }
                }
            }
            6 | 7 => {
                let color_line_offset = read_offset24(&mut cursor)?;
                let x0 = cursor.read()?;
                let y0 = cursor.read()?;
                let radius0 = cursor.read()?;
                let x1 = cursor.read()?;
                let y1 = cursor.read()?;
                let radius1 = cursor.read()?;
                if format == 6 {
                    Paint::RadialGradient {
                        color_line: read_color_line(self.data, base + color_line_offset)?,
                        x0,
                        y0,
                        radius0,
                        x1,
                        y1,
                        radius1,
                    }
                } else {
                    Paint::VarRadialGradient {
                        color_line: read_var_color_line(self.data, base + color_line_offset)?,
                        x0,
                        y0,
                        radius0,
                        x1,
                        y1,
                        radius1,
                        var_index_base: cursor.read()?,
                    }
                }
            }
            8 | 9 => {
                let color_line_offset = read_offset24(&mut cursor)?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                let start_angle = cursor.read()?;
                let end_angle = cursor.read()?;
                if format == 8 {
                    Paint::SweepGradient {
                        color_line: read_color_line(self.data, base + color_line_offset)?,
                        center_x,
                        center_y,
                        start_angle,
                        end_angle,
                    }
                } else {
                    Paint::VarSweepGradient {
                        color_line: read_var_color_line(self.data, base + color_line_offset)?,
                        center_x,
                        center_y,
                        start_angle,
                        end_angle,
                        var_index_base: cursor.read()?,
                    }
                }
            }
            10 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let glyph_id = cursor.read()?;
                Paint::Glyph {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    glyph_id,
                }
            }
            11 => Paint::ColrGlyph {
                glyph_id: cursor.read()?,
            },
            12 | 13 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let affine_offset = read_offset24(&mut cursor)?;
                let paint = self.parse(base + paint_offset, depth + 1)?;
                if format == 12 {
                    Paint::Transform {
                        paint,
                        transform: read_affine(self.data, base + affine_offset)?,
                    }
                } else {
                    Paint::VarTransform {
                        paint,
                        transform: read_var_affine(self.data, base + affine_offset)?,
                    }
                }
            }
            14 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let dx = cursor.read()?;
                let dy = cursor.read()?;
                Paint::Translate {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    dx,
                    dy,
                }
            }
            15 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let dx = cursor.read()?;
                let dy = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarTranslate {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    dx,
                    dy,
                    var_index_base,
                }
            }
            16 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale_x = cursor.read()?;
                let scale_y = cursor.read()?;
                Paint::Scale {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale_x,
                    scale_y,
                }
            }
            17 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale_x = cursor.read()?;
                let scale_y = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarScale {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale_x,
                    scale_y,
                    var_index_base,
                }
            }
            18 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale_x = cursor.read()?;
                let scale_y = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                Paint::ScaleAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale_x,
                    scale_y,
                    center_x,
                    center_y,
                }
            }
            19 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale_x = cursor.read()?;
                let scale_y = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarScaleAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale_x,
                    scale_y,
                    center_x,
                    center_y,
                    var_index_base,
                }
            }
            20 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale = cursor.read()?;
                Paint::ScaleUniform {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale,
                }
            }
            21 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarScaleUniform {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale,
                    var_index_base,
                }
            }
            22 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                Paint::ScaleUniformAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale,
                    center_x,
                    center_y,
                }
            }
            23 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let scale = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarScaleUniformAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    scale,
                    center_x,
                    center_y,
                    var_index_base,
                }
            }
            24 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let angle = cursor.read()?;
                Paint::Rotate {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    angle,
                }
            }
            25 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let angle = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarRotate {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    angle,
                    var_index_base,
                }
            }
            26 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let angle = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                Paint::RotateAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    angle,
                    center_x,
                    center_y,
                }
            }
            27 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let angle = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarRotateAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    angle,
                    center_x,
                    center_y,
                    var_index_base,
                }
            }
            28 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let x_skew_angle = cursor.read()?;
                let y_skew_angle = cursor.read()?;
                Paint::Skew {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    x_skew_angle,
                    y_skew_angle,
                }
            }
            29 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let x_skew_angle = cursor.read()?;
                let y_skew_angle = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarSkew {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    x_skew_angle,
                    y_skew_angle,
                    var_index_base,
                }
            }
            30 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let x_skew_angle = cursor.read()?;
                let y_skew_angle = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                Paint::SkewAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    x_skew_angle,
                    y_skew_angle,
                    center_x,
                    center_y,
                }
            }
            31 => {
                let paint_offset = read_offset24(&mut cursor)?;
                let x_skew_angle = cursor.read()?;
                let y_skew_angle = cursor.read()?;
                let center_x = cursor.read()?;
                let center_y = cursor.read()?;
                let var_index_base = cursor.read()?;
                Paint::VarSkewAroundCenter {
                    paint: self.parse(base + paint_offset, depth + 1)?,
                    x_skew_angle,
                    y_skew_angle,
                    center_x,
                    center_y,
                    var_index_base,
                }
            }
            32 => {
                let source_offset = read_offset24(&mut cursor)?;
                let mode_raw: u8 = cursor.read()?;
                let backdrop_offset = read_offset24(&mut cursor)?;
                let mode = CompositeMode::new(mode_raw)
                    .ok_or(ReadError::MalformedData("invalid composite mode"))?;
                Paint::Composite {
                    source_paint: self.parse(base + source_offset, depth + 1)?,
                    mode,
                    backdrop_paint: self.parse(base + backdrop_offset, depth + 1)?,
                }
            }
            _ => return Err(ReadError::InvalidFormat(format as i64)),
        };
        let id = self.push(paint);
        self.memo.insert(base, id);
        Ok(id)
    }
}

fn read_offset24(cursor: &mut Cursor) -> Result<usize, ReadError> {
    Ok(cursor.read::<Uint24>()?.to_u32() as usize)
}

fn read_color_line(data: FontData, pos: usize) -> Result<ColorLine, ReadError> {
    let mut cursor = data.cursor_at(pos);
    let extend = Extend::new(cursor.read()?);
    let num_stops: u16 = cursor.read()?;
    let mut stops = Vec::with_capacity(num_stops as usize);
    for _ in 0..num_stops {
        stops.push(ColorStop {
            stop_offset: cursor.read()?,
            palette_index: cursor.read()?,
            alpha: cursor.read()?,
        });
    }
    Ok(ColorLine { extend, stops })
}

fn read_var_color_line(data: FontData, pos: usize) -> Result<VarColorLine, ReadError> {
    let mut cursor = data.cursor_at(pos);
    let extend = Extend::new(cursor.read()?);
    let num_stops: u16 = cursor.read()?;
    let mut stops = Vec::with_capacity(num_stops as usize);
    for _ in 0..num_stops {
        stops.push(VarColorStop {
            stop_offset: cursor.read()?,
            palette_index: cursor.read()?,
            alpha: cursor.read()?,
            var_index_base: cursor.read()?,
        });
    }
    Ok(VarColorLine { extend, stops })
}

fn read_affine(data: FontData, pos: usize) -> Result<Affine2x3, ReadError> {
    let mut cursor = data.cursor_at(pos);
    Ok(Affine2x3 {
        xx: cursor.read()?,
        yx: cursor.read()?,
        xy: cursor.read()?,
        yy: cursor.read()?,
        dx: cursor.read()?,
        dy: cursor.read()?,
    })
}

fn read_var_affine(data: FontData, pos: usize) -> Result<VarAffine2x3, ReadError> {
    let mut cursor = data.cursor_at(pos);
    Ok(VarAffine2x3 {
        xx: cursor.read()?,
        yx: cursor.read()?,
        xy: cursor.read()?,
        yy: cursor.read()?,
        dx: cursor.read()?,
        dy: cursor.read()?,
        var_index_base: cursor.read()?,
    })
}
