//! Color glyph support.
//!
//! Pairs a parsed `COLR` table with a location in variation space and
//! resolves raw paints into a simplified form: all numeric values
//! converted to 32-bit floating point, variation deltas applied, and
//! the transform paint family collapsed to one variant per category.

use core::ops::Range;

use read_tables::tables::colr::{
    ClipBox, Colr, CompositeMode, Extend, Paint, PaintId, VarColorLine,
};
use read_tables::types::{BoundingBox, F2Dot14, GlyphId16, Point};

/// Combination of a `COLR` table and a location in variation space for
/// resolving paints.
#[derive(Clone)]
pub struct ColorGlyphInstance<'a> {
    colr: &'a Colr,
    coords: &'a [F2Dot14],
}

impl<'a> ColorGlyphInstance<'a> {
    /// Creates a new instance for the given table and normalized
    /// variation coordinates.
    pub fn new(colr: &'a Colr, coords: &'a [F2Dot14]) -> Self {
        Self { colr, coords }
    }

    /// The underlying table.
    pub fn colr(&self) -> &'a Colr {
        self.colr
    }

    /// Computes a sequence of N variation deltas starting at the given
    /// base index.
    fn var_deltas<const N: usize>(&self, var_index_base: u32) -> [f64; N] {
        // Magic value that indicates deltas should not be applied.
        const NO_VARIATION_DELTAS: u32 = 0xFFFF_FFFF;
        let mut deltas = [0.0; N];
        if self.coords.is_empty() || var_index_base == NO_VARIATION_DELTAS {
            return deltas;
        }
        for (i, delta) in deltas.iter_mut().enumerate() {
            let Some(var_index) = var_index_base.checked_add(i as u32) else {
                break;
            };
            *delta = self.colr.variation_delta(var_index, self.coords);
        }
        deltas
    }

    /// Resolves the stops of a variable color line.
    fn resolve_var_stops(&self, color_line: &VarColorLine) -> Vec<ResolvedColorStop> {
        color_line
            .stops
            .iter()
            .map(|stop| {
                let deltas = self.var_deltas::<2>(stop.var_index_base);
                ResolvedColorStop {
                    offset: stop.stop_offset.apply_float_delta(deltas[0]),
                    palette_index: stop.palette_index,
                    alpha: stop.alpha.apply_float_delta(deltas[1]),
                }
            })
            .collect()
    }

    /// Resolves a clip box, applying variation deltas when the box has
    /// them.
    pub fn resolve_clip_box(&self, clip_box: &ClipBox) -> BoundingBox<f32> {
        match *clip_box {
            ClipBox::Format1 {
                x_min,
                y_min,
                x_max,
                y_max,
            } => BoundingBox {
                x_min: x_min.to_i16() as f32,
                y_min: y_min.to_i16() as f32,
                x_max: x_max.to_i16() as f32,
                y_max: y_max.to_i16() as f32,
            },
            ClipBox::Format2 {
                x_min,
                y_min,
                x_max,
                y_max,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<4>(var_index_base);
                BoundingBox {
                    x_min: x_min.apply_float_delta(deltas[0]),
                    y_min: y_min.apply_float_delta(deltas[1]),
                    x_max: x_max.apply_float_delta(deltas[2]),
                    y_max: y_max.apply_float_delta(deltas[3]),
                }
            }
        }
    }

    /// Resolves the clip box registered for a glyph, if any.
    pub fn clip_box(&self, glyph_id: impl Into<read_tables::types::GlyphId>) -> Option<BoundingBox<f32>> {
        self.colr
            .clip_box(glyph_id.into())
            .map(|clip_box| self.resolve_clip_box(clip_box))
    }

    /// Resolves a paint: converts values to floats, applies variation
    /// deltas and collapses each transform family into one variant.
    pub fn resolve_paint(&self, paint: &Paint) -> ResolvedPaint {
        match paint {
            Paint::ColrLayers {
                num_layers,
                first_layer_index,
            } => {
                let start = *first_layer_index as usize;
                ResolvedPaint::Layers {
                    range: start..start + *num_layers as usize,
                }
            }
            Paint::Solid {
                palette_index,
                alpha,
            } => ResolvedPaint::Solid {
                palette_index: *palette_index,
                alpha: alpha.to_f32(),
            },
            Paint::VarSolid {
                palette_index,
                alpha,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<1>(*var_index_base);
                ResolvedPaint::Solid {
                    palette_index: *palette_index,
                    alpha: alpha.apply_float_delta(deltas[0]),
                }
            }
            Paint::LinearGradient {
                color_line,
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
            } => ResolvedPaint::LinearGradient {
                x0: x0.to_i16() as f32,
                y0: y0.to_i16() as f32,
                x1: x1.to_i16() as f32,
                y1: y1.to_i16() as f32,
                x2: x2.to_i16() as f32,
                y2: y2.to_i16() as f32,
                stops: color_line
                    .stops
                    .iter()
                    .map(|stop| ResolvedColorStop {
                        offset: stop.stop_offset.to_f32(),
                        palette_index: stop.palette_index,
                        alpha: stop.alpha.to_f32(),
                    })
                    .collect(),
                extend: color_line.extend,
            },
            Paint::VarLinearGradient {
                color_line,
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<6>(*var_index_base);
                ResolvedPaint::LinearGradient {
                    x0: x0.apply_float_delta(deltas[0]),
                    y0: y0.apply_float_delta(deltas[1]),
                    x1: x1.apply_float_delta(deltas[2]),
                    y1: y1.apply_float_delta(deltas[3]),
                    x2: x2.apply_float_delta(deltas[4]),
                    y2: y2.apply_float_delta(deltas[5]),
                    stops: self.resolve_var_stops(color_line),
                    extend: color_line.extend,
                }
            }
            Paint::RadialGradient {
                color_line,
                x0,
                y0,
                radius0,
                x1,
                y1,
                radius1,
            } => ResolvedPaint::RadialGradient {
                x0: x0.to_i16() as f32,
                y0: y0.to_i16() as f32,
                radius0: radius0.to_u16() as f32,
                x1: x1.to_i16() as f32,
                y1: y1.to_i16() as f32,
                radius1: radius1.to_u16() as f32,
                stops: color_line
                    .stops
                    .iter()
                    .map(|stop| ResolvedColorStop {
                        offset: stop.stop_offset.to_f32(),
                        palette_index: stop.palette_index,
                        alpha: stop.alpha.to_f32(),
                    })
                    .collect(),
                extend: color_line.extend,
            },
            Paint::VarRadialGradient {
                color_line,
                x0,
                y0,
                radius0,
                x1,
                y1,
                radius1,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<6>(*var_index_base);
                ResolvedPaint::RadialGradient {
                    x0: x0.apply_float_delta(deltas[0]),
                    y0: y0.apply_float_delta(deltas[1]),
                    radius0: radius0.apply_float_delta(deltas[2]),
                    x1: x1.apply_float_delta(deltas[3]),
                    y1: y1.apply_float_delta(deltas[4]),
                    radius1: radius1.apply_float_delta(deltas[5]),
                    stops: self.resolve_var_stops(color_line),
                    extend: color_line.extend,
                }
            }
            Paint::SweepGradient {
                color_line,
                center_x,
                center_y,
                start_angle,
                end_angle,
            } => ResolvedPaint::SweepGradient {
                center_x: center_x.to_i16() as f32,
                center_y: center_y.to_i16() as f32,
                start_angle: start_angle.to_f32(),
                end_angle: end_angle.to_f32(),
                stops: color_line
                    .stops
                    .iter()
                    .map(|stop| ResolvedColorStop {
                        offset: stop.stop_offset.to_f32(),
                        palette_index: stop.palette_index,
                        alpha: stop.alpha.to_f32(),
                    })
                    .collect(),
                extend: color_line.extend,
            },
            Paint::VarSweepGradient {
                color_line,
                center_x,
                center_y,
                start_angle,
                end_angle,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<4>(*var_index_base);
                ResolvedPaint::SweepGradient {
                    center_x: center_x.apply_float_delta(deltas[0]),
                    center_y: center_y.apply_float_delta(deltas[1]),
                    start_angle: start_angle.apply_float_delta(deltas[2]),
                    end_angle: end_angle.apply_float_delta(deltas[3]),
                    stops: self.resolve_var_stops(color_line),
                    extend: color_line.extend,
                }
            }
            Paint::Glyph { paint, glyph_id } => ResolvedPaint::Glyph {
                glyph_id: *glyph_id,
                paint: *paint,
            },
            Paint::ColrGlyph { glyph_id } => ResolvedPaint::ColrGlyph {
                glyph_id: *glyph_id,
            },
            Paint::Transform { paint, transform } => ResolvedPaint::Transform {
                xx: transform.xx.to_f32(),
                yx: transform.yx.to_f32(),
                xy: transform.xy.to_f32(),
                yy: transform.yy.to_f32(),
                dx: transform.dx.to_f32(),
                dy: transform.dy.to_f32(),
                paint: *paint,
            },
            Paint::VarTransform { paint, transform } => {
                let deltas = self.var_deltas::<6>(transform.var_index_base);
                ResolvedPaint::Transform {
                    xx: transform.xx.apply_float_delta(deltas[0]),
                    yx: transform.yx.apply_float_delta(deltas[1]),
                    xy: transform.xy.apply_float_delta(deltas[2]),
                    yy: transform.yy.apply_float_delta(deltas[3]),
                    dx: transform.dx.apply_float_delta(deltas[4]),
                    dy: transform.dy.apply_float_delta(deltas[5]),
                    paint: *paint,
                }
            }
            Paint::Translate { paint, dx, dy } => ResolvedPaint::Translate {
                dx: dx.to_i16() as f32,
                dy: dy.to_i16() as f32,
                paint: *paint,
            },
            Paint::VarTranslate {
                paint,
                dx,
                dy,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<2>(*var_index_base);
                ResolvedPaint::Translate {
                    dx: dx.apply_float_delta(deltas[0]),
                    dy: dy.apply_float_delta(deltas[1]),
                    paint: *paint,
                }
            }
            Paint::Scale {
                paint,
                scale_x,
                scale_y,
            } => ResolvedPaint::Scale {
                scale_x: scale_x.to_f32(),
                scale_y: scale_y.to_f32(),
                around_center: None,
                paint: *paint,
            },
            Paint::VarScale {
                paint,
                scale_x,
                scale_y,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<2>(*var_index_base);
                ResolvedPaint::Scale {
                    scale_x: scale_x.apply_float_delta(deltas[0]),
                    scale_y: scale_y.apply_float_delta(deltas[1]),
                    around_center: None,
                    paint: *paint,
                }
            }
            Paint::ScaleAroundCenter {
                paint,
                scale_x,
                scale_y,
                center_x,
                center_y,
            } => ResolvedPaint::Scale {
                scale_x: scale_x.to_f32(),
                scale_y: scale_y.to_f32(),
                around_center: Some(Point::new(
                    center_x.to_i16() as f32,
                    center_y.to_i16() as f32,
                )),
                paint: *paint,
            },
            Paint::VarScaleAroundCenter {
                paint,
                scale_x,
                scale_y,
                center_x,
                center_y,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<4>(*var_index_base);
                ResolvedPaint::Scale {
                    scale_x: scale_x.apply_float_delta(deltas[0]),
                    scale_y: scale_y.apply_float_delta(deltas[1]),
                    around_center: Some(Point::new(
                        center_x.apply_float_delta(deltas[2]),
                        center_y.apply_float_delta(deltas[3]),
                    )),
                    paint: *paint,
                }
            }
            Paint::ScaleUniform { paint, scale } => {
                let scale = scale.to_f32();
                ResolvedPaint::Scale {
                    scale_x: scale,
                    scale_y: scale,
                    around_center: None,
                    paint: *paint,
                }
            }
            Paint::VarScaleUniform {
                paint,
                scale,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<1>(*var_index_base);
                let scale = scale.apply_float_delta(deltas[0]);
                ResolvedPaint::Scale {
                    scale_x: scale,
                    scale_y: scale,
                    around_center: None,
                    paint: *paint,
                }
            }
            Paint::ScaleUniformAroundCenter {
                paint,
                scale,
                center_x,
                center_y,
            } => {
                let scale = scale.to_f32();
                ResolvedPaint::Scale {
                    scale_x: scale,
                    scale_y: scale,
                    around_center: Some(Point::new(
                        center_x.to_i16() as f32,
                        center_y.to_i16() as f32,
                    )),
                    paint: *paint,
                }
            }
            Paint::VarScaleUniformAroundCenter {
                paint,
                scale,
                center_x,
                center_y,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<3>(*var_index_base);
                let scale = scale.apply_float_delta(deltas[0]);
                ResolvedPaint::Scale {
                    scale_x: scale,
                    scale_y: scale,
                    around_center: Some(Point::new(
                        center_x.apply_float_delta(deltas[1]),
                        center_y.apply_float_delta(deltas[2]),
                    )),
                    paint: *paint,
                }
            }
            Paint::Rotate { paint, angle } => ResolvedPaint::Rotate {
                angle: angle.to_f32(),
                around_center: None,
                paint: *paint,
            },
            Paint::VarRotate {
                paint,
                angle,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<1>(*var_index_base);
                ResolvedPaint::Rotate {
                    angle: angle.apply_float_delta(deltas[0]),
                    around_center: None,
                    paint: *paint,
                }
            }
            Paint::RotateAroundCenter {
                paint,
                angle,
                center_x,
                center_y,
            } => ResolvedPaint::Rotate {
                angle: angle.to_f32(),
                around_center: Some(Point::new(
                    center_x.to_i16() as f32,
                    center_y.to_i16() as f32,
                )),
                paint: *paint,
            },
            Paint::VarRotateAroundCenter {
                paint,
                angle,
                center_x,
                center_y,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<3>(*var_index_base);
                ResolvedPaint::Rotate {
                    angle: angle.apply_float_delta(deltas[0]),
                    around_center: Some(Point::new(
                        center_x.apply_float_delta(deltas[1]),
                        center_y.apply_float_delta(deltas[2]),
                    )),
                    paint: *paint,
                }
            }
            Paint::Skew {
                paint,
                x_skew_angle,
                y_skew_angle,
            } => ResolvedPaint::Skew {
                x_skew_angle: x_skew_angle.to_f32(),
                y_skew_angle: y_skew_angle.to_f32(),
                around_center: None,
                paint: *paint,
            },
            Paint::VarSkew {
                paint,
                x_skew_angle,
                y_skew_angle,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<2>(*var_index_base);
                ResolvedPaint::Skew {
                    x_skew_angle: x_skew_angle.apply_float_delta(deltas[0]),
                    y_skew_angle: y_skew_angle.apply_float_delta(deltas[1]),
                    around_center: None,
                    paint: *paint,
                }
            }
            Paint::SkewAroundCenter {
                paint,
                x_skew_angle,
                y_skew_angle,
                center_x,
                center_y,
            } => ResolvedPaint::Skew {
                x_skew_angle: x_skew_angle.to_f32(),
                y_skew_angle: y_skew_angle.to_f32(),
                around_center: Some(Point::new(
                    center_x.to_i16() as f32,
                    center_y.to_i16() as f32,
                )),
                paint: *paint,
            },
            Paint::VarSkewAroundCenter {
                paint,
                x_skew_angle,
                y_skew_angle,
                center_x,
                center_y,
                var_index_base,
            } => {
                let deltas = self.var_deltas::<4>(*var_index_base);
                ResolvedPaint::Skew {
                    x_skew_angle: x_skew_angle.apply_float_delta(deltas[0]),
                    y_skew_angle: y_skew_angle.apply_float_delta(deltas[1]),
                    around_center: Some(Point::new(
                        center_x.apply_float_delta(deltas[2]),
                        center_y.apply_float_delta(deltas[3]),
                    )),
                    paint: *paint,
                }
            }
            Paint::Composite {
                source_paint,
                mode,
                backdrop_paint,
            } => ResolvedPaint::Composite {
                source_paint: *source_paint,
                mode: *mode,
                backdrop_paint: *backdrop_paint,
            },
        }
    }
}

/// A color stop with variation deltas applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColorStop {
    /// Position on the color line.
    pub offset: f32,
    /// Index into the selected `CPAL` palette.
    pub palette_index: u16,
    /// Alpha multiplier.
    pub alpha: f32,
}

/// Simplified version of [`Paint`] with applied variation deltas.
///
/// Child paints remain arena handles into the underlying table, so a
/// renderer walks the graph by resolving one node at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedPaint {
    /// A slice of the shared layer list.
    Layers {
        /// The range of layer list indices to render, bottom-up.
        range: Range<usize>,
    },
    /// A solid palette color.
    Solid {
        /// Index into the selected `CPAL` palette.
        palette_index: u16,
        /// Alpha multiplier.
        alpha: f32,
    },
    /// A linear gradient.
    LinearGradient {
        /// Start point x.
        x0: f32,
        /// Start point y.
        y0: f32,
        /// End point x.
        x1: f32,
        /// End point y.
        y1: f32,
        /// Rotation point x.
        x2: f32,
        /// Rotation point y.
        y2: f32,
        /// The resolved color stops.
        stops: Vec<ResolvedColorStop>,
        /// Extension mode outside the stops.
        extend: Extend,
    },
    /// A radial gradient.
    RadialGradient {
        /// First circle center x.
        x0: f32,
        /// First circle center y.
        y0: f32,
        /// First circle radius.
        radius0: f32,
        /// Second circle center x.
        x1: f32,
        /// Second circle center y.
        y1: f32,
        /// Second circle radius.
        radius1: f32,
        /// The resolved color stops.
        stops: Vec<ResolvedColorStop>,
        /// Extension mode outside the stops.
        extend: Extend,
    },
    /// A sweep gradient.
    SweepGradient {
        /// Center x.
        center_x: f32,
        /// Center y.
        center_y: f32,
        /// Start angle, in 180° units.
        start_angle: f32,
        /// End angle, in 180° units.
        end_angle: f32,
        /// The resolved color stops.
        stops: Vec<ResolvedColorStop>,
        /// Extension mode outside the stops.
        extend: Extend,
    },
    /// A paint clipped by a glyph outline.
    Glyph {
        /// The glyph providing the clip outline.
        glyph_id: GlyphId16,
        /// The clipped paint.
        paint: PaintId,
    },
    /// Reuse of another glyph's paint graph.
    ColrGlyph {
        /// A glyph with its own base glyph paint record.
        glyph_id: GlyphId16,
    },
    /// A general affine transformation.
    Transform {
        /// X component of the transformed x basis vector.
        xx: f32,
        /// Y component of the transformed x basis vector.
        yx: f32,
        /// X component of the transformed y basis vector.
        xy: f32,
        /// Y component of the transformed y basis vector.
        yy: f32,
        /// X translation.
        dx: f32,
        /// Y translation.
        dy: f32,
        /// The transformed paint.
        paint: PaintId,
    },
    /// A translation.
    Translate {
        /// X offset.
        dx: f32,
        /// Y offset.
        dy: f32,
        /// The translated paint.
        paint: PaintId,
    },
    /// A scale, uniform or not, possibly about a center point.
    Scale {
        /// Scale factor in x.
        scale_x: f32,
        /// Scale factor in y.
        scale_y: f32,
        /// Center of scaling, if not the origin.
        around_center: Option<Point<f32>>,
        /// The scaled paint.
        paint: PaintId,
    },
    /// A rotation, possibly about a center point.
    Rotate {
        /// Rotation angle, in 180° units.
        angle: f32,
        /// Center of rotation, if not the origin.
        around_center: Option<Point<f32>>,
        /// The rotated paint.
        paint: PaintId,
    },
    /// A skew, possibly about a center point.
    Skew {
        /// Skew angle in x, in 180° units.
        x_skew_angle: f32,
        /// Skew angle in y, in 180° units.
        y_skew_angle: f32,
        /// Center of the skew, if not the origin.
        around_center: Option<Point<f32>>,
        /// The skewed paint.
        paint: PaintId,
    },
    /// A composition of two paints.
    Composite {
        /// The source paint.
        source_paint: PaintId,
        /// How source and backdrop combine.
        mode: CompositeMode,
        /// The backdrop paint.
        backdrop_paint: PaintId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use read_tables::tables::colr::{Affine2x3, ColorLine, ColorStop};
    use read_tables::types::{FWord, Fixed};

    fn empty_colr() -> Colr {
        Colr::default()
    }

    #[test]
    fn solid_resolves_alpha() {
        let colr = empty_colr();
        let instance = ColorGlyphInstance::new(&colr, &[]);
        let paint = Paint::Solid {
            palette_index: 3,
            alpha: F2Dot14::from_f64(0.5),
        };
        assert_eq!(
            instance.resolve_paint(&paint),
            ResolvedPaint::Solid {
                palette_index: 3,
                alpha: 0.5
            }
        );
    }

    #[test]
    fn var_solid_without_store_keeps_default() {
        // deltas are zero when the table has no variation data
        let colr = empty_colr();
        let coords = [F2Dot14::ONE];
        let instance = ColorGlyphInstance::new(&colr, &coords);
        let paint = Paint::VarSolid {
            palette_index: 0,
            alpha: F2Dot14::ONE,
            var_index_base: 0,
        };
        assert_eq!(
            instance.resolve_paint(&paint),
            ResolvedPaint::Solid {
                palette_index: 0,
                alpha: 1.0
            }
        );
    }

    #[test]
    fn scale_uniform_collapses() {
        let colr = empty_colr();
        let instance = ColorGlyphInstance::new(&colr, &[]);
        let paint = Paint::ScaleUniformAroundCenter {
            paint: root_handle(&colr),
            scale: F2Dot14::from_f64(0.5),
            center_x: FWord::new(100),
            center_y: FWord::new(200),
        };
        let ResolvedPaint::Scale {
            scale_x,
            scale_y,
            around_center,
            ..
        } = instance.resolve_paint(&paint)
        else {
            panic!("expected a scale");
        };
        assert_eq!((scale_x, scale_y), (0.5, 0.5));
        assert_eq!(around_center, Some(Point::new(100.0, 200.0)));
    }

    #[test]
    fn transform_resolves_fixed_matrix() {
        let colr = empty_colr();
        let instance = ColorGlyphInstance::new(&colr, &[]);
        let paint = Paint::Transform {
            paint: root_handle(&colr),
            transform: Affine2x3 {
                xx: Fixed::from_f64(1.0),
                yx: Fixed::ZERO,
                xy: Fixed::ZERO,
                yy: Fixed::from_f64(1.0),
                dx: Fixed::from_f64(-10.5),
                dy: Fixed::from_f64(4.25),
            },
        };
        let ResolvedPaint::Transform { dx, dy, xx, .. } = instance.resolve_paint(&paint) else {
            panic!("expected a transform");
        };
        assert_eq!((xx, dx, dy), (1.0, -10.5, 4.25));
    }

    #[test]
    fn gradient_stops_resolve() {
        let colr = empty_colr();
        let instance = ColorGlyphInstance::new(&colr, &[]);
        let paint = Paint::LinearGradient {
            color_line: ColorLine {
                extend: Extend::Reflect,
                stops: vec![
                    ColorStop {
                        stop_offset: F2Dot14::ZERO,
                        palette_index: 0,
                        alpha: F2Dot14::ONE,
                    },
                    ColorStop {
                        stop_offset: F2Dot14::ONE,
                        palette_index: 1,
                        alpha: F2Dot14::from_f64(0.25),
                    },
                ],
            },
            x0: FWord::new(0),
            y0: FWord::new(0),
            x1: FWord::new(100),
            y1: FWord::new(0),
            x2: FWord::new(0),
            y2: FWord::new(100),
        };
        let ResolvedPaint::LinearGradient { stops, extend, x1, .. } =
            instance.resolve_paint(&paint)
        else {
            panic!("expected a linear gradient");
        };
        assert_eq!(extend, Extend::Reflect);
        assert_eq!(x1, 100.0);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].alpha, 0.25);
    }

    #[test]
    fn clip_box_format1_resolves() {
        let colr = empty_colr();
        let instance = ColorGlyphInstance::new(&colr, &[]);
        let clip = ClipBox::Format1 {
            x_min: FWord::new(-5),
            y_min: FWord::new(0),
            x_max: FWord::new(10),
            y_max: FWord::new(20),
        };
        assert_eq!(
            instance.resolve_clip_box(&clip),
            BoundingBox {
                x_min: -5.0,
                y_min: 0.0,
                x_max: 10.0,
                y_max: 20.0
            }
        );
    }

    // An arbitrary handle for paints that need a child; the child is
    // never dereferenced by resolve_paint.
    fn root_handle(_colr: &Colr) -> PaintId {
        use read_tables::types::test_helpers::BeBuffer;
        use read_tables::{FontData, FontRead};
        let bytes = BeBuffer::new()
            .push(1u16)
            .push(0u16)
            .push(0u32)
            .push(0u32)
            .push(0u16)
            .push(34u32)
            .push(0u32)
            .push(0u32)
            .push(0u32)
            .push(0u32)
            .push(1u32)
            .push(1u16)
            .push(10u32)
            .push(2u8)
            .push(0u16)
            .push(F2Dot14::ONE)
            .to_vec();
        let colr = Colr::read(FontData::new(&bytes)).unwrap();
        colr.color_paint(read_tables::types::GlyphId::new(1)).unwrap()
    }
}
