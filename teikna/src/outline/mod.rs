//! Glyph outline validation and decomposition.
//!
//! A [`GlyphPath`] holds the drawing commands of a glyph outline in
//! user-space floats. [`validate`] checks the structural rules a
//! well-formed outline satisfies, and [`decompose`] converts the
//! commands to the rasterizer's 26.6 fixed-point subpixel grid,
//! applying scale, offset and the Y flip between font space (y up) and
//! raster space (y down).

mod raster;

pub use raster::{NullRasterizer, RasterCommand, Rasterizer, SvgRasterizer};

use read_tables::types::{BoundingBox, F26Dot6, GlyphId};

/// A single drawing command of a glyph outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Begin a new contour at (x, y).
    MoveTo {
        /// Target x.
        x: f32,
        /// Target y.
        y: f32,
    },
    /// Draw a line from the current point to (x, y).
    LineTo {
        /// Target x.
        x: f32,
        /// Target y.
        y: f32,
    },
    /// Draw a quadratic bezier with control point (cx0, cy0) ending at
    /// (x, y).
    QuadTo {
        /// Control x.
        cx0: f32,
        /// Control y.
        cy0: f32,
        /// Target x.
        x: f32,
        /// Target y.
        y: f32,
    },
    /// Draw a cubic bezier with control points (cx0, cy0) and
    /// (cx1, cy1) ending at (x, y).
    CurveTo {
        /// First control x.
        cx0: f32,
        /// First control y.
        cy0: f32,
        /// Second control x.
        cx1: f32,
        /// Second control y.
        cy1: f32,
        /// Target x.
        x: f32,
        /// Target y.
        y: f32,
    },
    /// Close the current contour.
    Close,
}

/// Flags carried by a glyph path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathFlags(u32);

impl PathFlags {
    /// The outline should be filled with the even-odd rule.
    pub const EVEN_ODD_FILL: PathFlags = PathFlags(0x1);

    /// Coordinates were produced at higher than design-unit precision.
    pub const HIGH_PRECISION: PathFlags = PathFlags(0x2);

    /// Creates flags from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` if all the bits of `other` are set in `self`.
    pub const fn contains(self, other: PathFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// The union of two flag sets.
    pub const fn union(self, other: PathFlags) -> PathFlags {
        PathFlags(self.0 | other.0)
    }
}

/// How the interior of an outline is determined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Non-zero winding number rule.
    #[default]
    NonZero,
    /// Even-odd crossing count rule.
    EvenOdd,
}

/// A glyph outline in user-space floats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphPath {
    /// The drawing commands, in order.
    pub commands: Vec<PathCommand>,
    /// The outline's bounding box, if the source provided one.
    pub bounds: Option<BoundingBox<f32>>,
    /// Path flags.
    pub flags: PathFlags,
}

impl GlyphPath {
    /// Creates a path from a command list, with no bounds and no flags.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            ..Default::default()
        }
    }

    /// The fill rule selected by the path flags.
    ///
    /// Defaults to [`FillRule::NonZero`] unless the even-odd flag is
    /// set.
    pub fn fill_rule(&self) -> FillRule {
        if self.flags.contains(PathFlags::EVEN_ODD_FILL) {
            FillRule::EvenOdd
        } else {
            FillRule::NonZero
        }
    }
}

/// Source of glyph outlines; the seam to the font's glyph table.
///
/// Implementations behave as a pure function of the glyph identifier
/// and return `None` for missing glyphs.
pub trait GlyphSource {
    /// Returns the outline of the given glyph, or `None` if the font
    /// has no such glyph.
    fn glyph_path(&self, glyph_id: GlyphId) -> Option<GlyphPath>;
}

/// Validation failures for a glyph outline.
///
/// These are ordinary status values: the validator reports them through
/// its return value and callers decide whether an empty outline is
/// acceptable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutlineError {
    /// The outline violates a structural rule.
    Invalid(&'static str),
    /// The outline has no commands; reported only when the caller opted
    /// in to distinguishing this case.
    Empty,
}

impl core::fmt::Display for OutlineError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid outline: {msg}"),
            Self::Empty => write!(f, "empty outline"),
        }
    }
}

impl std::error::Error for OutlineError {}

/// Checks the structural rules of a glyph outline.
///
/// A missing path is invalid. An empty command list is
/// [`OutlineError::Empty`] when `allow_empty` is set and otherwise
/// invalid. Every drawing segment must be preceded by a `MoveTo` in the
/// same contour, and every coordinate must be finite.
pub fn validate(path: Option<&GlyphPath>, allow_empty: bool) -> Result<(), OutlineError> {
    let Some(path) = path else {
        return Err(OutlineError::Invalid("missing path"));
    };
    if path.commands.is_empty() {
        return if allow_empty {
            Err(OutlineError::Empty)
        } else {
            Err(OutlineError::Invalid("empty command list"))
        };
    }
    fn all_finite(coords: &[f32]) -> bool {
        coords.iter().all(|c| c.is_finite())
    }
    let mut in_contour = false;
    for command in &path.commands {
        let finite = match command {
            PathCommand::MoveTo { x, y } => {
                in_contour = true;
                all_finite(&[*x, *y])
            }
            PathCommand::LineTo { x, y } => {
                if !in_contour {
                    return Err(OutlineError::Invalid("line segment outside a contour"));
                }
                all_finite(&[*x, *y])
            }
            PathCommand::QuadTo { cx0, cy0, x, y } => {
                if !in_contour {
                    return Err(OutlineError::Invalid("quad segment outside a contour"));
                }
                all_finite(&[*cx0, *cy0, *x, *y])
            }
            PathCommand::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => {
                if !in_contour {
                    return Err(OutlineError::Invalid("cubic segment outside a contour"));
                }
                all_finite(&[*cx0, *cy0, *cx1, *cy1, *x, *y])
            }
            PathCommand::Close => {
                in_contour = false;
                true
            }
        };
        if !finite {
            return Err(OutlineError::Invalid("non-finite coordinate"));
        }
    }
    Ok(())
}

/// Emits a glyph path into a rasterizer on the 26.6 subpixel grid.
///
/// Each user-space point (x, y) maps to
/// `round((x * scale + offset_x) * 64)` with the y coordinate negated
/// first when `flip_y` is set. A fresh `MoveTo` closes the previous
/// contour implicitly; an unterminated trailing contour is closed at
/// the end, so the emitted stream always consists of closed contours.
pub fn decompose(
    raster: &mut impl Rasterizer,
    path: &GlyphPath,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    flip_y: bool,
) -> Result<(), OutlineError> {
    validate(Some(path), false)?;
    let point = |x: f32, y: f32| {
        let y = if flip_y { -y } else { y };
        (
            F26Dot6::from_f32_rounded(x * scale + offset_x),
            F26Dot6::from_f32_rounded(y * scale + offset_y),
        )
    };
    let mut open = false;
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                if open {
                    raster.close();
                }
                let (x, y) = point(x, y);
                raster.move_to(x, y);
                open = true;
            }
            PathCommand::LineTo { x, y } => {
                let (x, y) = point(x, y);
                raster.line_to(x, y);
            }
            PathCommand::QuadTo { cx0, cy0, x, y } => {
                let (cx, cy) = point(cx0, cy0);
                let (x, y) = point(x, y);
                raster.conic_to(cx, cy, x, y);
            }
            PathCommand::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => {
                let (cx0, cy0) = point(cx0, cy0);
                let (cx1, cy1) = point(cx1, cy1);
                let (x, y) = point(x, y);
                raster.cubic_to(cx0, cy0, cx1, cy1, x, y);
            }
            PathCommand::Close => {
                if open {
                    raster.close();
                    open = false;
                }
            }
        }
    }
    if open {
        raster.close();
    }
    Ok(())
}

/// Scales the stored glyph bounds and expands them to integer pixel
/// bounds.
///
/// Minima are floored and maxima are ceiled, so the result covers every
/// touched pixel. Returns `None` if the path carries no bounds.
pub fn path_bounds(path: &GlyphPath, scale: f32, flip_y: bool) -> Option<BoundingBox<i32>> {
    let bounds = path.bounds?;
    let (y_min, y_max) = if flip_y {
        (-bounds.y_max, -bounds.y_min)
    } else {
        (bounds.y_min, bounds.y_max)
    };
    Some(BoundingBox {
        x_min: (bounds.x_min * scale).floor() as i32,
        y_min: (y_min * scale).floor() as i32,
        x_max: (bounds.x_max * scale).ceil() as i32,
        y_max: (y_max * scale).ceil() as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GlyphPath {
        GlyphPath::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 10.0, y: 0.0 },
            PathCommand::LineTo { x: 10.0, y: 10.0 },
            PathCommand::LineTo { x: 0.0, y: 10.0 },
            PathCommand::Close,
        ])
    }

    #[test]
    fn validate_rejects_missing_and_empty() {
        assert_eq!(
            validate(None, true),
            Err(OutlineError::Invalid("missing path"))
        );
        let empty = GlyphPath::new(vec![]);
        assert_eq!(validate(Some(&empty), true), Err(OutlineError::Empty));
        assert!(matches!(
            validate(Some(&empty), false),
            Err(OutlineError::Invalid(_))
        ));
    }

    #[test]
    fn validate_requires_move_before_segments() {
        let path = GlyphPath::new(vec![PathCommand::LineTo { x: 1.0, y: 1.0 }]);
        assert!(matches!(
            validate(Some(&path), false),
            Err(OutlineError::Invalid(_))
        ));
        // a close resets the contour
        let path = GlyphPath::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::Close,
            PathCommand::QuadTo {
                cx0: 1.0,
                cy0: 1.0,
                x: 2.0,
                y: 0.0,
            },
        ]);
        assert!(matches!(
            validate(Some(&path), false),
            Err(OutlineError::Invalid(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let path = GlyphPath::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo {
                x: f32::NAN,
                y: 0.0,
            },
        ]);
        assert_eq!(
            validate(Some(&path), false),
            Err(OutlineError::Invalid("non-finite coordinate"))
        );
        assert!(validate(Some(&square()), false).is_ok());
    }

    #[test]
    fn decompose_scales_to_subpixels() {
        let mut sink: Vec<RasterCommand> = Vec::new();
        decompose(&mut sink, &square(), 1.0, 0.0, 0.0, false).unwrap();
        assert_eq!(
            sink[0],
            RasterCommand::MoveTo {
                x: F26Dot6::from_bits(0),
                y: F26Dot6::from_bits(0)
            }
        );
        assert_eq!(
            sink[1],
            RasterCommand::LineTo {
                x: F26Dot6::from_bits(640),
                y: F26Dot6::from_bits(0)
            }
        );
        assert_eq!(sink.last(), Some(&RasterCommand::Close));
    }

    #[test]
    fn decompose_flips_y() {
        let mut sink: Vec<RasterCommand> = Vec::new();
        decompose(&mut sink, &square(), 1.0, 0.0, 20.0, true).unwrap();
        // (10, 10) maps to (10, -10 + 20) pixels
        assert_eq!(
            sink[2],
            RasterCommand::LineTo {
                x: F26Dot6::from_bits(640),
                y: F26Dot6::from_bits(640)
            }
        );
    }

    #[test]
    fn decompose_closes_implicitly_on_fresh_move() {
        let path = GlyphPath::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 1.0, y: 0.0 },
            PathCommand::MoveTo { x: 5.0, y: 5.0 },
            PathCommand::LineTo { x: 6.0, y: 5.0 },
        ]);
        let mut sink: Vec<RasterCommand> = Vec::new();
        decompose(&mut sink, &path, 1.0, 0.0, 0.0, false).unwrap();
        let closes = sink
            .iter()
            .filter(|cmd| matches!(cmd, RasterCommand::Close))
            .count();
        assert_eq!(closes, 2);
        assert!(matches!(sink[2], RasterCommand::Close));
    }

    #[test]
    fn decompose_is_deterministic() {
        let path = square();
        let mut first: Vec<RasterCommand> = Vec::new();
        let mut second: Vec<RasterCommand> = Vec::new();
        decompose(&mut first, &path, 1.5, 3.0, -2.0, true).unwrap();
        decompose(&mut second, &path, 1.5, 3.0, -2.0, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bounds_floor_and_ceil() {
        let path = GlyphPath {
            bounds: Some(BoundingBox {
                x_min: 10.0,
                y_min: 20.0,
                x_max: 50.1,
                y_max: 80.2,
            }),
            ..Default::default()
        };
        assert_eq!(
            path_bounds(&path, 1.0, false),
            Some(BoundingBox {
                x_min: 10,
                y_min: 20,
                x_max: 51,
                y_max: 81,
            })
        );
        assert_eq!(
            path_bounds(&path, 1.0, true),
            Some(BoundingBox {
                x_min: 10,
                y_min: -81,
                x_max: 51,
                y_max: -20,
            })
        );
        assert_eq!(path_bounds(&GlyphPath::default(), 1.0, false), None);
    }

    #[test]
    fn fill_rule_from_flags() {
        let mut path = square();
        assert_eq!(path.fill_rule(), FillRule::NonZero);
        path.flags = PathFlags::EVEN_ODD_FILL;
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
        path.flags = PathFlags::EVEN_ODD_FILL.union(PathFlags::HIGH_PRECISION);
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    }

    #[test]
    fn svg_output() {
        let mut svg = SvgRasterizer::default();
        decompose(&mut svg, &square(), 1.0, 0.0, 0.0, false).unwrap();
        assert_eq!(
            svg.as_ref(),
            "M0.0,0.0 L10.0,0.0 L10.0,10.0 L0.0,10.0 Z"
        );
    }

    #[test]
    fn decomposed_square_matches_kurbo_bounds() {
        use kurbo::Shape;
        let mut sink: Vec<RasterCommand> = Vec::new();
        decompose(&mut sink, &square(), 2.0, 0.0, 0.0, false).unwrap();
        let mut bez = kurbo::BezPath::new();
        let pt = |x: F26Dot6, y: F26Dot6| {
            kurbo::Point::new(x.to_bits() as f64 / 64.0, y.to_bits() as f64 / 64.0)
        };
        for cmd in &sink {
            match *cmd {
                RasterCommand::MoveTo { x, y } => bez.move_to(pt(x, y)),
                RasterCommand::LineTo { x, y } => bez.line_to(pt(x, y)),
                RasterCommand::ConicTo { cx, cy, x, y } => bez.quad_to(pt(cx, cy), pt(x, y)),
                RasterCommand::CubicTo {
                    cx0,
                    cy0,
                    cx1,
                    cy1,
                    x,
                    y,
                } => bez.curve_to(pt(cx0, cy0), pt(cx1, cy1), pt(x, y)),
                RasterCommand::Close => bez.close_path(),
                RasterCommand::SetClip { .. } => {}
            }
        }
        let bbox = bez.bounding_box();
        assert_eq!((bbox.x0, bbox.y0, bbox.x1, bbox.y1), (0.0, 0.0, 20.0, 20.0));
    }
}
