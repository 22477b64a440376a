//! The scanline rasterizer contract and sinks for test output.

use core::fmt::Write;

use read_tables::types::F26Dot6;

/// Interface to a scanline rasterizer accepting 26.6 fixed-point
/// drawing commands.
///
/// The decomposer emits one `move_to` per contour, drawing segments,
/// and a `close` ending each contour. Implementations produce pixels
/// (or record the stream); none of the methods report errors.
pub trait Rasterizer {
    /// Restricts rasterization to the given integer pixel bounds.
    fn set_clip(&mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32);

    /// Begins a new contour at (x, y).
    fn move_to(&mut self, x: F26Dot6, y: F26Dot6);

    /// Adds a line segment from the current point to (x, y).
    fn line_to(&mut self, x: F26Dot6, y: F26Dot6);

    /// Adds a conic (quadratic) segment with control point (cx, cy)
    /// ending at (x, y).
    fn conic_to(&mut self, cx: F26Dot6, cy: F26Dot6, x: F26Dot6, y: F26Dot6);

    /// Adds a cubic segment with control points (cx0, cy0) and
    /// (cx1, cy1) ending at (x, y).
    fn cubic_to(
        &mut self,
        cx0: F26Dot6,
        cy0: F26Dot6,
        cx1: F26Dot6,
        cy1: F26Dot6,
        x: F26Dot6,
        y: F26Dot6,
    );

    /// Ends the current contour.
    fn close(&mut self);
}

/// A single recorded rasterizer call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RasterCommand {
    /// A clip rectangle in integer pixels.
    SetClip {
        /// Minimum x.
        x_min: i32,
        /// Minimum y.
        y_min: i32,
        /// Maximum x.
        x_max: i32,
        /// Maximum y.
        y_max: i32,
    },
    /// Begin a contour.
    MoveTo {
        /// Target x.
        x: F26Dot6,
        /// Target y.
        y: F26Dot6,
    },
    /// A line segment.
    LineTo {
        /// Target x.
        x: F26Dot6,
        /// Target y.
        y: F26Dot6,
    },
    /// A conic segment.
    ConicTo {
        /// Control x.
        cx: F26Dot6,
        /// Control y.
        cy: F26Dot6,
        /// Target x.
        x: F26Dot6,
        /// Target y.
        y: F26Dot6,
    },
    /// A cubic segment.
    CubicTo {
        /// First control x.
        cx0: F26Dot6,
        /// First control y.
        cy0: F26Dot6,
        /// Second control x.
        cx1: F26Dot6,
        /// Second control y.
        cy1: F26Dot6,
        /// Target x.
        x: F26Dot6,
        /// Target y.
        y: F26Dot6,
    },
    /// End of a contour.
    Close,
}

impl Rasterizer for Vec<RasterCommand> {
    fn set_clip(&mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32) {
        self.push(RasterCommand::SetClip {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    fn move_to(&mut self, x: F26Dot6, y: F26Dot6) {
        self.push(RasterCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: F26Dot6, y: F26Dot6) {
        self.push(RasterCommand::LineTo { x, y })
    }

    fn conic_to(&mut self, cx: F26Dot6, cy: F26Dot6, x: F26Dot6, y: F26Dot6) {
        self.push(RasterCommand::ConicTo { cx, cy, x, y })
    }

    fn cubic_to(
        &mut self,
        cx0: F26Dot6,
        cy0: F26Dot6,
        cx1: F26Dot6,
        cy1: F26Dot6,
        x: F26Dot6,
        y: F26Dot6,
    ) {
        self.push(RasterCommand::CubicTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(RasterCommand::Close)
    }
}

/// Rasterizer that drops all drawing output into the ether.
pub struct NullRasterizer;

impl Rasterizer for NullRasterizer {
    fn set_clip(&mut self, _x_min: i32, _y_min: i32, _x_max: i32, _y_max: i32) {}
    fn move_to(&mut self, _x: F26Dot6, _y: F26Dot6) {}
    fn line_to(&mut self, _x: F26Dot6, _y: F26Dot6) {}
    fn conic_to(&mut self, _cx: F26Dot6, _cy: F26Dot6, _x: F26Dot6, _y: F26Dot6) {}
    fn cubic_to(
        &mut self,
        _cx0: F26Dot6,
        _cy0: F26Dot6,
        _cx1: F26Dot6,
        _cy1: F26Dot6,
        _x: F26Dot6,
        _y: F26Dot6,
    ) {
    }
    fn close(&mut self) {}
}

/// Rasterizer that renders the command stream as SVG style path data,
/// with subpixel coordinates converted back to pixels.
#[derive(Clone, Default, Debug)]
pub struct SvgRasterizer(String);

impl SvgRasterizer {
    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn maybe_push_space(&mut self) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
    }

    fn pixels(v: F26Dot6) -> f32 {
        v.to_bits() as f32 / F26Dot6::ONE_PIXEL as f32
    }
}

impl core::ops::Deref for SvgRasterizer {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl Rasterizer for SvgRasterizer {
    fn set_clip(&mut self, _x_min: i32, _y_min: i32, _x_max: i32, _y_max: i32) {}

    fn move_to(&mut self, x: F26Dot6, y: F26Dot6) {
        self.maybe_push_space();
        let (x, y) = (Self::pixels(x), Self::pixels(y));
        let _ = write!(self.0, "M{x:.1},{y:.1}");
    }

    fn line_to(&mut self, x: F26Dot6, y: F26Dot6) {
        self.maybe_push_space();
        let (x, y) = (Self::pixels(x), Self::pixels(y));
        let _ = write!(self.0, "L{x:.1},{y:.1}");
    }

    fn conic_to(&mut self, cx: F26Dot6, cy: F26Dot6, x: F26Dot6, y: F26Dot6) {
        self.maybe_push_space();
        let (cx, cy) = (Self::pixels(cx), Self::pixels(cy));
        let (x, y) = (Self::pixels(x), Self::pixels(y));
        let _ = write!(self.0, "Q{cx:.1},{cy:.1} {x:.1},{y:.1}");
    }

    fn cubic_to(
        &mut self,
        cx0: F26Dot6,
        cy0: F26Dot6,
        cx1: F26Dot6,
        cy1: F26Dot6,
        x: F26Dot6,
        y: F26Dot6,
    ) {
        self.maybe_push_space();
        let (cx0, cy0) = (Self::pixels(cx0), Self::pixels(cy0));
        let (cx1, cy1) = (Self::pixels(cx1), Self::pixels(cy1));
        let (x, y) = (Self::pixels(x), Self::pixels(y));
        let _ = write!(self.0, "C{cx0:.1},{cy0:.1} {cx1:.1},{cy1:.1} {x:.1},{y:.1}");
    }

    fn close(&mut self) {
        self.maybe_push_space();
        self.0.push('Z');
    }
}

impl AsRef<str> for SvgRasterizer {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}
