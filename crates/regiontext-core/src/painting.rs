//! Painted vector content used to draw page previews.

use crate::geometry::Point;

/// A device color as set by the content stream color operators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Gray(f32),
    Rgb(f32, f32, f32),
    Cmyk(f32, f32, f32, f32),
}

impl Default for Color {
    fn default() -> Self {
        Color::Gray(0.0)
    }
}

impl Color {
    /// Naive device conversion to RGB components in `[0, 1]`.
    pub fn to_rgb(&self) -> (f32, f32, f32) {
        let clamp = |v: f32| v.clamp(0.0, 1.0);
        match *self {
            Color::Gray(g) => (clamp(g), clamp(g), clamp(g)),
            Color::Rgb(r, g, b) => (clamp(r), clamp(g), clamp(b)),
            Color::Cmyk(c, m, y, k) => (
                clamp((1.0 - c) * (1.0 - k)),
                clamp((1.0 - m) * (1.0 - k)),
                clamp((1.0 - y) * (1.0 - k)),
            ),
        }
    }
}

/// How a path was painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaintOp {
    Stroke,
    Fill,
    FillAndStroke,
}

/// One segment of a path in top-left page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Close,
}

/// A painted path in top-left page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPath {
    pub segments: Vec<PathSegment>,
    pub paint: PaintOp,
    /// Stroke width in page points (already scaled by the CTM).
    pub line_width: f64,
    pub stroking_color: Color,
    pub non_stroking_color: Color,
    /// True for the even-odd fill rule.
    pub even_odd: bool,
}
