//! Conversion of rectangles between rendered-pixel space and PDF point space.
//!
//! The rendered image is produced with one uniform scale factor, so the
//! inverse is a per-axis scale computed from the *same* image/page pairing.
//! Pairing dimensions from different renders produces a wrong rectangle with
//! no error signal; callers keep the two [`Dims`] together (see
//! `RasterImage` in the facade crate).

use crate::region::{CoordinateSpace, Dims, PixelSpace, PointSpace, Region};

/// Independent per-axis scale factors between two coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub x: f64,
    pub y: f64,
}

impl AxisScale {
    /// Factors that take a rectangle measured against `from` to one measured
    /// against `to`.
    pub fn between<Src: CoordinateSpace, Dst: CoordinateSpace>(
        from: &Dims<Src>,
        to: &Dims<Dst>,
    ) -> Self {
        Self {
            x: to.width() / from.width(),
            y: to.height() / from.height(),
        }
    }

    /// Scale each coordinate by its axis factor.
    pub fn apply<Src: CoordinateSpace, Dst: CoordinateSpace>(
        &self,
        rect: &Region<Src>,
    ) -> Region<Dst> {
        Region::new(
            rect.x0 * self.x,
            rect.y0 * self.y,
            rect.x1 * self.x,
            rect.y1 * self.y,
        )
    }
}

/// Map a rectangle drawn on the rendered image to PDF points.
pub fn to_point_space(
    rect: &Region<PixelSpace>,
    pixel_dims: &Dims<PixelSpace>,
    point_dims: &Dims<PointSpace>,
) -> Region<PointSpace> {
    AxisScale::between(pixel_dims, point_dims).apply(rect)
}

/// Map a rectangle in PDF points onto the rendered image.
pub fn to_pixel_space(
    rect: &Region<PointSpace>,
    point_dims: &Dims<PointSpace>,
    pixel_dims: &Dims<PixelSpace>,
) -> Region<PixelSpace> {
    AxisScale::between(point_dims, pixel_dims).apply(rect)
}
