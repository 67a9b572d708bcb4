//! Rectangles and dimensions tagged with the coordinate space they live in.
//!
//! A selection is drawn in [`PixelSpace`] (the rendered page image) and text
//! is located in [`PointSpace`] (PDF points, 1/72 inch, top-left origin of the
//! visible page). The space is part of the type, so a pixel rectangle cannot
//! be handed to the text extractor without going through
//! [`to_point_space`](crate::mapping::to_point_space).

use std::fmt;
use std::marker::PhantomData;

use crate::geometry::BBox;

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for coordinate spaces.
pub trait CoordinateSpace:
    sealed::Sealed + fmt::Debug + Clone + Copy + PartialEq + Default + 'static
{
    /// Unit name used in messages.
    const UNIT: &'static str;
}

/// Rendered-image pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSpace;

/// PDF points of the visible page, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointSpace;

impl sealed::Sealed for PixelSpace {}
impl sealed::Sealed for PointSpace {}

impl CoordinateSpace for PixelSpace {
    const UNIT: &'static str = "px";
}

impl CoordinateSpace for PointSpace {
    const UNIT: &'static str = "pt";
}

/// Axis-aligned rectangle `(x0, y0)-(x1, y1)` in space `S`.
///
/// Construction does not reorder corners: a rectangle drawn "backwards" stays
/// unnormalized so that consumers can reject it explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct Region<S: CoordinateSpace> {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S: CoordinateSpace> Region<S> {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            space: PhantomData,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// All four coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// `x0 <= x1` and `y0 <= y1`.
    pub fn is_normalized(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// Zero width or zero height: selects nothing.
    pub fn is_degenerate(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    /// Copy with corners swapped as needed so that `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    /// The same rectangle as a top-left origin [`BBox`].
    pub fn to_bbox(&self) -> BBox {
        BBox::new(self.x0, self.y0, self.x1, self.y1)
    }
}

impl<S: CoordinateSpace> fmt::Display for Region<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1})-({:.1}, {:.1}) {}",
            self.x0,
            self.y0,
            self.x1,
            self.y1,
            S::UNIT
        )
    }
}

/// Error returned by [`Dims::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidDims {
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for InvalidDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dimensions must be finite and positive, got {}x{}",
            self.width, self.height
        )
    }
}

impl std::error::Error for InvalidDims {}

/// Width and height of a page or image in space `S`. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(bound = ""))]
pub struct Dims<S: CoordinateSpace> {
    width: f64,
    height: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    space: PhantomData<S>,
}

impl<S: CoordinateSpace> Dims<S> {
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidDims> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self {
                width,
                height,
                space: PhantomData,
            })
        } else {
            Err(InvalidDims { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// The full extent `(0, 0)-(width, height)`.
    pub fn bounds(&self) -> Region<S> {
        Region::new(0.0, 0.0, self.width, self.height)
    }
}

impl Dims<PixelSpace> {
    /// Integer pixel dimensions.
    pub fn from_pixels(width: u32, height: u32) -> Result<Self, InvalidDims> {
        Self::new(f64::from(width), f64::from(height))
    }
}

impl<S: CoordinateSpace> fmt::Display for Dims<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, S::UNIT)
    }
}

/// A rectangle as reported by a drawing surface: origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `(left, top, left + width, top + height)` in pixel space.
    pub fn to_region(&self) -> Region<PixelSpace> {
        Region::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}
