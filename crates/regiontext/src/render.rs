//! Page rasterization for the selection surface.
//!
//! A [`Rasterize`] implementation draws a page at a given resolution; [`render`]
//! then resizes the bitmap with one uniform scale factor so it fits inside
//! the configured display envelope.

use std::io::Cursor;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use regiontext_core::{Dims, PixelSpace, PointSpace};

use crate::document::Document;
use crate::error::RenderError;
use crate::page::Page;

/// Largest native bitmap, in pixels, a render may allocate by default.
pub const DEFAULT_MAX_NATIVE_PIXELS: u64 = 25_000_000;

/// Renders a page to an RGBA bitmap.
pub trait Rasterize {
    /// Draw `page` at `resolution` dots per inch (72 gives one pixel per
    /// point).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Allocation`] if the bitmap cannot be created.
    fn rasterize(&self, page: &Page, resolution: f64) -> Result<RgbaImage, RenderError>;
}

/// Display envelope and resolution for rendered pages.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Largest output width in pixels.
    pub max_width: u32,
    /// Largest output height in pixels.
    pub max_height: u32,
    /// Enlarge pages smaller than the envelope. When false, the scale
    /// factor is capped at 1.
    pub upscale: bool,
    /// Native rasterization resolution in DPI.
    pub resolution: f64,
    /// Largest native bitmap (width × height) allowed before downscaling.
    pub max_native_pixels: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 1000,
            upscale: true,
            resolution: 72.0,
            max_native_pixels: DEFAULT_MAX_NATIVE_PIXELS,
        }
    }
}

/// A rendered page together with the dimensions needed to map a rectangle
/// drawn on it back to PDF points.
#[derive(Debug, Clone)]
pub struct RasterImage {
    image: RgbaImage,
    pixel_dims: Dims<PixelSpace>,
    point_dims: Dims<PointSpace>,
    page_index: usize,
}

impl RasterImage {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Size of the image in pixels.
    pub fn pixel_dims(&self) -> Dims<PixelSpace> {
        self.pixel_dims
    }

    /// Size of the source page in points.
    pub fn point_dims(&self) -> Dims<PointSpace> {
        self.point_dims
    }

    /// 0-based index of the source page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encode`] if encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, image::ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

/// Native bitmap size of a page at `resolution`: each side rounded up.
///
/// # Errors
///
/// Returns [`RenderError::Allocation`] if a side is not a positive finite
/// size or the pixel count exceeds `max_pixels`.
pub fn native_size(
    width_pt: f64,
    height_pt: f64,
    resolution: f64,
    max_pixels: u64,
) -> Result<(u32, u32), RenderError> {
    let scale = resolution / 72.0;
    let side = |points: f64| (points * scale).ceil();
    let (w, h) = (side(width_pt), side(height_pt));
    // float to int casts saturate, so the error reports at most u32::MAX
    let (width, height) = (w as u32, h as u32);
    let fits = |n: f64| n.is_finite() && n >= 1.0 && n <= f64::from(u32::MAX);
    if !fits(w) || !fits(h) || u64::from(width) * u64::from(height) > max_pixels {
        return Err(RenderError::Allocation { width, height });
    }
    Ok((width, height))
}

/// Uniform scale factor that fits `native` inside the envelope.
pub fn fit_scale(native_width: u32, native_height: u32, options: &RenderOptions) -> f64 {
    let s = (f64::from(options.max_width) / f64::from(native_width))
        .min(f64::from(options.max_height) / f64::from(native_height));
    if options.upscale { s } else { s.min(1.0) }
}

/// Output size for a native bitmap: each side scaled and rounded, never
/// below one pixel.
pub fn scaled_size(native_width: u32, native_height: u32, options: &RenderOptions) -> (u32, u32) {
    let s = fit_scale(native_width, native_height, options);
    let side = |n: u32| ((f64::from(n) * s).round() as u32).max(1);
    (side(native_width), side(native_height))
}

/// Render the page at a 0-based index and fit it into the display envelope.
///
/// # Errors
///
/// Returns [`RenderError::PageOutOfRange`] for a bad index,
/// [`RenderError::Allocation`] if the native bitmap would exceed
/// `max_native_pixels`, [`RenderError::Content`] if the page cannot be
/// interpreted, and whatever the rasterizer reports.
pub fn render<R: Rasterize + ?Sized>(
    document: &Document,
    rasterizer: &R,
    page_index: usize,
    options: &RenderOptions,
) -> Result<RasterImage, RenderError> {
    let Some(info) = document.page_info(page_index) else {
        return Err(RenderError::PageOutOfRange {
            page: page_index + 1,
            page_count: document.page_count(),
        });
    };
    native_size(
        info.width(),
        info.height(),
        options.resolution,
        options.max_native_pixels,
    )?;
    let page = document.page(page_index).map_err(RenderError::Content)?;
    let native = rasterizer.rasterize(&page, options.resolution)?;
    if native.width() == 0 || native.height() == 0 {
        return Err(RenderError::Allocation {
            width: native.width(),
            height: native.height(),
        });
    }

    let (width, height) = scaled_size(native.width(), native.height(), options);
    let image = if (width, height) == native.dimensions() {
        native
    } else {
        imageops::resize(&native, width, height, FilterType::Lanczos3)
    };
    tracing::debug!(page = page_index + 1, width, height, "page rendered");

    Ok(RasterImage {
        image,
        pixel_dims: Dims::from_pixels(width, height)?,
        point_dims: info.dims(),
        page_index,
    })
}
