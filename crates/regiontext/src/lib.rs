//! regiontext: extract the text inside a rectangle drawn on a rendered PDF page.
//!
//! A page is rendered to a bounded image, the user draws one rectangle on it,
//! the rectangle is mapped from image pixels to PDF points, and the text
//! inside it is collected from every page of the document.
//!
//! # Architecture
//!
//! - **regiontext-core**: coordinate spaces, mapping, chars/words/lines, results
//! - **regiontext-parse**: lopdf backend and content stream interpreter
//! - **regiontext** (this crate): loading, rendering pipeline, extraction, session
//!
//! # Example
//!
//! ```ignore
//! let doc = Document::open(&bytes)?;
//! let image = render(&doc, &rasterizer, 0, &RenderOptions::default())?;
//! let drawn = CanvasRect::new(100.0, 100.0, 200.0, 100.0).to_region();
//! let region = to_point_space(&drawn, &image.pixel_dims(), &image.point_dims());
//! let result = extract_text(&doc, &region, &TextOptions::default())?;
//! print!("{result}");
//! ```

mod document;
mod error;
mod extract;
mod page;
mod render;
mod session;

pub use document::{Document, PageInfo};
pub use error::{ExtractError, LoadError, RenderError};
pub use extract::{ExtractWithin, extract_text};
pub use page::Page;
pub use render::{
    DEFAULT_MAX_NATIVE_PIXELS, RasterImage, Rasterize, RenderOptions, fit_scale, native_size,
    render, scaled_size,
};
pub use session::{Outcome, Session, SessionError, SessionOptions};

pub use regiontext_core;
pub use regiontext_core::{
    AxisScale, BBox, CanvasRect, Char, Color, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, Dims,
    ExtractionResult, InvalidDims, PageText, PaintOp, PaintedPath, PathSegment, PdfError,
    PixelSpace, Point, PointSpace, Region, TextOptions, to_pixel_space, to_point_space,
};
pub use regiontext_parse;
pub use regiontext_parse::ExtractOptions;

pub use image::RgbaImage;
