//! regiontext-core: backend-independent types for region text extraction.
//!
//! This crate provides the coordinate spaces and mapping between a rendered
//! page image and PDF points, the character/word/line model used to turn
//! glyphs inside a region into text, and the per-page extraction result.
//! It does not parse PDF files; see `regiontext-parse` for that.

pub mod error;
pub mod extraction;
pub mod geometry;
pub mod layout;
pub mod mapping;
pub mod painting;
pub mod region;
pub mod text;
pub mod words;

pub use error::PdfError;
pub use extraction::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, ExtractionResult, PageText};
pub use geometry::{BBox, Ctm, Point};
pub use layout::{TextLine, TextOptions, chars_to_text, cluster_words_into_lines, words_to_text};
pub use mapping::{AxisScale, to_pixel_space, to_point_space};
pub use painting::{Color, PaintOp, PaintedPath, PathSegment};
pub use region::{CanvasRect, CoordinateSpace, Dims, InvalidDims, PixelSpace, PointSpace, Region};
pub use text::{Char, is_cjk, is_cjk_text};
pub use words::{Word, WordExtractor, WordOptions};
