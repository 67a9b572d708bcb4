//! User-facing error taxonomy: one error type per pipeline stage.

use regiontext_core::{InvalidDims, PdfError};
use regiontext_parse::BackendError;

/// The uploaded bytes could not be turned into a usable [`Document`](crate::Document).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("not a readable PDF: {0}")]
    Parse(#[source] BackendError),

    #[error("the PDF is encrypted and passwords are not supported")]
    Encrypted,

    #[error("the PDF has no pages")]
    NoPages,

    #[error("page {page} is unusable: {reason}")]
    InvalidPage {
        /// 1-based page number.
        page: usize,
        reason: String,
    },

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BackendError> for LoadError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Core(PdfError::PasswordRequired) => LoadError::Encrypted,
            other => LoadError::Parse(other),
        }
    }
}

/// A page could not be turned into a display image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("page {page} is out of range (1..={page_count})")]
    PageOutOfRange {
        /// 1-based page number that was requested.
        page: usize,
        page_count: usize,
    },

    #[error("page content could not be interpreted: {0}")]
    Content(#[source] PdfError),

    #[error("cannot allocate a {width}x{height} bitmap")]
    Allocation { width: u32, height: u32 },

    #[error("invalid image dimensions: {0}")]
    Dimensions(#[from] InvalidDims),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Region text extraction failed.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("malformed region {region}: coordinates must be finite with x0 <= x1 and y0 <= y1")]
    MalformedRegion {
        /// The offending region, formatted.
        region: String,
    },

    #[error("page {page}: {source}")]
    Page {
        /// 1-based page number.
        page: usize,
        #[source]
        source: PdfError,
    },
}
