//! Document loading and page access.

use std::path::Path;

use regiontext_core::{BBox, Ctm, Dims, PaintedPath, PathSegment, PdfError, PointSpace};
use regiontext_parse::{
    CollectingHandler, ExtractOptions, LopdfBackend, LopdfDocument, PathEvent, PdfBackend,
    char_from_event,
};

use crate::error::LoadError;
use crate::page::Page;

/// Metadata of one page, computed when the document is opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInfo {
    index: usize,
    dims: Dims<PointSpace>,
    rotation: i32,
}

impl PageInfo {
    /// 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number as shown to the user.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Displayed width in points.
    pub fn width(&self) -> f64 {
        self.dims.width()
    }

    /// Displayed height in points.
    pub fn height(&self) -> f64 {
        self.dims.height()
    }

    pub fn dims(&self) -> Dims<PointSpace> {
        self.dims
    }

    /// Clockwise display rotation in degrees.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// `(0, 0, width, height)`.
    pub fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width(), self.height())
    }
}

/// An opened PDF document.
///
/// Read-only once opened. Pages are interpreted on demand by
/// [`Document::page`].
///
/// # Example
///
/// ```ignore
/// let doc = Document::open(&bytes)?;
/// let page = doc.page(0)?;
/// println!("{} chars", page.chars().len());
/// ```
pub struct Document {
    doc: LopdfDocument,
    pages: Vec<PageInfo>,
    options: ExtractOptions,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("pages", &self.pages)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Open a PDF document from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the bytes are not a PDF,
    /// [`LoadError::Encrypted`] for encrypted files, [`LoadError::NoPages`]
    /// for an empty page tree and [`LoadError::InvalidPage`] if any page has
    /// no usable size.
    pub fn open(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::open_with_options(bytes, ExtractOptions::default())
    }

    /// Open a PDF document with interpreter limits other than the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Document::open`].
    pub fn open_with_options(bytes: &[u8], options: ExtractOptions) -> Result<Self, LoadError> {
        let doc = LopdfBackend::open(bytes)?;
        let page_count = LopdfBackend::page_count(&doc);
        if page_count == 0 {
            return Err(LoadError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let invalid = |reason: String| LoadError::InvalidPage {
                page: index + 1,
                reason,
            };
            let page = LopdfBackend::get_page(&doc, index).map_err(|e| invalid(e.to_string()))?;
            let geometry =
                LopdfBackend::page_geometry(&doc, &page).map_err(|e| invalid(e.to_string()))?;
            let dims = Dims::new(geometry.width(), geometry.height())
                .map_err(|e| invalid(e.to_string()))?;
            pages.push(PageInfo {
                index,
                dims,
                rotation: geometry.rotation(),
            });
        }

        tracing::debug!(pages = page_count, "document opened");
        Ok(Self {
            doc,
            pages,
            options,
        })
    }

    /// Read and open a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Document::open`].
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::open(&bytes)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Metadata of every page, in order.
    pub fn pages(&self) -> &[PageInfo] {
        &self.pages
    }

    /// Metadata of the page at a 0-based index.
    pub fn page_info(&self, index: usize) -> Option<&PageInfo> {
        self.pages.get(index)
    }

    /// Interpret the page at a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::PageOutOfRange`] for a bad index, or the
    /// interpreter error if the content stream cannot be read.
    pub fn page(&self, index: usize) -> Result<Page, PdfError> {
        let info = *self.page_info(index).ok_or(PdfError::PageOutOfRange {
            index,
            page_count: self.page_count(),
        })?;
        let lopdf_page = LopdfBackend::get_page(&self.doc, index)?;
        let geometry = LopdfBackend::page_geometry(&self.doc, &lopdf_page)?;

        let mut handler = CollectingHandler::default();
        LopdfBackend::interpret_page(&self.doc, &lopdf_page, &mut handler, &self.options)?;

        let display = geometry.display_ctm();
        let chars = handler
            .chars
            .iter()
            .map(|event| char_from_event(event, &display))
            .collect();
        let paths = handler
            .paths
            .into_iter()
            .map(|event| painted_path(event, &display))
            .collect();

        Ok(Page::new(info, chars, paths))
    }
}

/// Move a page space path into display coordinates.
fn painted_path(event: PathEvent, display: &Ctm) -> PaintedPath {
    let segments = event
        .segments
        .into_iter()
        .map(|segment| match segment {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(display.transform_point(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(display.transform_point(p)),
            PathSegment::CurveTo(c1, c2, p) => PathSegment::CurveTo(
                display.transform_point(c1),
                display.transform_point(c2),
                display.transform_point(p),
            ),
            PathSegment::Close => PathSegment::Close,
        })
        .collect();
    PaintedPath {
        segments,
        paint: event.paint,
        line_width: event.line_width,
        stroking_color: event.stroking_color,
        non_stroking_color: event.non_stroking_color,
        even_odd: event.even_odd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regiontext_core::{Color, PaintOp, Point};

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Document::open(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Document::open_file("/nonexistent/regiontext/file.pdf").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn paths_are_flipped_into_display_space() {
        let display = Ctm::new(1.0, 0.0, 0.0, -1.0, 0.0, 792.0);
        let event = PathEvent {
            segments: vec![
                PathSegment::MoveTo(Point::new(10.0, 700.0)),
                PathSegment::LineTo(Point::new(20.0, 692.0)),
                PathSegment::Close,
            ],
            paint: PaintOp::Stroke,
            even_odd: false,
            line_width: 1.5,
            stroking_color: Color::Gray(0.0),
            non_stroking_color: Color::Gray(0.0),
        };
        let path = painted_path(event, &display);
        assert_eq!(path.segments[0], PathSegment::MoveTo(Point::new(10.0, 92.0)));
        assert_eq!(path.segments[1], PathSegment::LineTo(Point::new(20.0, 100.0)));
        assert_eq!(path.line_width, 1.5);
    }
}
