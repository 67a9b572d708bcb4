//! PDF parsing backend trait.
//!
//! [`PdfBackend`] is the seam between the facade and a concrete PDF parser:
//! it opens documents, reports page geometry, and runs a page's content
//! stream through a [`ContentHandler`].

use regiontext_core::PdfError;

use crate::handler::ContentHandler;
use crate::interpreter::ExtractOptions;
use crate::page_geometry::PageGeometry;

/// Trait abstracting PDF parsing operations.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let page = MyBackend::get_page(&doc, 0)?;
/// let geometry = MyBackend::page_geometry(&doc, &page)?;
/// MyBackend::interpret_page(&doc, &page, &mut handler, &options)?;
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// A reference to a single page within a document.
    type Page;

    /// Backend-specific error type, convertible to [`PdfError`].
    type Error: std::error::Error + Into<PdfError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a readable, unencrypted PDF.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    fn page_count(doc: &Self::Document) -> usize;

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    fn get_page(doc: &Self::Document, index: usize) -> Result<Self::Page, Self::Error>;

    /// Visible size and rotation of a page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page has no usable MediaBox.
    fn page_geometry(doc: &Self::Document, page: &Self::Page) -> Result<PageGeometry, Self::Error>;

    /// Interpret the page's content stream, calling back into the handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the content stream cannot be read or tokenized.
    fn interpret_page(
        doc: &Self::Document,
        page: &Self::Page,
        handler: &mut dyn ContentHandler,
        options: &ExtractOptions,
    ) -> Result<(), Self::Error>;
}
