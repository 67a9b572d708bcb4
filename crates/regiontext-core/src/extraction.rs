//! Region extraction results and their display form.

use std::fmt;

/// File name offered when the extracted text is saved.
pub const DOWNLOAD_FILE_NAME: &str = "extracted_text.txt";

/// MIME type of the saved text.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Text extracted from the selected region of one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    /// 1-based page number as shown to the user.
    pub page_number: usize,
    pub text: String,
}

/// Region text for every page that produced some, in page order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionResult {
    pages: Vec<PageText>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's text. Blank text is dropped so that no header is
    /// emitted for it.
    pub fn push(&mut self, page_number: usize, text: String) {
        if !text.trim().is_empty() {
            self.pages.push(PageText { page_number, text });
        }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// False means "no text found in the selected area", which is not an error.
    pub fn has_text(&self) -> bool {
        self.pages.iter().any(|page| !page.text.trim().is_empty())
    }

    /// Concatenation of `"\n\n--- Page N ---\n" + text` over all pages.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in &self.pages {
            write!(f, "\n\n--- Page {} ---\n{}", page.page_number, page.text)?;
        }
        Ok(())
    }
}
