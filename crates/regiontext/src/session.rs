//! Interactive selection state.
//!
//! A [`Session`] threads what a front end would otherwise keep in globals:
//! the open document, the page being shown, the dimensions of the image the
//! user is drawing on, and the last rectangle drawn.

use regiontext_core::{
    CanvasRect, Dims, ExtractionResult, PixelSpace, PointSpace, Region, TextOptions,
    to_point_space,
};

use crate::document::Document;
use crate::error::{ExtractError, LoadError, RenderError};
use crate::extract::extract_text;
use crate::render::{RasterImage, Rasterize, RenderOptions, render};

/// Rendering and text options for a [`Session`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionOptions {
    pub render: RenderOptions,
    pub text: TextOptions,
}

/// Result of [`Session::extract`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing has been drawn yet.
    NoSelection,
    /// The region holds no text on any page.
    NoText,
    Text(ExtractionResult),
}

/// Dimensions of the most recent render, kept as a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RenderedDims {
    page_index: usize,
    pixel_dims: Dims<PixelSpace>,
    point_dims: Dims<PointSpace>,
}

/// One user's pass over one document.
pub struct Session<R: Rasterize> {
    document: Document,
    rasterizer: R,
    options: SessionOptions,
    page_index: usize,
    rendered: Option<RenderedDims>,
    selection: Option<Region<PixelSpace>>,
}

impl<R: Rasterize> Session<R> {
    /// Load a document and start on its first page.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] if the bytes cannot be opened; no session
    /// exists in that case.
    pub fn open(bytes: &[u8], rasterizer: R, options: SessionOptions) -> Result<Self, LoadError> {
        Ok(Self::from_document(Document::open(bytes)?, rasterizer, options))
    }

    pub fn from_document(document: Document, rasterizer: R, options: SessionOptions) -> Self {
        Self {
            document,
            rasterizer,
            options,
            page_index: 0,
            rendered: None,
            selection: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// 1-based number of the page being shown.
    pub fn current_page(&self) -> usize {
        self.page_index + 1
    }

    /// The last rectangle drawn, in pixels of the displayed image.
    pub fn selection(&self) -> Option<&Region<PixelSpace>> {
        self.selection.as_ref()
    }

    /// Show another page, by 1-based number.
    ///
    /// The drawn rectangle is kept and will be mapped against the new page's
    /// image.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PageOutOfRange`] outside `[1, page_count]`.
    pub fn select_page(&mut self, page: usize) -> Result<(), RenderError> {
        let page_count = self.document.page_count();
        if page == 0 || page > page_count {
            return Err(RenderError::PageOutOfRange { page, page_count });
        }
        self.page_index = page - 1;
        Ok(())
    }

    /// Render the current page and remember the image dimensions for
    /// mapping later selections.
    ///
    /// # Errors
    ///
    /// Returns the [`RenderError`] from [`render`].
    pub fn render_current(&mut self) -> Result<RasterImage, RenderError> {
        let image = render(
            &self.document,
            &self.rasterizer,
            self.page_index,
            &self.options.render,
        )?;
        self.rendered = Some(RenderedDims {
            page_index: image.page_index(),
            pixel_dims: image.pixel_dims(),
            point_dims: image.point_dims(),
        });
        Ok(image)
    }

    /// Record a rectangle drawn on the displayed image, replacing any
    /// earlier one.
    pub fn draw(&mut self, rect: CanvasRect) {
        self.selection = Some(rect.to_region());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The drawn rectangle mapped to PDF points, rendering the current page
    /// first if the last render was of another page.
    ///
    /// # Errors
    ///
    /// Returns the [`RenderError`] of that render.
    pub fn selection_in_points(&mut self) -> Result<Option<Region<PointSpace>>, RenderError> {
        let Some(selection) = self.selection else {
            return Ok(None);
        };
        let dims = match self.rendered {
            Some(dims) if dims.page_index == self.page_index => dims,
            _ => {
                let image = self.render_current()?;
                RenderedDims {
                    page_index: image.page_index(),
                    pixel_dims: image.pixel_dims(),
                    point_dims: image.point_dims(),
                }
            }
        };
        let region = to_point_space(&selection, &dims.pixel_dims, &dims.point_dims);
        tracing::debug!(pixels = %selection, points = %region, "selection mapped");
        Ok(Some(region))
    }

    /// Extract the text under the drawn rectangle from every page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Render`] if the current page had to be
    /// rendered and failed, or [`SessionError::Extract`] if extraction
    /// failed.
    pub fn extract(&mut self) -> Result<Outcome, SessionError> {
        let Some(region) = self.selection_in_points()? else {
            return Ok(Outcome::NoSelection);
        };
        let result = extract_text(&self.document, &region, &self.options.text)?;
        if result.has_text() {
            Ok(Outcome::Text(result))
        } else {
            Ok(Outcome::NoText)
        }
    }
}

/// Failure of [`Session::extract`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
