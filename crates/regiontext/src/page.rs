//! An interpreted page: characters and painted paths in display coordinates.

use regiontext_core::{BBox, Char, Dims, PaintedPath, PointSpace, Region, TextOptions, chars_to_text};

use crate::document::PageInfo;
use crate::error::ExtractError;
use crate::extract::{ExtractWithin, validate_region};

/// A single page with its content interpreted.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// visible page, after CropBox and rotation.
#[derive(Debug, Clone)]
pub struct Page {
    info: PageInfo,
    chars: Vec<Char>,
    paths: Vec<PaintedPath>,
}

impl Page {
    pub(crate) fn new(info: PageInfo, chars: Vec<Char>, paths: Vec<PaintedPath>) -> Self {
        Self { info, chars, paths }
    }

    /// 0-based page index.
    pub fn index(&self) -> usize {
        self.info.index()
    }

    pub fn width(&self) -> f64 {
        self.info.width()
    }

    pub fn height(&self) -> f64 {
        self.info.height()
    }

    pub fn dims(&self) -> Dims<PointSpace> {
        self.info.dims()
    }

    pub fn info(&self) -> &PageInfo {
        &self.info
    }

    /// `(0, 0, width, height)`.
    pub fn bbox(&self) -> BBox {
        self.info.bbox()
    }

    pub fn chars(&self) -> &[Char] {
        &self.chars
    }

    pub fn paths(&self) -> &[PaintedPath] {
        &self.paths
    }

    /// Characters whose box lies entirely inside `bbox`.
    pub fn chars_within(&self, bbox: &BBox) -> Vec<Char> {
        self.chars
            .iter()
            .filter(|c| bbox.contains(&c.bbox))
            .cloned()
            .collect()
    }
}

impl ExtractWithin for Page {
    fn extract_within(
        &self,
        region: &Region<PointSpace>,
        options: &TextOptions,
    ) -> Result<String, ExtractError> {
        validate_region(region)?;
        let Some(clip) = region.to_bbox().intersection(&self.bbox()) else {
            return Ok(String::new());
        };
        let chars = self.chars_within(&clip);
        Ok(chars_to_text(&chars, options))
    }
}
