//! Region text extraction across every page of a document.

use regiontext_core::{ExtractionResult, PointSpace, Region, TextOptions};

use crate::document::Document;
use crate::error::ExtractError;

/// Text confined to a rectangle of a page.
///
/// Implemented by [`Page`](crate::Page); another PDF library can stand in
/// by implementing it for its own page type.
pub trait ExtractWithin {
    /// Text of the characters lying entirely inside `region`, grouped into
    /// words and lines. A region that misses the page yields an empty
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedRegion`] for non-finite or
    /// unnormalized coordinates.
    fn extract_within(
        &self,
        region: &Region<PointSpace>,
        options: &TextOptions,
    ) -> Result<String, ExtractError>;
}

/// Reject regions with non-finite coordinates or swapped corners.
pub(crate) fn validate_region(region: &Region<PointSpace>) -> Result<(), ExtractError> {
    if region.is_finite() && region.is_normalized() {
        Ok(())
    } else {
        Err(ExtractError::MalformedRegion {
            region: region.to_string(),
        })
    }
}

/// Extract the text inside `region` from every page of `document`.
///
/// The same point-space rectangle is applied to each page, clipped to that
/// page's bounds. Pages with no text in the region are left out of the
/// result. A zero-width or zero-height region selects nothing and returns an
/// empty result without interpreting any page.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedRegion`] before touching any page if the
/// region is malformed, and [`ExtractError::Page`] if a page's content cannot
/// be interpreted.
///
/// # Example
///
/// ```ignore
/// let region = Region::<PointSpace>::new(72.0, 72.0, 300.0, 200.0);
/// let result = extract_text(&doc, &region, &TextOptions::default())?;
/// if result.has_text() {
///     print!("{result}");
/// }
/// ```
pub fn extract_text(
    document: &Document,
    region: &Region<PointSpace>,
    options: &TextOptions,
) -> Result<ExtractionResult, ExtractError> {
    validate_region(region)?;

    let mut result = ExtractionResult::new();
    if region.is_degenerate() {
        tracing::debug!(%region, "degenerate region selects nothing");
        return Ok(result);
    }

    let selection = region.to_bbox();
    for info in document.pages() {
        let page_number = info.number();
        if selection.intersection(&info.bbox()).is_none() {
            continue;
        }
        let page = document
            .page(info.index())
            .map_err(|source| ExtractError::Page {
                page: page_number,
                source,
            })?;
        let text = page.extract_within(region, options)?;
        tracing::debug!(page = page_number, len = text.len(), "region text extracted");
        result.push(page_number, text);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_swapped_corners() {
        let region = Region::<PointSpace>::new(10.0, 10.0, 5.0, 20.0);
        assert!(matches!(
            validate_region(&region),
            Err(ExtractError::MalformedRegion { .. })
        ));
    }

    #[test]
    fn validation_rejects_nan() {
        let region = Region::<PointSpace>::new(0.0, f64::NAN, 5.0, 20.0);
        assert!(validate_region(&region).is_err());
    }

    #[test]
    fn validation_accepts_degenerate() {
        let region = Region::<PointSpace>::new(10.0, 10.0, 10.0, 20.0);
        assert!(validate_region(&region).is_ok());
    }
}
