//! Visible page geometry: crop box, rotation, and the matrix from PDF user
//! space to top-left display coordinates.

use regiontext_core::{BBox, Ctm};

/// Geometry of one page as it is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Visible area `[x0, y0, x1, y1]` in PDF user space (bottom-left origin).
    visible: [f64; 4],
    /// Clockwise display rotation: 0, 90, 180 or 270.
    rotation: i32,
}

impl PageGeometry {
    /// Build from a MediaBox, an optional CropBox and the `/Rotate` value.
    ///
    /// Boxes may list their corners in any order. The visible area is the
    /// CropBox clipped to the MediaBox; a CropBox that misses the MediaBox
    /// entirely is ignored. Rotations that are not a multiple of 90 are
    /// treated as 0.
    pub fn new(media_box: [f64; 4], crop_box: Option<[f64; 4]>, rotate: i64) -> Self {
        let media = normalize(media_box);
        let visible = crop_box
            .map(normalize)
            .and_then(|crop| {
                let clipped = [
                    crop[0].max(media[0]),
                    crop[1].max(media[1]),
                    crop[2].min(media[2]),
                    crop[3].min(media[3]),
                ];
                (clipped[0] < clipped[2] && clipped[1] < clipped[3]).then_some(clipped)
            })
            .unwrap_or(media);

        let rotation = rotate.rem_euclid(360) as i32;
        let rotation = if rotation % 90 == 0 {
            rotation
        } else {
            tracing::warn!(rotate, "ignoring /Rotate that is not a multiple of 90");
            0
        };
        Self { visible, rotation }
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    fn unrotated_size(&self) -> (f64, f64) {
        (
            self.visible[2] - self.visible[0],
            self.visible[3] - self.visible[1],
        )
    }

    /// Displayed width in points.
    pub fn width(&self) -> f64 {
        let (w, h) = self.unrotated_size();
        if self.rotation % 180 == 0 { w } else { h }
    }

    /// Displayed height in points.
    pub fn height(&self) -> f64 {
        let (w, h) = self.unrotated_size();
        if self.rotation % 180 == 0 { h } else { w }
    }

    /// `(0, 0, width, height)`.
    pub fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width(), self.height())
    }

    /// Matrix taking PDF user space to display coordinates: origin at the
    /// top-left of the visible area, y growing downward, rotation applied.
    pub fn display_ctm(&self) -> Ctm {
        let [x0, y0, x1, y1] = self.visible;
        match self.rotation {
            90 => Ctm::new(0.0, 1.0, 1.0, 0.0, -y0, -x0),
            180 => Ctm::new(-1.0, 0.0, 0.0, 1.0, x1, -y0),
            270 => Ctm::new(0.0, -1.0, -1.0, 0.0, y1, x1),
            _ => Ctm::new(1.0, 0.0, 0.0, -1.0, -x0, y1),
        }
    }
}

fn normalize(b: [f64; 4]) -> [f64; 4] {
    [b[0].min(b[2]), b[1].min(b[3]), b[0].max(b[2]), b[1].max(b[3])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regiontext_core::Point;

    const LETTER: [f64; 4] = [0.0, 0.0, 612.0, 792.0];

    fn approx_point(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn unrotated_letter_page() {
        let geo = PageGeometry::new(LETTER, None, 0);
        assert_eq!(geo.width(), 612.0);
        assert_eq!(geo.height(), 792.0);
        let m = geo.display_ctm();
        approx_point(m.transform_point(Point::new(0.0, 792.0)), 0.0, 0.0);
        approx_point(m.transform_point(Point::new(72.0, 720.0)), 72.0, 72.0);
    }

    #[test]
    fn crop_box_moves_origin() {
        let geo = PageGeometry::new(LETTER, Some([36.0, 36.0, 576.0, 756.0]), 0);
        assert_eq!(geo.width(), 540.0);
        assert_eq!(geo.height(), 720.0);
        approx_point(
            geo.display_ctm().transform_point(Point::new(36.0, 756.0)),
            0.0,
            0.0,
        );
    }

    #[test]
    fn crop_box_is_clipped_to_media_box() {
        let geo = PageGeometry::new(LETTER, Some([-10.0, -10.0, 700.0, 400.0]), 0);
        assert_eq!(geo.width(), 612.0);
        assert_eq!(geo.height(), 400.0);
    }

    #[test]
    fn disjoint_crop_box_is_ignored() {
        let geo = PageGeometry::new(LETTER, Some([1000.0, 1000.0, 1100.0, 1100.0]), 0);
        assert_eq!(geo.width(), 612.0);
    }

    #[test]
    fn inverted_box_is_normalized() {
        let geo = PageGeometry::new([612.0, 792.0, 0.0, 0.0], None, 0);
        assert_eq!(geo.width(), 612.0);
        assert_eq!(geo.height(), 792.0);
    }

    #[test]
    fn rotate_90_swaps_dimensions() {
        let geo = PageGeometry::new(LETTER, None, 90);
        assert_eq!(geo.width(), 792.0);
        assert_eq!(geo.height(), 612.0);
        let m = geo.display_ctm();
        // bottom-left corner of the unrotated page lands top-left
        approx_point(m.transform_point(Point::new(0.0, 0.0)), 0.0, 0.0);
        approx_point(m.transform_point(Point::new(612.0, 792.0)), 792.0, 612.0);
    }

    #[test]
    fn rotate_180() {
        let geo = PageGeometry::new(LETTER, None, 180);
        let m = geo.display_ctm();
        approx_point(m.transform_point(Point::new(612.0, 0.0)), 0.0, 0.0);
        approx_point(m.transform_point(Point::new(0.0, 792.0)), 612.0, 792.0);
    }

    #[test]
    fn rotate_270_and_negative_rotation() {
        let geo = PageGeometry::new(LETTER, None, -90);
        assert_eq!(geo.rotation(), 270);
        assert_eq!(geo.width(), 792.0);
        let m = geo.display_ctm();
        approx_point(m.transform_point(Point::new(612.0, 792.0)), 0.0, 0.0);
        approx_point(m.transform_point(Point::new(0.0, 0.0)), 792.0, 612.0);
    }

    #[test]
    fn odd_rotation_is_ignored() {
        let geo = PageGeometry::new(LETTER, None, 45);
        assert_eq!(geo.rotation(), 0);
    }
}
