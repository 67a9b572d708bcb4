//! regiontext-raster: a pure-Rust [`Rasterize`] implementation.
//!
//! Draws a white page, then every painted path in its colours, then each
//! glyph as a solid bar across the middle of its character box. The result
//! is a greeked preview: text blocks sit exactly where the text is, which is
//! all a user needs to place a selection rectangle.

use regiontext::{
    Char, Color, DEFAULT_MAX_NATIVE_PIXELS, Page, PaintOp, PaintedPath, PathSegment, Rasterize,
    RenderError, RgbaImage, native_size,
};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Fraction of the character box height where the glyph bar starts.
const BAR_TOP: f64 = 0.35;
/// Fraction of the character box height where the glyph bar ends.
const BAR_BOTTOM: f64 = 0.8;

/// tiny-skia page rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SkiaRasterizer {
    /// Draw glyph bars. Paths are always drawn.
    pub draw_glyphs: bool,
    /// RGB colour of glyph bars.
    pub glyph_rgb: [u8; 3],
    /// Largest bitmap (width × height) this rasterizer will allocate.
    pub max_pixels: u64,
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self {
            draw_glyphs: true,
            glyph_rgb: [64, 64, 64],
            max_pixels: DEFAULT_MAX_NATIVE_PIXELS,
        }
    }
}

impl SkiaRasterizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rasterize for SkiaRasterizer {
    fn rasterize(&self, page: &Page, resolution: f64) -> Result<RgbaImage, RenderError> {
        let (width, height) =
            native_size(page.width(), page.height(), resolution, self.max_pixels)?;
        let scale = resolution / 72.0;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale as f32, scale as f32);
        for path in page.paths() {
            draw_path(&mut pixmap, path, transform);
        }
        if self.draw_glyphs {
            let paint = solid_paint(self.glyph_rgb);
            for ch in page.chars().iter().filter(|c| !c.is_blank()) {
                if let Some(rect) = glyph_bar(ch) {
                    pixmap.fill_rect(rect, &paint, transform, None);
                }
            }
        }

        let data: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(width, height, data).ok_or(RenderError::Allocation { width, height })
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn solid_paint(rgb: [u8; 3]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 255);
    paint.anti_alias = true;
    paint
}

fn color_paint(color: &Color) -> Paint<'static> {
    let (r, g, b) = color.to_rgb();
    solid_paint([to_u8(r), to_u8(g), to_u8(b)])
}

/// Build a tiny-skia path from display space segments.
fn skia_path(segments: &[PathSegment]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for segment in segments {
        match segment {
            PathSegment::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathSegment::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathSegment::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathSegment::Close => pb.close(),
        }
    }
    pb.finish()
}

fn draw_path(pixmap: &mut Pixmap, path: &PaintedPath, transform: Transform) {
    let Some(skia) = skia_path(&path.segments) else {
        tracing::debug!("skipping empty path");
        return;
    };
    let fill_rule = if path.even_odd {
        FillRule::EvenOdd
    } else {
        FillRule::Winding
    };
    if matches!(path.paint, PaintOp::Fill | PaintOp::FillAndStroke) {
        let paint = color_paint(&path.non_stroking_color);
        pixmap.fill_path(&skia, &paint, fill_rule, transform, None);
    }
    if matches!(path.paint, PaintOp::Stroke | PaintOp::FillAndStroke) {
        let paint = color_paint(&path.stroking_color);
        let stroke = Stroke {
            // zero width is the thinnest line the device can draw
            width: path.line_width.max(0.0) as f32,
            ..Stroke::default()
        };
        pixmap.stroke_path(&skia, &paint, &stroke, transform, None);
    }
}

/// Middle band of a character box.
fn glyph_bar(ch: &Char) -> Option<Rect> {
    let b = &ch.bbox;
    let h = b.height();
    Rect::from_ltrb(
        b.x0 as f32,
        (b.top + h * BAR_TOP) as f32,
        b.x1 as f32,
        (b.top + h * BAR_BOTTOM) as f32,
    )
}
