//! Shared fixtures: PDFs built in memory with lopdf, and a rasterizer that
//! only counts its calls.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use lopdf::{Object, Stream, dictionary};
use regiontext::{
    DEFAULT_MAX_NATIVE_PIXELS, Page, Rasterize, RenderError, RgbaImage, native_size,
};

/// One page of a test document.
pub struct PageSpec {
    pub content: Vec<u8>,
    pub media_box: [f64; 4],
    pub rotate: i64,
}

impl PageSpec {
    /// US Letter page with the given content stream.
    pub fn letter(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            media_box: [0.0, 0.0, 612.0, 792.0],
            rotate: 0,
        }
    }

    pub fn rotated(mut self, rotate: i64) -> Self {
        self.rotate = rotate;
        self
    }
}

/// Content stream showing each `(x, y, text)` in 10pt Helvetica (`/F1`).
pub fn text_content(runs: &[(f64, f64, &str)]) -> Vec<u8> {
    let mut content = String::from("BT /F1 10 Tf\n");
    for (x, y, text) in runs {
        content.push_str(&format!("1 0 0 1 {x} {y} Tm ({text}) Tj\n"));
    }
    content.push_str("ET\n");
    content.into_bytes()
}

/// Build a PDF whose pages share a Helvetica `/F1`.
pub fn build_pdf(pages: &[PageSpec]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids = Vec::new();
    for spec in pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, spec.content.clone()));
        let media_box: Vec<Object> = spec
            .media_box
            .iter()
            .map(|v| Object::Real(*v as f32))
            .collect();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Rotate" => spec.rotate,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Rasterizer producing a blank bitmap of the page's native size, sized the
/// same way as the tiny-skia rasterizer.
#[derive(Clone, Default)]
pub struct BlankRasterizer {
    pub calls: Rc<Cell<usize>>,
}

impl Rasterize for BlankRasterizer {
    fn rasterize(&self, page: &Page, resolution: f64) -> Result<RgbaImage, RenderError> {
        self.calls.set(self.calls.get() + 1);
        let (width, height) = native_size(
            page.width(),
            page.height(),
            resolution,
            DEFAULT_MAX_NATIVE_PIXELS,
        )?;
        Ok(RgbaImage::new(width, height))
    }
}
