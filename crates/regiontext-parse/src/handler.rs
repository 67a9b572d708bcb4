//! Callbacks from the content stream interpreter.

use regiontext_core::{Color, Ctm, PaintOp, PathSegment};

/// A glyph shown by `Tj`, `TJ`, `'` or `"`, with everything needed to place
/// its box on the page.
#[derive(Debug, Clone)]
pub struct CharEvent {
    pub char_code: u32,
    /// Text from ToUnicode or the font encoding.
    pub unicode: Option<String>,
    pub font_name: String,
    pub font_size: f64,
    /// Text matrix at the moment the glyph is shown.
    pub text_matrix: Ctm,
    /// CTM at the moment the glyph is shown.
    pub ctm: Ctm,
    /// Glyph width in glyph space (1/1000 em).
    pub width: f64,
    /// Horizontal scaling as a fraction.
    pub h_scaling: f64,
    pub rise: f64,
    /// Font descent in glyph space.
    pub descent: f64,
}

/// A painted path, with segments already in PDF page space.
#[derive(Debug, Clone)]
pub struct PathEvent {
    pub segments: Vec<PathSegment>,
    pub paint: PaintOp,
    pub even_odd: bool,
    /// Line width in page space.
    pub line_width: f64,
    pub stroking_color: Color,
    pub non_stroking_color: Color,
}

/// Receiver of interpreter output. Both methods default to no-ops.
pub trait ContentHandler {
    fn on_char(&mut self, _event: CharEvent) {}

    fn on_path_painted(&mut self, _event: PathEvent) {}
}

/// Handler that keeps every event, in order.
#[derive(Debug, Default)]
pub struct CollectingHandler {
    pub chars: Vec<CharEvent>,
    pub paths: Vec<PathEvent>,
}

impl ContentHandler for CollectingHandler {
    fn on_char(&mut self, event: CharEvent) {
        self.chars.push(event);
    }

    fn on_path_painted(&mut self, event: PathEvent) {
        self.paths.push(event);
    }
}
