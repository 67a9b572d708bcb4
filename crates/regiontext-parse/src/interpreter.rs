//! Content stream interpreter.
//!
//! Walks the operators of a page (and of the Form XObjects it draws),
//! tracking the graphics and text state, and reports every shown glyph and
//! painted path to a [`ContentHandler`].

use std::collections::HashMap;
use std::rc::Rc;

use lopdf::{Dictionary, Document, Object, ObjectId};
use regiontext_core::{Color, Ctm, PaintOp, PathSegment, Point};

use crate::error::BackendError;
use crate::fonts::Font;
use crate::handler::{CharEvent, ContentHandler, PathEvent};
use crate::lopdf_backend::{object_to_f64, resolve, stream_bytes};
use crate::text_state::{TextParams, TextState};
use crate::tokenizer::{Operand, Operator, tokenize};

/// Limits applied while interpreting a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Deepest allowed nesting of Form XObjects. Deeper forms are skipped.
    pub max_xobject_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_xobject_depth: 8,
        }
    }
}

/// Graphics state saved by `q` and restored by `Q`.
#[derive(Debug, Clone)]
struct GraphicsState {
    ctm: Ctm,
    line_width: f64,
    stroking: Color,
    non_stroking: Color,
    font: Option<Rc<Font>>,
    text: TextParams,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            ctm: Ctm::identity(),
            line_width: 1.0,
            stroking: Color::default(),
            non_stroking: Color::default(),
            font: None,
            text: TextParams::default(),
        }
    }
}

/// Path under construction, in page space.
#[derive(Debug, Default)]
struct PathBuilder {
    segments: Vec<PathSegment>,
    current: Option<Point>,
    start: Option<Point>,
}

impl PathBuilder {
    fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(p));
        self.current = Some(p);
        self.start = Some(p);
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.segments.push(PathSegment::LineTo(p));
        self.current = Some(p);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        if self.current.is_none() {
            self.move_to(c1);
        }
        self.segments.push(PathSegment::CurveTo(c1, c2, p));
        self.current = Some(p);
    }

    fn close(&mut self) {
        if self.current.is_some() {
            self.segments.push(PathSegment::Close);
            self.current = self.start;
        }
    }

    fn take(&mut self) -> Vec<PathSegment> {
        self.current = None;
        self.start = None;
        std::mem::take(&mut self.segments)
    }
}

/// Interpreter for one page.
pub(crate) struct Interpreter<'a> {
    doc: &'a Document,
    handler: &'a mut dyn ContentHandler,
    options: &'a ExtractOptions,
    gstate: GraphicsState,
    stack: Vec<GraphicsState>,
    text: TextState,
    path: PathBuilder,
    /// Fonts loaded so far, by font dictionary object id.
    fonts: HashMap<ObjectId, Rc<Font>>,
}

fn number(operands: &[Operand], index: usize) -> Option<f64> {
    operands.get(index).and_then(Operand::as_f64)
}

fn numbers<const N: usize>(operands: &[Operand]) -> Option<[f64; N]> {
    if operands.len() < N {
        return None;
    }
    let tail = &operands[operands.len() - N..];
    let mut out = [0.0; N];
    for (slot, operand) in out.iter_mut().zip(tail) {
        *slot = operand.as_f64()?;
    }
    Some(out)
}

fn color_from(components: &[f64]) -> Option<Color> {
    let c: Vec<f32> = components.iter().map(|v| *v as f32).collect();
    match c.as_slice() {
        [g] => Some(Color::Gray(*g)),
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        [c, m, y, k] => Some(Color::Cmyk(*c, *m, *y, *k)),
        _ => None,
    }
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(
        doc: &'a Document,
        handler: &'a mut dyn ContentHandler,
        options: &'a ExtractOptions,
    ) -> Self {
        Self {
            doc,
            handler,
            options,
            gstate: GraphicsState::default(),
            stack: Vec::new(),
            text: TextState::new(),
            path: PathBuilder::default(),
            fonts: HashMap::new(),
        }
    }

    /// Interpret one content stream with its resources.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Interpreter`] if the stream cannot be
    /// tokenized. Bad operands and unknown resources are skipped with a
    /// warning.
    pub(crate) fn run(
        &mut self,
        content: &[u8],
        resources: &'a Dictionary,
        depth: usize,
    ) -> Result<(), BackendError> {
        let ops = tokenize(content)?;
        let base_depth = self.stack.len();
        for op in &ops {
            self.apply(op, resources, depth)?;
        }
        if self.stack.len() > base_depth {
            tracing::debug!(
                unclosed = self.stack.len() - base_depth,
                "content stream ended inside q"
            );
            self.stack.truncate(base_depth + 1);
            if let Some(saved) = self.stack.pop() {
                self.restore(saved);
            }
        }
        Ok(())
    }

    fn restore(&mut self, saved: GraphicsState) {
        self.text.params = saved.text.clone();
        self.gstate = saved;
    }

    fn apply(
        &mut self,
        op: &Operator,
        resources: &'a Dictionary,
        depth: usize,
    ) -> Result<(), BackendError> {
        let args = op.operands.as_slice();
        match op.name.as_str() {
            // graphics state
            "q" => {
                let mut saved = self.gstate.clone();
                saved.text = self.text.params.clone();
                self.stack.push(saved);
            }
            "Q" => match self.stack.pop() {
                Some(saved) => self.restore(saved),
                None => tracing::warn!("unbalanced Q operator ignored"),
            },
            "cm" => {
                if let Some([a, b, c, d, e, f]) = numbers::<6>(args) {
                    self.gstate.ctm = Ctm::new(a, b, c, d, e, f).concat(&self.gstate.ctm);
                }
            }
            "w" => {
                if let Some(w) = number(args, 0) {
                    self.gstate.line_width = w;
                }
            }
            "gs" => self.apply_ext_gstate(resources, args),

            // color
            "g" | "rg" | "k" | "sc" | "scn" => {
                let values: Vec<f64> = args.iter().filter_map(Operand::as_f64).collect();
                if let Some(color) = color_from(&values) {
                    self.gstate.non_stroking = color;
                }
            }
            "G" | "RG" | "K" | "SC" | "SCN" => {
                let values: Vec<f64> = args.iter().filter_map(Operand::as_f64).collect();
                if let Some(color) = color_from(&values) {
                    self.gstate.stroking = color;
                }
            }
            "cs" => self.gstate.non_stroking = Color::default(),
            "CS" => self.gstate.stroking = Color::default(),

            // path construction
            "m" => {
                if let Some([x, y]) = numbers::<2>(args) {
                    let p = self.to_page(x, y);
                    self.path.move_to(p);
                }
            }
            "l" => {
                if let Some([x, y]) = numbers::<2>(args) {
                    let p = self.to_page(x, y);
                    self.path.line_to(p);
                }
            }
            "c" => {
                if let Some([x1, y1, x2, y2, x3, y3]) = numbers::<6>(args) {
                    let (c1, c2, p) = (
                        self.to_page(x1, y1),
                        self.to_page(x2, y2),
                        self.to_page(x3, y3),
                    );
                    self.path.curve_to(c1, c2, p);
                }
            }
            "v" => {
                if let (Some([x2, y2, x3, y3]), Some(current)) =
                    (numbers::<4>(args), self.path.current)
                {
                    let (c2, p) = (self.to_page(x2, y2), self.to_page(x3, y3));
                    self.path.curve_to(current, c2, p);
                }
            }
            "y" => {
                if let Some([x1, y1, x3, y3]) = numbers::<4>(args) {
                    let (c1, p) = (self.to_page(x1, y1), self.to_page(x3, y3));
                    self.path.curve_to(c1, p, p);
                }
            }
            "h" => self.path.close(),
            "re" => {
                if let Some([x, y, w, h]) = numbers::<4>(args) {
                    let corners = [
                        self.to_page(x, y),
                        self.to_page(x + w, y),
                        self.to_page(x + w, y + h),
                        self.to_page(x, y + h),
                    ];
                    self.path.move_to(corners[0]);
                    for corner in &corners[1..] {
                        self.path.line_to(*corner);
                    }
                    self.path.close();
                }
            }

            // path painting
            "S" => self.paint(PaintOp::Stroke, false, false),
            "s" => self.paint(PaintOp::Stroke, false, true),
            "f" | "F" => self.paint(PaintOp::Fill, false, false),
            "f*" => self.paint(PaintOp::Fill, true, false),
            "B" => self.paint(PaintOp::FillAndStroke, false, false),
            "B*" => self.paint(PaintOp::FillAndStroke, true, false),
            "b" => self.paint(PaintOp::FillAndStroke, false, true),
            "b*" => self.paint(PaintOp::FillAndStroke, true, true),
            "n" => {
                self.path.take();
            }

            // text state
            "BT" => self.text.begin_text(),
            "ET" => {}
            "Tf" => {
                if let (Some(name), Some(size)) =
                    (args.first().and_then(Operand::as_name), number(args, 1))
                {
                    let font = self.load_font(resources, name);
                    self.gstate.font = Some(font);
                    self.text.params.font_resource = name.to_string();
                    self.text.params.font_size = size;
                }
            }
            "Tc" => {
                if let Some(v) = number(args, 0) {
                    self.text.params.char_spacing = v;
                }
            }
            "Tw" => {
                if let Some(v) = number(args, 0) {
                    self.text.params.word_spacing = v;
                }
            }
            "Tz" => {
                if let Some(v) = number(args, 0) {
                    self.text.params.h_scaling = v;
                }
            }
            "TL" => {
                if let Some(v) = number(args, 0) {
                    self.text.params.leading = v;
                }
            }
            "Ts" => {
                if let Some(v) = number(args, 0) {
                    self.text.params.rise = v;
                }
            }
            "Td" => {
                if let Some([tx, ty]) = numbers::<2>(args) {
                    self.text.move_text_position(tx, ty);
                }
            }
            "TD" => {
                if let Some([tx, ty]) = numbers::<2>(args) {
                    self.text.move_text_position_and_set_leading(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = numbers::<6>(args) {
                    self.text.set_text_matrix(Ctm::from_array(m));
                }
            }
            "T*" => self.text.move_to_next_line(),

            // text showing
            "Tj" => {
                if let Some(bytes) = args.last().and_then(Operand::as_bytes) {
                    self.show(bytes);
                }
            }
            "'" => {
                self.text.move_to_next_line();
                if let Some(bytes) = args.last().and_then(Operand::as_bytes) {
                    self.show(bytes);
                }
            }
            "\"" => {
                if let (Some(aw), Some(ac)) = (number(args, 0), number(args, 1)) {
                    self.text.params.word_spacing = aw;
                    self.text.params.char_spacing = ac;
                }
                self.text.move_to_next_line();
                if let Some(bytes) = args.last().and_then(Operand::as_bytes) {
                    self.show(bytes);
                }
            }
            "TJ" => {
                if let Some(Operand::Array(items)) = args.last() {
                    for item in items {
                        match item {
                            Operand::String(bytes) => self.show(bytes),
                            other => {
                                if let Some(adjustment) = other.as_f64() {
                                    let tx = self.text.tj_adjustment(adjustment);
                                    self.text.advance(tx);
                                }
                            }
                        }
                    }
                }
            }

            // external objects
            "Do" => {
                if let Some(name) = args.first().and_then(Operand::as_name) {
                    self.draw_xobject(resources, name, depth)?;
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn to_page(&self, x: f64, y: f64) -> Point {
        self.gstate.ctm.transform_point(Point::new(x, y))
    }

    fn paint(&mut self, paint: PaintOp, even_odd: bool, close: bool) {
        if close {
            self.path.close();
        }
        let segments = self.path.take();
        if segments.is_empty() {
            return;
        }
        let ctm = &self.gstate.ctm;
        // geometric mean of the axis scales
        let scale = (ctm.a * ctm.d - ctm.b * ctm.c).abs().sqrt();
        self.handler.on_path_painted(PathEvent {
            segments,
            paint,
            even_odd,
            line_width: self.gstate.line_width * scale,
            stroking_color: self.gstate.stroking,
            non_stroking_color: self.gstate.non_stroking,
        });
    }

    fn show(&mut self, bytes: &[u8]) {
        let font = match &self.gstate.font {
            Some(font) => Rc::clone(font),
            None => {
                tracing::warn!("text shown before any Tf; using a default font");
                let font = Rc::new(Font::fallback("Helvetica"));
                self.gstate.font = Some(Rc::clone(&font));
                font
            }
        };
        for glyph in font.glyphs(bytes) {
            self.handler.on_char(CharEvent {
                char_code: glyph.code,
                unicode: glyph.text,
                font_name: font.name.clone(),
                font_size: self.text.params.font_size,
                text_matrix: *self.text.text_matrix(),
                ctm: self.gstate.ctm,
                width: glyph.width,
                h_scaling: self.text.h_scale(),
                rise: self.text.params.rise,
                descent: font.descent,
            });
            let tx = self.text.glyph_advance(glyph.width, glyph.is_space);
            self.text.advance(tx);
        }
    }

    /// Named entry of a resource category (`Font`, `XObject`, `ExtGState`).
    fn resource(&self, resources: &'a Dictionary, category: &[u8], name: &str) -> Option<&'a Object> {
        resources
            .get(category)
            .ok()
            .and_then(|obj| resolve(self.doc, obj).as_dict().ok())
            .and_then(|dict| dict.get(name.as_bytes()).ok())
    }

    fn load_font(&mut self, resources: &'a Dictionary, name: &str) -> Rc<Font> {
        let Some(entry) = self.resource(resources, b"Font", name) else {
            tracing::warn!(font = name, "font resource not found; using default metrics");
            return Rc::new(Font::fallback(name));
        };
        let id = entry.as_reference().ok();
        if let Some(font) = id.and_then(|id| self.fonts.get(&id)) {
            return Rc::clone(font);
        }
        let font = match resolve(self.doc, entry).as_dict() {
            Ok(dict) => Rc::new(Font::load(self.doc, dict)),
            Err(_) => {
                tracing::warn!(font = name, "font resource is not a dictionary");
                Rc::new(Font::fallback(name))
            }
        };
        if let Some(id) = id {
            self.fonts.insert(id, Rc::clone(&font));
        }
        font
    }

    fn apply_ext_gstate(&mut self, resources: &'a Dictionary, args: &[Operand]) {
        let Some(name) = args.first().and_then(Operand::as_name) else {
            return;
        };
        let Some(dict) = self
            .resource(resources, b"ExtGState", name)
            .and_then(|obj| resolve(self.doc, obj).as_dict().ok())
        else {
            return;
        };
        if let Some(width) = dict
            .get(b"LW")
            .ok()
            .and_then(|obj| object_to_f64(obj).ok())
        {
            self.gstate.line_width = width;
        }
        if let Ok(Object::Array(font)) = dict.get(b"Font") {
            if let (Some(font_ref), Some(size)) = (
                font.first(),
                font.get(1).and_then(|s| object_to_f64(s).ok()),
            ) {
                if let Ok(font_dict) = resolve(self.doc, font_ref).as_dict() {
                    self.gstate.font = Some(Rc::new(Font::load(self.doc, font_dict)));
                    self.text.params.font_size = size;
                }
            }
        }
    }

    fn draw_xobject(
        &mut self,
        resources: &'a Dictionary,
        name: &str,
        depth: usize,
    ) -> Result<(), BackendError> {
        let Some(entry) = self.resource(resources, b"XObject", name) else {
            tracing::warn!(xobject = name, "XObject resource not found");
            return Ok(());
        };
        let Ok(stream) = resolve(self.doc, entry).as_stream() else {
            return Ok(());
        };
        let is_form = stream
            .dict
            .get(b"Subtype")
            .and_then(Object::as_name)
            .is_ok_and(|subtype| subtype == b"Form");
        if !is_form {
            return Ok(());
        }
        if depth + 1 > self.options.max_xobject_depth {
            tracing::warn!(
                xobject = name,
                limit = self.options.max_xobject_depth,
                "Form XObject nesting too deep; skipped"
            );
            return Ok(());
        }

        let content = stream_bytes(stream)?;
        let form_resources = stream
            .dict
            .get(b"Resources")
            .ok()
            .and_then(|obj| resolve(self.doc, obj).as_dict().ok())
            .unwrap_or(resources);
        let matrix = stream
            .dict
            .get(b"Matrix")
            .ok()
            .and_then(|obj| resolve(self.doc, obj).as_array().ok())
            .and_then(|arr| {
                let values: Vec<f64> = arr
                    .iter()
                    .filter_map(|v| object_to_f64(resolve(self.doc, v)).ok())
                    .collect();
                <[f64; 6]>::try_from(values.as_slice()).ok()
            })
            .map_or_else(Ctm::identity, Ctm::from_array);

        let mut saved = self.gstate.clone();
        saved.text = self.text.params.clone();
        let saved_text = self.text.clone();
        self.stack.push(saved);
        self.gstate.ctm = matrix.concat(&self.gstate.ctm);

        let result = self.run(&content, form_resources, depth + 1);

        if let Some(saved) = self.stack.pop() {
            self.restore(saved);
        }
        self.text = saved_text;
        result
    }
}
