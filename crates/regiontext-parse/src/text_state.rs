//! Text object state: the text and line matrices plus the text parameters
//! that are part of the graphics state.

use regiontext_core::Ctm;

/// Text parameters saved and restored by `q`/`Q`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    /// `Tc`
    pub char_spacing: f64,
    /// `Tw`, applied to single-byte code 32 only.
    pub word_spacing: f64,
    /// `Tz` as a percentage (100 = normal).
    pub h_scaling: f64,
    /// `TL`
    pub leading: f64,
    /// Resource name of the font set by `Tf` (e.g. `F1`).
    pub font_resource: String,
    pub font_size: f64,
    /// `Ts`
    pub rise: f64,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            char_spacing: 0.0,
            word_spacing: 0.0,
            h_scaling: 100.0,
            leading: 0.0,
            font_resource: String::new(),
            font_size: 0.0,
            rise: 0.0,
        }
    }
}

/// Text state inside and between `BT`/`ET`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextState {
    pub params: TextParams,
    text_matrix: Ctm,
    line_matrix: Ctm,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_matrix(&self) -> &Ctm {
        &self.text_matrix
    }

    /// Horizontal scaling as a fraction (1.0 = 100%).
    pub fn h_scale(&self) -> f64 {
        self.params.h_scaling / 100.0
    }

    /// `BT`
    pub fn begin_text(&mut self) {
        self.text_matrix = Ctm::identity();
        self.line_matrix = Ctm::identity();
    }

    /// `Tm`: replaces both matrices.
    pub fn set_text_matrix(&mut self, m: Ctm) {
        self.text_matrix = m;
        self.line_matrix = m;
    }

    /// `Td`
    pub fn move_text_position(&mut self, tx: f64, ty: f64) {
        self.line_matrix = Ctm::translation(tx, ty).concat(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// `TD`: sets the leading to `-ty`, then `Td`.
    pub fn move_text_position_and_set_leading(&mut self, tx: f64, ty: f64) {
        self.params.leading = -ty;
        self.move_text_position(tx, ty);
    }

    /// `T*`
    pub fn move_to_next_line(&mut self) {
        let leading = self.params.leading;
        self.move_text_position(0.0, -leading);
    }

    /// Shift the text matrix by `tx` text space units along the baseline.
    pub fn advance(&mut self, tx: f64) {
        self.text_matrix = Ctm::translation(tx, 0.0).concat(&self.text_matrix);
    }

    /// Horizontal displacement for one glyph, in text space.
    ///
    /// `w0` is the glyph width in glyph space (1/1000 em).
    pub fn glyph_advance(&self, w0: f64, is_space: bool) -> f64 {
        let word_spacing = if is_space {
            self.params.word_spacing
        } else {
            0.0
        };
        ((w0 / 1000.0) * self.params.font_size + self.params.char_spacing + word_spacing)
            * self.h_scale()
    }

    /// Displacement for a number inside a `TJ` array.
    pub fn tj_adjustment(&self, adjustment: f64) -> f64 {
        -(adjustment / 1000.0) * self.params.font_size * self.h_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn begin_text_resets_matrices() {
        let mut ts = TextState::new();
        ts.move_text_position(10.0, 20.0);
        ts.begin_text();
        assert_eq!(*ts.text_matrix(), Ctm::identity());
    }

    #[test]
    fn td_is_relative_to_line_start() {
        let mut ts = TextState::new();
        ts.begin_text();
        ts.move_text_position(72.0, 720.0);
        ts.advance(50.0);
        ts.move_text_position(0.0, -14.0);
        approx(ts.text_matrix().e, 72.0);
        approx(ts.text_matrix().f, 706.0);
    }

    #[test]
    fn td_respects_scaled_line_matrix() {
        let mut ts = TextState::new();
        ts.set_text_matrix(Ctm::new(2.0, 0.0, 0.0, 2.0, 100.0, 100.0));
        ts.move_text_position(10.0, 5.0);
        approx(ts.text_matrix().e, 120.0);
        approx(ts.text_matrix().f, 110.0);
    }

    #[test]
    fn capital_td_sets_leading_and_t_star_uses_it() {
        let mut ts = TextState::new();
        ts.begin_text();
        ts.move_text_position_and_set_leading(0.0, -12.0);
        approx(ts.params.leading, 12.0);
        ts.move_to_next_line();
        approx(ts.text_matrix().f, -24.0);
    }

    #[test]
    fn glyph_advance_includes_spacing_and_scaling() {
        let mut ts = TextState::new();
        ts.params.font_size = 10.0;
        ts.params.char_spacing = 1.0;
        ts.params.word_spacing = 2.0;
        ts.params.h_scaling = 50.0;
        approx(ts.glyph_advance(500.0, false), (5.0 + 1.0) * 0.5);
        approx(ts.glyph_advance(500.0, true), (5.0 + 1.0 + 2.0) * 0.5);
    }

    #[test]
    fn tj_adjustment_moves_left_for_positive_numbers() {
        let mut ts = TextState::new();
        ts.params.font_size = 12.0;
        approx(ts.tj_adjustment(250.0), -3.0);
        approx(ts.tj_adjustment(-1000.0), 12.0);
    }
}
