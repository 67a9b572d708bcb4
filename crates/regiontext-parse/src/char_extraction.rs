//! Character bounding box calculation from content stream events.
//!
//! Combines glyph metrics, text state and CTM into the final box of each
//! character in top-left display coordinates.

use regiontext_core::{Char, Ctm};

use crate::fonts::strip_subset_prefix;
use crate::handler::CharEvent;

/// Convert a [`CharEvent`] into a [`Char`] positioned on the displayed page.
///
/// `display` maps PDF user space to display coordinates (see
/// [`PageGeometry::display_ctm`](crate::PageGeometry::display_ctm)).
///
/// The box spans the glyph width horizontally and one em vertically,
/// starting at the font descent.
pub fn char_from_event(event: &CharEvent, display: &Ctm) -> Char {
    // Trm = [Tfs*Th, 0, 0, Tfs, 0, Trise] x Tm x CTM
    let font_matrix = Ctm::new(
        event.font_size * event.h_scaling,
        0.0,
        0.0,
        event.font_size,
        0.0,
        event.rise,
    );
    let trm = font_matrix.concat(&event.text_matrix).concat(&event.ctm);

    let width = event.width / 1000.0;
    let descent = event.descent / 1000.0;
    let bbox = trm
        .concat(display)
        .transform_rect(0.0, descent, width, descent + 1.0);

    let upright = trm.b.abs() < 1e-6 && trm.c.abs() < 1e-6;

    let text = event.unicode.clone().unwrap_or_else(|| {
        char::from_u32(event.char_code)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string()
    });

    Char {
        text,
        bbox,
        fontname: strip_subset_prefix(&event.font_name).to_string(),
        size: event.font_size,
        upright,
        char_code: event.char_code,
    }
}
