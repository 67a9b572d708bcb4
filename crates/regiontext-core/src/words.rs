use crate::geometry::BBox;
use crate::text::{Char, is_cjk_text};

/// Options for grouping characters into words.
#[derive(Debug, Clone)]
pub struct WordOptions {
    /// Maximum horizontal gap between characters of the same word.
    pub x_tolerance: f64,
    /// Maximum vertical offset between characters of the same word.
    pub y_tolerance: f64,
    /// If true, include blank characters in words instead of splitting on them.
    pub keep_blank_chars: bool,
    /// If true, expand Latin ligatures (U+FB00 to U+FB06).
    pub expand_ligatures: bool,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            x_tolerance: 3.0,
            y_tolerance: 3.0,
            keep_blank_chars: false,
            expand_ligatures: true,
        }
    }
}

/// A word extracted from a PDF page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    pub text: String,
    /// Union of the constituent character boxes.
    pub bbox: BBox,
}

/// Groups characters into words by spatial proximity.
pub struct WordExtractor;

impl WordExtractor {
    /// Extract words from the given characters.
    ///
    /// Characters are sorted top-to-bottom then left-to-right. A new word
    /// starts when the horizontal gap exceeds `x_tolerance` (the previous
    /// glyph's width for CJK text), when the top edges differ by more than
    /// `y_tolerance`, or at a blank character.
    pub fn extract(chars: &[Char], options: &WordOptions) -> Vec<Word> {
        let mut sorted: Vec<&Char> = chars.iter().collect();
        sorted.sort_by(|a, b| {
            a.bbox
                .top
                .total_cmp(&b.bbox.top)
                .then(a.bbox.x0.total_cmp(&b.bbox.x0))
        });

        let mut words = Vec::new();
        let mut current: Vec<&Char> = Vec::new();

        for ch in sorted {
            if ch.is_blank() && !options.keep_blank_chars {
                if !current.is_empty() {
                    words.push(Self::make_word(&current, options.expand_ligatures));
                    current.clear();
                }
                continue;
            }

            if let Some(last) = current.last() {
                if Self::should_split(last, ch, options) {
                    words.push(Self::make_word(&current, options.expand_ligatures));
                    current.clear();
                }
            }
            current.push(ch);
        }

        if !current.is_empty() {
            words.push(Self::make_word(&current, options.expand_ligatures));
        }

        words
    }

    /// Gap between x-intervals (0 when overlapping) against the tolerance.
    fn should_split(last: &Char, current: &Char, options: &WordOptions) -> bool {
        let x_gap =
            (last.bbox.x0.max(current.bbox.x0) - last.bbox.x1.min(current.bbox.x1)).max(0.0);
        let y_diff = (current.bbox.top - last.bbox.top).abs();
        let x_tol = if is_cjk_text(&last.text) || is_cjk_text(&current.text) {
            last.bbox.width().max(options.x_tolerance)
        } else {
            options.x_tolerance
        };
        x_gap > x_tol || y_diff > options.y_tolerance
    }

    fn make_word(chars: &[&Char], expand_ligatures: bool) -> Word {
        let raw: String = chars.iter().map(|c| c.text.as_str()).collect();
        let text = if expand_ligatures {
            expand_ligatures_in_text(&raw)
        } else {
            raw
        };
        let mut bbox = chars[0].bbox;
        for c in &chars[1..] {
            bbox = bbox.union(&c.bbox);
        }
        Word { text, bbox }
    }
}

fn expand_ligatures_in_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FB00}' => result.push_str("ff"),
            '\u{FB01}' => result.push_str("fi"),
            '\u{FB02}' => result.push_str("fl"),
            '\u{FB03}' => result.push_str("ffi"),
            '\u{FB04}' => result.push_str("ffl"),
            '\u{FB05}' => result.push_str("\u{017F}t"),
            '\u{FB06}' => result.push_str("st"),
            _ => result.push(ch),
        }
    }
    result
}
