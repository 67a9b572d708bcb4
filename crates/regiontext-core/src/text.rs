use crate::geometry::BBox;

/// A single character extracted from a PDF page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Char {
    /// The text content of this character (may be several code points for
    /// ligatures mapped through ToUnicode).
    pub text: String,
    /// Bounding box in top-left origin page coordinates.
    pub bbox: BBox,
    /// Font name with any subset prefix removed.
    pub fontname: String,
    /// Font size in points.
    pub size: f64,
    /// Whether the glyph is upright (no rotation or shear).
    pub upright: bool,
    /// Raw character code from the content stream.
    pub char_code: u32,
}

impl Char {
    /// True if the character is whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Returns `true` if the character is a CJK ideograph, syllable, or kana.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{AC00}'..='\u{D7AF}'
        | '\u{1100}'..='\u{11FF}'
        | '\u{20000}'..='\u{2A6DF}'
    )
}

/// Returns `true` if the first character of the text is CJK.
pub fn is_cjk_text(text: &str) -> bool {
    text.chars().next().is_some_and(is_cjk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(text: &str) -> Char {
        Char {
            text: text.to_string(),
            bbox: BBox::new(0.0, 0.0, 5.0, 10.0),
            fontname: "Helvetica".to_string(),
            size: 10.0,
            upright: true,
            char_code: 0,
        }
    }

    #[test]
    fn blank_detection() {
        assert!(ch(" ").is_blank());
        assert!(ch("\u{a0}").is_blank());
        assert!(!ch("a").is_blank());
    }

    #[test]
    fn cjk_detection() {
        assert!(is_cjk('中'));
        assert!(is_cjk('カ'));
        assert!(!is_cjk('A'));
        assert!(is_cjk_text("한국"));
        assert!(!is_cjk_text(""));
    }
}
