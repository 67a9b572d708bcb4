use crate::geometry::BBox;
use crate::text::Char;
use crate::words::{Word, WordExtractor, WordOptions};

/// A text line: a sequence of words on the same y-level.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Words in this line, sorted left-to-right.
    pub words: Vec<Word>,
    /// Bounding box of this line.
    pub bbox: BBox,
}

/// Options for plain text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Horizontal tolerance for grouping characters into words (in points).
    pub x_tolerance: f64,
    /// Vertical tolerance for grouping characters into words and words into
    /// lines (in points).
    pub y_tolerance: f64,
    /// If true, expand common Latin ligatures to their multi-character forms.
    pub expand_ligatures: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            x_tolerance: 3.0,
            y_tolerance: 3.0,
            expand_ligatures: true,
        }
    }
}

impl TextOptions {
    pub fn word_options(&self) -> WordOptions {
        WordOptions {
            x_tolerance: self.x_tolerance,
            y_tolerance: self.y_tolerance,
            expand_ligatures: self.expand_ligatures,
            ..WordOptions::default()
        }
    }
}

/// Cluster words into text lines based on y-proximity.
///
/// Words whose vertical midpoints are within `y_tolerance` of a line's
/// vertical midpoint join that line. Lines come back top-to-bottom with
/// their words left-to-right.
pub fn cluster_words_into_lines(words: &[Word], y_tolerance: f64) -> Vec<TextLine> {
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by(|a, b| {
        a.bbox
            .top
            .total_cmp(&b.bbox.top)
            .then(a.bbox.x0.total_cmp(&b.bbox.x0))
    });

    let mut lines: Vec<TextLine> = Vec::new();

    for word in sorted {
        let word_mid_y = (word.bbox.top + word.bbox.bottom) / 2.0;
        let existing = lines.iter_mut().find(|line| {
            let line_mid_y = (line.bbox.top + line.bbox.bottom) / 2.0;
            (word_mid_y - line_mid_y).abs() <= y_tolerance
        });
        match existing {
            Some(line) => {
                line.bbox = line.bbox.union(&word.bbox);
                line.words.push(word.clone());
            }
            None => lines.push(TextLine {
                words: vec![word.clone()],
                bbox: word.bbox,
            }),
        }
    }

    for line in &mut lines {
        line.words.sort_by(|a, b| a.bbox.x0.total_cmp(&b.bbox.x0));
    }
    lines.sort_by(|a, b| a.bbox.top.total_cmp(&b.bbox.top));

    lines
}

/// Join words into lines of space-separated text, one line per row.
pub fn words_to_text(words: &[Word], y_tolerance: f64) -> String {
    cluster_words_into_lines(words, y_tolerance)
        .iter()
        .map(|line| {
            line.words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain text for a set of characters: chars → words → lines.
pub fn chars_to_text(chars: &[Char], options: &TextOptions) -> String {
    let words = WordExtractor::extract(chars, &options.word_options());
    words_to_text(&words, options.y_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_word(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Word {
        Word {
            text: text.to_string(),
            bbox: BBox::new(x0, top, x1, bottom),
        }
    }

    fn make_char(text: &str, x0: f64, top: f64) -> Char {
        Char {
            text: text.to_string(),
            bbox: BBox::new(x0, top, x0 + 6.0, top + 12.0),
            fontname: "Helvetica".to_string(),
            size: 12.0,
            upright: true,
            char_code: 0,
        }
    }

    #[test]
    fn test_text_options_default() {
        let opts = TextOptions::default();
        assert_eq!(opts.x_tolerance, 3.0);
        assert_eq!(opts.y_tolerance, 3.0);
        assert!(opts.expand_ligatures);
    }

    #[test]
    fn test_cluster_empty_words() {
        assert!(cluster_words_into_lines(&[], 3.0).is_empty());
    }

    #[test]
    fn test_cluster_two_lines() {
        let words = vec![
            make_word("World", 60.0, 100.0, 100.0, 112.0),
            make_word("Second", 10.0, 120.0, 60.0, 132.0),
            make_word("Hello", 10.0, 101.0, 50.0, 113.0),
        ];
        let lines = cluster_words_into_lines(&words, 3.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words[0].text, "Hello");
        assert_eq!(lines[0].words[1].text, "World");
        assert_eq!(lines[0].bbox, BBox::new(10.0, 100.0, 100.0, 113.0));
        assert_eq!(lines[1].words[0].text, "Second");
    }

    #[test]
    fn test_words_to_text_joins_lines() {
        let words = vec![
            make_word("Hello", 10.0, 100.0, 50.0, 112.0),
            make_word("World", 60.0, 100.0, 100.0, 112.0),
            make_word("Bye", 10.0, 130.0, 40.0, 142.0),
        ];
        assert_eq!(words_to_text(&words, 3.0), "Hello World\nBye");
    }

    #[test]
    fn test_chars_to_text_end_to_end() {
        let chars = vec![
            make_char("H", 10.0, 100.0),
            make_char("i", 16.0, 100.0),
            make_char("y", 40.0, 100.0),
            make_char("o", 10.0, 130.0),
        ];
        assert_eq!(chars_to_text(&chars, &TextOptions::default()), "Hi y\no");
    }

    #[test]
    fn test_chars_to_text_empty() {
        assert_eq!(chars_to_text(&[], &TextOptions::default()), "");
    }
}
