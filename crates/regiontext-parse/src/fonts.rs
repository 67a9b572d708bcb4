//! Font loading: glyph widths, descent and code-to-text decoding.
//!
//! Simple fonts (Type1, TrueType, Type3) use one byte per code and a base
//! encoding plus `/Differences`; composite (Type0) fonts are read as two-byte
//! codes with widths from the descendant's `/W` array. A `/ToUnicode` CMap
//! always takes precedence when decoding text.

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object};

use crate::cmap::ToUnicodeCMap;
use crate::lopdf_backend::{object_to_f64, resolve, stream_bytes};

/// Width used when a font carries no width information at all.
pub const DEFAULT_WIDTH: f64 = 600.0;

/// Descent used when a font has no descriptor and is not a standard font.
pub const DEFAULT_DESCENT: f64 = -250.0;

/// Default `/DW` for composite fonts.
const DEFAULT_CID_WIDTH: f64 = 1000.0;

/// One decoded glyph from a shown string.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub code: u32,
    /// Text for the glyph, if the font tells us.
    pub text: Option<String>,
    /// Advance width in glyph space (1/1000 em).
    pub width: f64,
    /// Single-byte code 32, which receives word spacing.
    pub is_space: bool,
}

#[derive(Debug, Clone)]
enum Widths {
    Simple {
        first_char: u32,
        widths: Vec<f64>,
        missing: f64,
        standard: Option<&'static StandardFont>,
    },
    Composite {
        default: f64,
        map: HashMap<u32, f64>,
    },
}

/// A font resolved from a page's resources.
#[derive(Debug, Clone)]
pub struct Font {
    /// Base font name with any subset prefix (`ABCDEF+`) removed.
    pub name: String,
    /// Glyph space descent (negative, below the baseline).
    pub descent: f64,
    widths: Widths,
    /// Code to character for simple fonts.
    encoding: Option<Vec<Option<char>>>,
    to_unicode: Option<ToUnicodeCMap>,
}

impl Font {
    /// A font with default metrics, used when a `Tf` names a font that the
    /// resources do not define.
    pub fn fallback(name: &str) -> Self {
        let standard = standard_font(name);
        Self {
            name: name.to_string(),
            descent: standard.map_or(DEFAULT_DESCENT, |s| s.descent),
            widths: Widths::Simple {
                first_char: 0,
                widths: Vec::new(),
                missing: DEFAULT_WIDTH,
                standard,
            },
            encoding: Some(build_encoding(BaseEncoding::WinAnsi, &[])),
            to_unicode: None,
        }
    }

    /// Load a font from its dictionary.
    pub fn load(doc: &Document, dict: &Dictionary) -> Self {
        let base_font = name_entry(doc, dict, b"BaseFont").unwrap_or_default();
        let name = strip_subset_prefix(&base_font).to_string();
        let to_unicode = dict
            .get(b"ToUnicode")
            .ok()
            .and_then(|obj| resolve(doc, obj).as_stream().ok())
            .and_then(|stream| stream_bytes(stream).ok())
            .map(|bytes| ToUnicodeCMap::parse(&bytes))
            .filter(|cmap| !cmap.is_empty());

        let subtype = name_entry(doc, dict, b"Subtype").unwrap_or_default();
        if subtype == "Type0" {
            return Self::load_composite(doc, dict, name, to_unicode);
        }

        let standard = standard_font(&name);
        let descriptor = descriptor(doc, dict);
        let descent = descriptor
            .and_then(|d| number_entry(doc, d, b"Descent"))
            .filter(|d| *d < 0.0)
            .or(standard.map(|s| s.descent))
            .unwrap_or(DEFAULT_DESCENT);

        let first_char = number_entry(doc, dict, b"FirstChar").unwrap_or(0.0) as u32;
        let widths: Vec<f64> = dict
            .get(b"Widths")
            .ok()
            .and_then(|obj| resolve(doc, obj).as_array().ok())
            .map(|arr| {
                arr.iter()
                    .map(|w| object_to_f64(resolve(doc, w)).unwrap_or(0.0))
                    .collect()
            })
            .unwrap_or_default();
        let missing = descriptor
            .and_then(|d| number_entry(doc, d, b"MissingWidth"))
            .unwrap_or(if widths.is_empty() && standard.is_none() {
                DEFAULT_WIDTH
            } else {
                0.0
            });

        let (base, differences) = encoding_entry(doc, dict);
        Self {
            name,
            descent,
            widths: Widths::Simple {
                first_char,
                widths,
                missing,
                standard,
            },
            encoding: Some(build_encoding(base, &differences)),
            to_unicode,
        }
    }

    fn load_composite(
        doc: &Document,
        dict: &Dictionary,
        name: String,
        to_unicode: Option<ToUnicodeCMap>,
    ) -> Self {
        let encoding = name_entry(doc, dict, b"Encoding").unwrap_or_default();
        if !encoding.starts_with("Identity") {
            tracing::warn!(font = %name, %encoding, "unsupported CMap, reading two-byte codes");
        }
        let descendant = dict
            .get(b"DescendantFonts")
            .ok()
            .and_then(|obj| resolve(doc, obj).as_array().ok())
            .and_then(|arr| arr.first())
            .and_then(|obj| resolve(doc, obj).as_dict().ok());

        let default = descendant
            .and_then(|d| number_entry(doc, d, b"DW"))
            .unwrap_or(DEFAULT_CID_WIDTH);
        let map = descendant
            .and_then(|d| d.get(b"W").ok())
            .and_then(|obj| resolve(doc, obj).as_array().ok())
            .map(|arr| parse_cid_widths(doc, arr))
            .unwrap_or_default();
        let descent = descendant
            .and_then(|d| descriptor(doc, d))
            .and_then(|d| number_entry(doc, d, b"Descent"))
            .filter(|d| *d < 0.0)
            .unwrap_or(DEFAULT_DESCENT);

        Self {
            name,
            descent,
            widths: Widths::Composite { default, map },
            encoding: None,
            to_unicode,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.widths, Widths::Composite { .. })
    }

    /// Glyph width for a code, in glyph space.
    pub fn width(&self, code: u32) -> f64 {
        match &self.widths {
            Widths::Simple {
                first_char,
                widths,
                missing,
                standard,
            } => code
                .checked_sub(*first_char)
                .and_then(|i| widths.get(i as usize).copied())
                .or_else(|| standard.and_then(|s| s.width(code)))
                .unwrap_or(*missing),
            Widths::Composite { default, map } => map.get(&code).copied().unwrap_or(*default),
        }
    }

    /// Text for a code: ToUnicode first, then the simple-font encoding.
    pub fn text(&self, code: u32) -> Option<String> {
        if let Some(text) = self.to_unicode.as_ref().and_then(|m| m.lookup(code)) {
            return Some(text.to_string());
        }
        match &self.encoding {
            Some(table) => table
                .get(code as usize)
                .copied()
                .flatten()
                .map(String::from),
            None => Some(format!("(cid:{code})")),
        }
    }

    /// Split a shown string into glyphs.
    pub fn glyphs(&self, bytes: &[u8]) -> Vec<Glyph> {
        if self.is_composite() {
            bytes
                .chunks(2)
                .map(|pair| {
                    let code = pair.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
                    Glyph {
                        code,
                        text: self.text(code),
                        width: self.width(code),
                        is_space: false,
                    }
                })
                .collect()
        } else {
            bytes
                .iter()
                .map(|&b| {
                    let code = u32::from(b);
                    Glyph {
                        code,
                        text: self.text(code),
                        width: self.width(code),
                        is_space: b == b' ',
                    }
                })
                .collect()
        }
    }
}

/// Remove a six-letter subset tag such as `BCDFEE+`.
pub fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((tag, rest)) if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) => {
            rest
        }
        _ => name,
    }
}

fn name_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|obj| resolve(doc, obj).as_name().ok())
        .map(|n| String::from_utf8_lossy(n).into_owned())
}

fn number_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<f64> {
    dict.get(key)
        .ok()
        .and_then(|obj| object_to_f64(resolve(doc, obj)).ok())
}

fn descriptor<'a>(doc: &'a Document, dict: &'a Dictionary) -> Option<&'a Dictionary> {
    dict.get(b"FontDescriptor")
        .ok()
        .and_then(|obj| resolve(doc, obj).as_dict().ok())
}

/// `/W` array: `c [w1 w2 ...]` or `c_first c_last w`.
fn parse_cid_widths(doc: &Document, arr: &[Object]) -> HashMap<u32, f64> {
    let mut map = HashMap::new();
    let mut i = 0;
    while i < arr.len() {
        let Ok(first) = object_to_f64(resolve(doc, &arr[i])) else {
            break;
        };
        let first = first as u32;
        match arr.get(i + 1).map(|o| resolve(doc, o)) {
            Some(Object::Array(ws)) => {
                for (offset, w) in ws.iter().enumerate() {
                    if let Ok(w) = object_to_f64(resolve(doc, w)) {
                        let Some(code) = u32::try_from(offset)
                            .ok()
                            .and_then(|offset| first.checked_add(offset))
                        else {
                            break;
                        };
                        map.insert(code, w);
                    }
                }
                i += 2;
            }
            Some(last) => {
                let last = object_to_f64(last).map(|v| v as u32);
                let width = arr.get(i + 2).map(|w| object_to_f64(resolve(doc, w)));
                if let (Ok(last), Some(Ok(width))) = (last, width) {
                    if last >= first && last - first <= 0xFFFF {
                        for code in first..=last {
                            map.insert(code, width);
                        }
                    }
                }
                i += 3;
            }
            None => break,
        }
    }
    map
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseEncoding {
    Standard,
    WinAnsi,
    MacRoman,
}

fn base_encoding_named(name: &[u8]) -> BaseEncoding {
    match name {
        b"MacRomanEncoding" => BaseEncoding::MacRoman,
        b"StandardEncoding" => BaseEncoding::Standard,
        _ => BaseEncoding::WinAnsi,
    }
}

/// Base encoding and `/Differences` of a simple font.
fn encoding_entry(doc: &Document, dict: &Dictionary) -> (BaseEncoding, Vec<(u8, String)>) {
    let Ok(obj) = dict.get(b"Encoding") else {
        return (BaseEncoding::Standard, Vec::new());
    };
    match resolve(doc, obj) {
        Object::Name(name) => (base_encoding_named(name), Vec::new()),
        Object::Dictionary(enc) => {
            let base = enc
                .get(b"BaseEncoding")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map_or(BaseEncoding::Standard, base_encoding_named);
            let mut differences = Vec::new();
            if let Ok(arr) = enc.get(b"Differences").and_then(Object::as_array) {
                // None after a negative code: names are skipped until the next code
                let mut code: Option<u32> = Some(0);
                for item in arr {
                    match item {
                        Object::Integer(n) => code = u32::try_from(*n).ok(),
                        Object::Name(glyph) => {
                            if let Some(c) = code.and_then(|c| u8::try_from(c).ok()) {
                                differences
                                    .push((c, String::from_utf8_lossy(glyph).into_owned()));
                            }
                            code = code.map(|c| c.saturating_add(1));
                        }
                        _ => {}
                    }
                }
            }
            (base, differences)
        }
        _ => (BaseEncoding::Standard, Vec::new()),
    }
}

fn build_encoding(base: BaseEncoding, differences: &[(u8, String)]) -> Vec<Option<char>> {
    let decoder = match base {
        BaseEncoding::MacRoman => encoding_rs::MACINTOSH,
        BaseEncoding::Standard | BaseEncoding::WinAnsi => encoding_rs::WINDOWS_1252,
    };
    let mut table: Vec<Option<char>> = (0u8..=255)
        .map(|b| {
            if b < 32 {
                return None;
            }
            let bytes = [b];
            let (text, _, _) = decoder.decode(&bytes);
            text.chars().next()
        })
        .collect();
    if base == BaseEncoding::Standard {
        table[0x27] = Some('\u{2019}');
        table[0x60] = Some('\u{2018}');
    }
    for (code, glyph) in differences {
        table[*code as usize] = glyph_name_to_char(glyph);
    }
    table
}

/// Adobe glyph name to character, for the names that show up in practice.
fn glyph_name_to_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_alphabetic().then_some(c);
    }
    if let Some(hex) = name.strip_prefix("uni").or_else(|| name.strip_prefix('u')) {
        if (4..=6).contains(&hex.len()) {
            if let Ok(cp) = u32::from_str_radix(hex, 16) {
                return char::from_u32(cp);
            }
        }
    }
    let c = match name {
        "space" | "nbspace" => ' ',
        "zero" => '0',
        "one" => '1',
        "two" => '2',
        "three" => '3',
        "four" => '4',
        "five" => '5',
        "six" => '6',
        "seven" => '7',
        "eight" => '8',
        "nine" => '9',
        "period" => '.',
        "comma" => ',',
        "colon" => ':',
        "semicolon" => ';',
        "hyphen" | "minus" => '-',
        "exclam" => '!',
        "question" => '?',
        "quotesingle" => '\'',
        "quotedbl" => '"',
        "quoteleft" => '\u{2018}',
        "quoteright" => '\u{2019}',
        "quotedblleft" => '\u{201C}',
        "quotedblright" => '\u{201D}',
        "parenleft" => '(',
        "parenright" => ')',
        "bracketleft" => '[',
        "bracketright" => ']',
        "slash" => '/',
        "ampersand" => '&',
        "percent" => '%',
        "dollar" => '$',
        "at" => '@',
        "numbersign" => '#',
        "asterisk" => '*',
        "plus" => '+',
        "equal" => '=',
        "underscore" => '_',
        "endash" => '\u{2013}',
        "emdash" => '\u{2014}',
        "bullet" => '\u{2022}',
        "ellipsis" => '\u{2026}',
        "degree" => '\u{00B0}',
        "copyright" => '\u{00A9}',
        "registered" => '\u{00AE}',
        "Euro" => '\u{20AC}',
        "ff" => '\u{FB00}',
        "fi" => '\u{FB01}',
        "fl" => '\u{FB02}',
        "ffi" => '\u{FB03}',
        "ffl" => '\u{FB04}',
        _ => return None,
    };
    Some(c)
}

/// Metrics of a standard 14 font: widths for printable ASCII and descent.
#[derive(Debug)]
pub struct StandardFont {
    /// Widths for codes 32..=126.
    ascii_widths: [u16; 95],
    pub descent: f64,
}

impl StandardFont {
    pub fn width(&self, code: u32) -> Option<f64> {
        let index = code.checked_sub(32)? as usize;
        self.ascii_widths.get(index).map(|w| f64::from(*w))
    }
}

/// Look up a standard font by base name (case-sensitive, subset prefix removed).
pub fn standard_font(name: &str) -> Option<&'static StandardFont> {
    match name {
        "Helvetica" | "Helvetica-Oblique" | "Arial" | "ArialMT" => Some(&HELVETICA),
        "Helvetica-Bold" | "Helvetica-BoldOblique" | "Arial-BoldMT" => Some(&HELVETICA_BOLD),
        "Times-Roman" | "Times-Italic" | "TimesNewRomanPSMT" => Some(&TIMES_ROMAN),
        n if n.starts_with("Courier") => Some(&COURIER),
        _ => None,
    }
}

static COURIER: StandardFont = StandardFont {
    ascii_widths: [600; 95],
    descent: -157.0,
};

#[rustfmt::skip]
static HELVETICA: StandardFont = StandardFont {
    ascii_widths: [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
    ],
    descent: -207.0,
};

#[rustfmt::skip]
static HELVETICA_BOLD: StandardFont = StandardFont {
    ascii_widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
    ],
    descent: -207.0,
};

#[rustfmt::skip]
static TIMES_ROMAN: StandardFont = StandardFont {
    ascii_widths: [
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
        921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
        556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
        333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
        500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
    ],
    descent: -217.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    #[test]
    fn subset_prefix_is_removed() {
        assert_eq!(strip_subset_prefix("BCDFEE+ArialMT"), "ArialMT");
        assert_eq!(strip_subset_prefix("Helvetica"), "Helvetica");
        assert_eq!(strip_subset_prefix("Foo+Bar"), "Foo+Bar");
    }

    #[test]
    fn helvetica_standard_widths() {
        let font = Font::fallback("Helvetica");
        assert_eq!(font.width(u32::from(b' ')), 278.0);
        assert_eq!(font.width(u32::from(b'H')), 722.0);
        assert_eq!(font.width(u32::from(b'i')), 222.0);
        assert_eq!(font.descent, -207.0);
    }

    #[test]
    fn courier_is_monospaced() {
        let font = Font::fallback("Courier-Bold");
        assert_eq!(font.width(u32::from(b'i')), 600.0);
        assert_eq!(font.width(u32::from(b'W')), 600.0);
    }

    #[test]
    fn unknown_font_uses_default_width() {
        let font = Font::fallback("Mystery");
        assert_eq!(font.width(65), DEFAULT_WIDTH);
        assert_eq!(font.descent, DEFAULT_DESCENT);
    }

    #[test]
    fn widths_array_overrides_standard_table() {
        let doc = Document::with_version("1.5");
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "FirstChar" => 65,
            "LastChar" => 66,
            "Widths" => vec![Object::Integer(500), Object::Integer(510)],
        };
        let font = Font::load(&doc, &dict);
        assert_eq!(font.width(65), 500.0);
        assert_eq!(font.width(66), 510.0);
        // outside the array, the standard table answers
        assert_eq!(font.width(u32::from(b'H')), 722.0);
    }

    #[test]
    fn winansi_decoding() {
        let doc = Document::with_version("1.5");
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        };
        let font = Font::load(&doc, &dict);
        assert_eq!(font.text(0x41).as_deref(), Some("A"));
        assert_eq!(font.text(0x80).as_deref(), Some("\u{20AC}"));
        assert_eq!(font.text(0xE9).as_deref(), Some("\u{E9}"));
        let glyphs = font.glyphs(b"a b");
        assert_eq!(glyphs.len(), 3);
        assert!(glyphs[1].is_space);
    }

    #[test]
    fn differences_override_base_encoding() {
        let doc = Document::with_version("1.5");
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Times-Roman",
            "Encoding" => dictionary! {
                "Type" => "Encoding",
                "BaseEncoding" => "WinAnsiEncoding",
                "Differences" => vec![
                    Object::Integer(1),
                    Object::Name(b"fi".to_vec()),
                    Object::Name(b"uni00E9".to_vec()),
                    Object::Integer(65),
                    Object::Name(b"bullet".to_vec()),
                ],
            },
        };
        let font = Font::load(&doc, &dict);
        assert_eq!(font.text(1).as_deref(), Some("\u{FB01}"));
        assert_eq!(font.text(2).as_deref(), Some("\u{E9}"));
        assert_eq!(font.text(65).as_deref(), Some("\u{2022}"));
        assert_eq!(font.text(66).as_deref(), Some("B"));
    }

    #[test]
    fn negative_differences_code_is_skipped() {
        let doc = Document::with_version("1.5");
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => dictionary! {
                "Type" => "Encoding",
                "Differences" => vec![
                    Object::Integer(-1),
                    Object::Name(b"a".to_vec()),
                    Object::Name(b"b".to_vec()),
                    Object::Integer(4294967295),
                    Object::Name(b"c".to_vec()),
                    Object::Name(b"d".to_vec()),
                    Object::Integer(300),
                    Object::Name(b"e".to_vec()),
                    Object::Integer(66),
                    Object::Name(b"bullet".to_vec()),
                ],
            },
        };
        let font = Font::load(&doc, &dict);
        assert_eq!(font.text(65).as_deref(), Some("A"));
        assert_eq!(font.text(66).as_deref(), Some("\u{2022}"));
    }

    #[test]
    fn cid_widths_near_the_top_of_the_code_range() {
        let doc = Document::with_version("1.5");
        let widths = parse_cid_widths(
            &doc,
            &[
                Object::Integer(4294967294),
                Object::Array(vec![
                    Object::Integer(100),
                    Object::Integer(200),
                    Object::Integer(300),
                ]),
                Object::Integer(5),
                Object::Array(vec![Object::Integer(700)]),
            ],
        );
        assert_eq!(widths.get(&4294967294), Some(&100.0));
        assert_eq!(widths.get(&u32::MAX), Some(&200.0));
        assert_eq!(widths.get(&5), Some(&700.0));
    }

    #[test]
    fn composite_font_widths_and_codes() {
        let mut doc = Document::with_version("1.5");
        let descendant = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => "ABCDEF+NotoSansCJK",
            "DW" => 1000,
            "W" => vec![
                Object::Integer(1),
                Object::Array(vec![Object::Integer(500), Object::Integer(520)]),
                Object::Integer(10),
                Object::Integer(12),
                Object::Integer(250),
            ],
        });
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "ABCDEF+NotoSansCJK",
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(descendant)],
        };
        let font = Font::load(&doc, &dict);
        assert!(font.is_composite());
        assert_eq!(font.name, "NotoSansCJK");
        assert_eq!(font.width(1), 500.0);
        assert_eq!(font.width(2), 520.0);
        assert_eq!(font.width(11), 250.0);
        assert_eq!(font.width(99), 1000.0);

        let glyphs = font.glyphs(&[0x00, 0x01, 0x00, 0x0B]);
        assert_eq!(glyphs.iter().map(|g| g.code).collect::<Vec<_>>(), vec![1, 11]);
        assert_eq!(glyphs[0].text.as_deref(), Some("(cid:1)"));
    }

    #[test]
    fn glyph_names() {
        assert_eq!(glyph_name_to_char("A"), Some('A'));
        assert_eq!(glyph_name_to_char("uni4E2D"), Some('中'));
        assert_eq!(glyph_name_to_char("seven"), Some('7'));
        assert_eq!(glyph_name_to_char("g123"), None);
    }
}
