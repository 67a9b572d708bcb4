//! ToUnicode CMap parsing.
//!
//! Only the parts that map character codes to text are read: the
//! `bfchar` and `bfrange` sections and the width of the code space.

use std::collections::HashMap;

use crate::tokenizer::{Operand, tokenize};

/// Character code to Unicode text mapping from a ToUnicode stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToUnicodeCMap {
    map: HashMap<u32, String>,
    /// Byte width of codes from `begincodespacerange`, when declared.
    code_bytes: Option<usize>,
}

impl ToUnicodeCMap {
    /// Parse CMap program bytes. Malformed sections are skipped, so the
    /// result may be partial or empty.
    pub fn parse(data: &[u8]) -> Self {
        let mut cmap = Self::default();
        let ops = match tokenize(data) {
            Ok(ops) => ops,
            Err(err) => {
                tracing::warn!(%err, "unreadable ToUnicode CMap");
                return cmap;
            }
        };

        for op in ops {
            match op.name.as_str() {
                "endcodespacerange" => {
                    cmap.code_bytes = op
                        .operands
                        .first()
                        .and_then(Operand::as_bytes)
                        .map(<[u8]>::len);
                }
                "endbfchar" => {
                    for pair in op.operands.chunks_exact(2) {
                        if let (Some(src), Some(dst)) = (pair[0].as_bytes(), pair[1].as_bytes()) {
                            cmap.map.insert(code_of(src), utf16_text(dst));
                        }
                    }
                }
                "endbfrange" => {
                    for triple in op.operands.chunks_exact(3) {
                        cmap.add_range(&triple[0], &triple[1], &triple[2]);
                    }
                }
                _ => {}
            }
        }
        cmap
    }

    fn add_range(&mut self, lo: &Operand, hi: &Operand, dst: &Operand) {
        let (Some(lo), Some(hi)) = (lo.as_bytes(), hi.as_bytes()) else {
            return;
        };
        let (lo, hi) = (code_of(lo), code_of(hi));
        if hi < lo || hi - lo > 0xFFFF {
            return;
        }
        match dst {
            Operand::String(start) => {
                let mut units = utf16_units(start);
                for code in lo..=hi {
                    self.map.insert(code, String::from_utf16_lossy(&units));
                    if let Some(last) = units.last_mut() {
                        *last = last.wrapping_add(1);
                    }
                }
            }
            Operand::Array(items) => {
                for (code, item) in (lo..=hi).zip(items) {
                    if let Some(bytes) = item.as_bytes() {
                        self.map.insert(code, utf16_text(bytes));
                    }
                }
            }
            _ => {}
        }
    }

    pub fn lookup(&self, code: u32) -> Option<&str> {
        self.map.get(&code).map(String::as_str)
    }

    pub fn code_bytes(&self) -> Option<usize> {
        self.code_bytes
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn code_of(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

fn utf16_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|pair| match pair {
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            [single] => u16::from(*single),
            _ => 0,
        })
        .collect()
}

fn utf16_text(bytes: &[u8]) -> String {
    String::from_utf16_lossy(&utf16_units(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
2 beginbfchar
<0003> <0020>
<0011> <00660069>
endbfchar
2 beginbfrange
<0024> <0026> <0041>
<0030> <0031> [<0078> <D83DDE00>]
endbfrange
endcmap
CMapName currentdict /CMap defineresource pop
end
end";

    #[test]
    fn bfchar_entries() {
        let cmap = ToUnicodeCMap::parse(SAMPLE);
        assert_eq!(cmap.lookup(0x0003), Some(" "));
        assert_eq!(cmap.lookup(0x0011), Some("fi"));
    }

    #[test]
    fn bfrange_increments_destination() {
        let cmap = ToUnicodeCMap::parse(SAMPLE);
        assert_eq!(cmap.lookup(0x0024), Some("A"));
        assert_eq!(cmap.lookup(0x0025), Some("B"));
        assert_eq!(cmap.lookup(0x0026), Some("C"));
        assert_eq!(cmap.lookup(0x0027), None);
    }

    #[test]
    fn bfrange_array_destinations_and_surrogates() {
        let cmap = ToUnicodeCMap::parse(SAMPLE);
        assert_eq!(cmap.lookup(0x0030), Some("x"));
        assert_eq!(cmap.lookup(0x0031), Some("\u{1F600}"));
    }

    #[test]
    fn code_space_width() {
        let cmap = ToUnicodeCMap::parse(SAMPLE);
        assert_eq!(cmap.code_bytes(), Some(2));
    }

    #[test]
    fn garbage_yields_empty_map() {
        let cmap = ToUnicodeCMap::parse(b"(unterminated");
        assert!(cmap.is_empty());
    }
}
