//! Content stream tokenizer.
//!
//! Splits raw content stream bytes into [`Operator`]s, each carrying the
//! [`Operand`]s that preceded it. Inline image data (`BI ... ID ... EI`) is
//! skipped as one opaque `BI` operator.

use crate::error::BackendError;

/// A content stream operand value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Real(f64),
    /// Name without the leading `/`.
    Name(String),
    /// Literal or hex string, as raw bytes.
    String(Vec<u8>),
    Array(Vec<Operand>),
    Boolean(bool),
    Null,
    Dictionary(Vec<(String, Operand)>),
}

impl Operand {
    /// Numeric value of an integer or real operand.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Integer(i) => Some(*i as f64),
            Operand::Real(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Operand::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Operand::String(s) => Some(s),
            _ => None,
        }
    }
}

/// An operator with its preceding operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub name: String,
    pub operands: Vec<Operand>,
}

/// Tokenize a content stream.
///
/// # Errors
///
/// Returns [`BackendError::Interpreter`] for unterminated strings, arrays or
/// dictionaries and for invalid hex digits.
pub fn tokenize(input: &[u8]) -> Result<Vec<Operator>, BackendError> {
    let mut lexer = Lexer { input, pos: 0 };
    let mut ops = Vec::new();
    let mut stack: Vec<Operand> = Vec::new();

    loop {
        lexer.skip_whitespace();
        let Some(b) = lexer.peek() else { break };
        if is_regular(b) && !is_number_start(b) {
            let word = lexer.keyword();
            match word.as_str() {
                "true" => stack.push(Operand::Boolean(true)),
                "false" => stack.push(Operand::Boolean(false)),
                "null" => stack.push(Operand::Null),
                "BI" => {
                    lexer.skip_inline_image();
                    stack.clear();
                    ops.push(Operator {
                        name: word,
                        operands: Vec::new(),
                    });
                }
                _ => ops.push(Operator {
                    name: word,
                    operands: std::mem::take(&mut stack),
                }),
            }
        } else if b == b']' || b == b'>' || b == b')' || b == b'}' || b == b'{' {
            // stray closing delimiter; skip
            lexer.pos += 1;
        } else {
            stack.push(lexer.object()?);
        }
    }

    Ok(ops)
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x00)
}

fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.')
}

fn hex_value(b: u8) -> Result<u8, BackendError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(BackendError::Interpreter(format!(
            "invalid hex digit {:?} in hex string",
            b as char
        ))),
    }
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.pos += 1;
            } else if b == b'%' {
                while let Some(c) = self.peek() {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn take_regular(&mut self) -> &[u8] {
        let start = self.pos;
        while self.peek().is_some_and(is_regular) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn keyword(&mut self) -> String {
        String::from_utf8_lossy(self.take_regular()).into_owned()
    }

    /// One operand starting at the current position.
    fn object(&mut self) -> Result<Operand, BackendError> {
        match self.peek() {
            Some(b'(') => self.literal_string().map(Operand::String),
            Some(b'<') if self.input.get(self.pos + 1) == Some(&b'<') => {
                self.dictionary().map(Operand::Dictionary)
            }
            Some(b'<') => self.hex_string().map(Operand::String),
            Some(b'[') => self.array().map(Operand::Array),
            Some(b'/') => {
                self.pos += 1;
                Ok(Operand::Name(self.name()))
            }
            Some(b) if is_number_start(b) => Ok(self.number()),
            Some(_) => {
                let word = self.keyword();
                Ok(match word.as_str() {
                    "true" => Operand::Boolean(true),
                    "false" => Operand::Boolean(false),
                    _ => Operand::Null,
                })
            }
            None => Err(BackendError::Interpreter(
                "unexpected end of content stream".to_string(),
            )),
        }
    }

    /// Name body after `/`, with `#xx` escapes decoded.
    fn name(&mut self) -> String {
        let raw = self.take_regular().to_vec();
        let mut out = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'#' && i + 2 < raw.len() {
                if let (Ok(hi), Ok(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                    out.push((hi << 4) | lo);
                    i += 3;
                    continue;
                }
            }
            out.push(raw[i]);
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn number(&mut self) -> Operand {
        let token = self.take_regular();
        let parse = |bytes: &[u8]| std::str::from_utf8(bytes).ok().map(str::to_owned);
        if let Some(i) = parse(token).and_then(|t| t.parse::<i64>().ok()) {
            return Operand::Integer(i);
        }
        // malformed numbers such as "1.2.3" read as their longest valid prefix
        (1..=token.len())
            .rev()
            .find_map(|end| parse(&token[..end]).and_then(|t| t.parse::<f64>().ok()))
            .map_or(Operand::Real(0.0), Operand::Real)
    }

    fn literal_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut out = Vec::new();
        let mut depth = 1u32;
        while let Some(b) = self.peek() {
            self.pos += 1;
            match b {
                b'(' => {
                    depth += 1;
                    out.push(b);
                }
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(out);
                    }
                    out.push(b);
                }
                b'\\' => self.escape(&mut out),
                _ => out.push(b),
            }
        }
        Err(BackendError::Interpreter(
            "unterminated literal string".to_string(),
        ))
    }

    fn escape(&mut self, out: &mut Vec<u8>) {
        let Some(b) = self.peek() else { return };
        self.pos += 1;
        match b {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'\r' => {
                if self.peek() == Some(b'\n') {
                    self.pos += 1;
                }
            }
            b'\n' => {}
            b'0'..=b'7' => {
                let mut value = u32::from(b - b'0');
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                out.push((value & 0xFF) as u8);
            }
            other => out.push(other),
        }
    }

    fn hex_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut digits = Vec::new();
        loop {
            match self.peek() {
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b) => {
                    self.pos += 1;
                    if !is_whitespace(b) {
                        digits.push(hex_value(b)?);
                    }
                }
                None => {
                    return Err(BackendError::Interpreter(
                        "unterminated hex string".to_string(),
                    ));
                }
            }
        }
        if digits.len() % 2 == 1 {
            digits.push(0);
        }
        Ok(digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
    }

    fn array(&mut self) -> Result<Vec<Operand>, BackendError> {
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => items.push(self.object()?),
                None => {
                    return Err(BackendError::Interpreter("unterminated array".to_string()));
                }
            }
        }
    }

    fn dictionary(&mut self) -> Result<Vec<(String, Operand)>, BackendError> {
        self.pos += 2;
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.pos += 1;
                    if self.peek() == Some(b'>') {
                        self.pos += 1;
                    }
                    return Ok(entries);
                }
                Some(b'/') => {
                    self.pos += 1;
                    let key = self.name();
                    self.skip_whitespace();
                    let value = self.object()?;
                    entries.push((key, value));
                }
                Some(_) => {
                    // value without a key; consume and drop it
                    self.object()?;
                }
                None => {
                    return Err(BackendError::Interpreter(
                        "unterminated dictionary".to_string(),
                    ));
                }
            }
        }
    }

    /// Skip from after `BI` to just past the matching `EI`.
    fn skip_inline_image(&mut self) {
        // image dictionary up to the ID keyword
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return,
                Some(b) if is_regular(b) && !is_number_start(b) => {
                    if self.take_regular() == b"ID" {
                        break;
                    }
                }
                Some(_) => {
                    if self.object().is_err() {
                        return;
                    }
                }
            }
        }
        // single whitespace byte separates ID from the data
        if self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        let data = &self.input[self.pos..];
        let end = data.windows(2).enumerate().find_map(|(i, w)| {
            let before_ok = i == 0 || is_whitespace(data[i - 1]);
            let after_ok = data.get(i + 2).is_none_or(|&b| !is_regular(b));
            (w == b"EI" && before_ok && after_ok).then_some(i + 2)
        });
        self.pos = match end {
            Some(offset) => self.pos + offset,
            None => self.input.len(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ops: &[Operator]) -> Vec<&str> {
        ops.iter().map(|op| op.name.as_str()).collect()
    }

    #[test]
    fn simple_text_object() {
        let ops = tokenize(b"BT /F1 12 Tf 72 720 Td (Hello) Tj ET").unwrap();
        assert_eq!(names(&ops), vec!["BT", "Tf", "Td", "Tj", "ET"]);
        assert_eq!(
            ops[1].operands,
            vec![Operand::Name("F1".into()), Operand::Integer(12)]
        );
        assert_eq!(ops[3].operands, vec![Operand::String(b"Hello".to_vec())]);
    }

    #[test]
    fn reals_and_signs() {
        let ops = tokenize(b"-1.5 .25 +3 0 0 1 cm").unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].operands[0], Operand::Real(-1.5));
        assert_eq!(ops[0].operands[1], Operand::Real(0.25));
        assert_eq!(ops[0].operands[2], Operand::Integer(3));
    }

    #[test]
    fn literal_string_escapes_and_nesting() {
        let ops = tokenize(br"(a\(b\) (c) \101\n\\) Tj").unwrap();
        assert_eq!(ops[0].operands[0], Operand::String(b"a(b) (c) A\n\\".to_vec()));
    }

    #[test]
    fn line_continuation_in_literal_string() {
        let ops = tokenize(b"(ab\\\ncd) Tj").unwrap();
        assert_eq!(ops[0].operands[0], Operand::String(b"abcd".to_vec()));
    }

    #[test]
    fn hex_string_with_odd_digits() {
        let ops = tokenize(b"<48 65 6C6C 6F7> Tj").unwrap();
        assert_eq!(ops[0].operands[0], Operand::String(b"Hello\x70".to_vec()));
    }

    #[test]
    fn tj_array() {
        let ops = tokenize(b"[(A) -120 (B)] TJ").unwrap();
        assert_eq!(
            ops[0].operands[0],
            Operand::Array(vec![
                Operand::String(b"A".to_vec()),
                Operand::Integer(-120),
                Operand::String(b"B".to_vec()),
            ])
        );
    }

    #[test]
    fn quote_operators() {
        let ops = tokenize(b"(x) ' 1 2 (y) \"").unwrap();
        assert_eq!(names(&ops), vec!["'", "\""]);
        assert_eq!(ops[1].operands.len(), 3);
    }

    #[test]
    fn comments_are_ignored() {
        let ops = tokenize(b"% header\nq % save\nQ").unwrap();
        assert_eq!(names(&ops), vec!["q", "Q"]);
    }

    #[test]
    fn name_escapes() {
        let ops = tokenize(b"/A#20B gs").unwrap();
        assert_eq!(ops[0].operands[0], Operand::Name("A B".into()));
    }

    #[test]
    fn marked_content_dictionary() {
        let ops = tokenize(b"/Span <</MCID 3 /Alt (x)>> BDC EMC").unwrap();
        assert_eq!(names(&ops), vec!["BDC", "EMC"]);
        assert_eq!(
            ops[0].operands[1],
            Operand::Dictionary(vec![
                ("MCID".into(), Operand::Integer(3)),
                ("Alt".into(), Operand::String(b"x".to_vec())),
            ])
        );
    }

    #[test]
    fn inline_image_is_skipped() {
        let ops = tokenize(b"q BI /W 2 /H 1 /BPC 8 /CS /G ID \x00EI\xff EI Q").unwrap();
        assert_eq!(names(&ops), vec!["q", "BI", "Q"]);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(tokenize(b"(abc Tj").is_err());
    }

    #[test]
    fn invalid_hex_is_an_error() {
        assert!(tokenize(b"<4G> Tj").is_err());
    }

    #[test]
    fn booleans_and_null() {
        let ops = tokenize(b"true false null xx").unwrap();
        assert_eq!(
            ops[0].operands,
            vec![Operand::Boolean(true), Operand::Boolean(false), Operand::Null]
        );
    }
}
