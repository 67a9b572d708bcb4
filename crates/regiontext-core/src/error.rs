//! Backend-level error type shared by the parsing layer and the facade.

use std::fmt;

/// Fatal error types for PDF processing.
///
/// These stop processing of the document or of the page being interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// Error during content stream interpretation.
    InterpreterError(String),
    /// The PDF is encrypted; passwords are not supported.
    PasswordRequired,
    /// A page index outside `[0, page_count)`.
    PageOutOfRange { index: usize, page_count: usize },
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::ParseError(msg) => write!(f, "parse error: {msg}"),
            PdfError::InterpreterError(msg) => write!(f, "interpreter error: {msg}"),
            PdfError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            PdfError::PageOutOfRange { index, page_count } => {
                write!(f, "page index {index} out of range (0..{page_count})")
            }
        }
    }
}

impl std::error::Error for PdfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PdfError::ParseError("bad xref".into()).to_string(),
            "parse error: bad xref"
        );
        assert_eq!(
            PdfError::PageOutOfRange {
                index: 3,
                page_count: 2
            }
            .to_string(),
            "page index 3 out of range (0..2)"
        );
        assert_eq!(
            PdfError::PasswordRequired.to_string(),
            "PDF is encrypted and requires a password"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PdfError::PasswordRequired);
        assert!(err.to_string().contains("encrypted"));
    }
}
