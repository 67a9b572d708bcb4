//! regiontext-parse: PDF parsing backend and content stream interpreter.
//!
//! Opens documents through [`lopdf`], reports the visible geometry of each
//! page, and interprets page content streams into glyph and path events.
//! Shared data types come from `regiontext-core`.

pub mod backend;
pub mod char_extraction;
pub mod cmap;
pub mod error;
pub mod fonts;
pub mod handler;
pub mod interpreter;
pub mod lopdf_backend;
pub mod page_geometry;
pub mod text_state;
pub mod tokenizer;

pub use backend::PdfBackend;
pub use char_extraction::char_from_event;
pub use cmap::ToUnicodeCMap;
pub use error::BackendError;
pub use fonts::Font;
pub use handler::{CharEvent, CollectingHandler, ContentHandler, PathEvent};
pub use interpreter::ExtractOptions;
pub use lopdf_backend::{LopdfBackend, LopdfDocument, LopdfPage};
pub use page_geometry::PageGeometry;
pub use regiontext_core;
pub use text_state::{TextParams, TextState};
pub use tokenizer::{Operand, Operator, tokenize};
