//! lopdf-based PDF parsing backend.

use std::sync::LazyLock;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use regiontext_core::PdfError;

use crate::backend::PdfBackend;
use crate::error::BackendError;
use crate::handler::ContentHandler;
use crate::interpreter::{ExtractOptions, Interpreter};
use crate::page_geometry::PageGeometry;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: Document,
    /// Page object ids in page order.
    page_ids: Vec<ObjectId>,
}

impl LopdfDocument {
    pub fn inner(&self) -> &Document {
        &self.inner
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .finish_non_exhaustive()
    }
}

/// A page within a [`LopdfDocument`].
#[derive(Debug, Clone, Copy)]
pub struct LopdfPage {
    pub object_id: ObjectId,
    /// 0-based page index.
    pub index: usize,
}

/// The lopdf-based PDF backend.
pub struct LopdfBackend;

/// Numeric value of an Integer or Real object.
pub(crate) fn object_to_f64(obj: &Object) -> Result<f64, BackendError> {
    match obj {
        Object::Integer(i) => Ok(*i as f64),
        Object::Real(f) => Ok(f64::from(*f)),
        _ => Err(BackendError::Parse(format!("expected number, got {obj:?}"))),
    }
}

/// Follow a reference; anything else, or a dangling reference, is returned
/// unchanged.
pub(crate) fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Stream content, decompressed when a filter is set.
pub(crate) fn stream_bytes(stream: &Stream) -> Result<Vec<u8>, BackendError> {
    if stream.dict.get(b"Filter").is_ok() {
        stream
            .decompressed_content()
            .map_err(|e| BackendError::Parse(format!("failed to decompress stream: {e}")))
    } else {
        Ok(stream.content.clone())
    }
}

/// Look up a page attribute, walking up `/Parent` links for inherited keys.
fn resolve_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>, BackendError> {
    let mut current = page_id;
    // page trees are shallow; the bound stops /Parent cycles
    for _ in 0..64 {
        let dict = doc
            .get_object(current)
            .and_then(Object::as_dict)
            .map_err(|e| BackendError::Parse(format!("failed to get page dictionary: {e}")))?;
        if let Ok(value) = dict.get(key) {
            return Ok(Some(resolve(doc, value)));
        }
        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => current = parent,
            Err(_) => return Ok(None),
        }
    }
    Ok(None)
}

fn box_entry(
    doc: &Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<[f64; 4]>, BackendError> {
    let Some(obj) = resolve_inherited(doc, page_id, key)? else {
        return Ok(None);
    };
    let arr = obj.as_array().map_err(|_| {
        BackendError::Parse(format!("/{} is not an array", String::from_utf8_lossy(key)))
    })?;
    if arr.len() != 4 {
        return Err(BackendError::Parse(format!(
            "expected 4-element array for /{}, got {}",
            String::from_utf8_lossy(key),
            arr.len()
        )));
    }
    let mut values = [0.0; 4];
    for (slot, item) in values.iter_mut().zip(arr) {
        *slot = object_to_f64(resolve(doc, item))?;
    }
    Ok(Some(values))
}

/// Concatenated, decoded `/Contents` of a page.
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>, BackendError> {
    let Ok(contents) = page_dict.get(b"Contents") else {
        return Ok(Vec::new());
    };
    match resolve(doc, contents) {
        Object::Stream(stream) => stream_bytes(stream),
        Object::Array(parts) => {
            let mut content = Vec::new();
            for part in parts {
                let stream = resolve(doc, part).as_stream().map_err(|e| {
                    BackendError::Parse(format!("/Contents array item is not a stream: {e}"))
                })?;
                if !content.is_empty() {
                    content.push(b'\n');
                }
                content.extend_from_slice(&stream_bytes(stream)?);
            }
            Ok(content)
        }
        _ => Err(BackendError::Parse(
            "/Contents is not a stream or array".to_string(),
        )),
    }
}

static EMPTY_RESOURCES: LazyLock<Dictionary> = LazyLock::new(Dictionary::new);

fn page_resources(doc: &Document, page_id: ObjectId) -> Result<&Dictionary, BackendError> {
    match resolve_inherited(doc, page_id, b"Resources")? {
        Some(obj) => obj
            .as_dict()
            .map_err(|_| BackendError::Parse("/Resources is not a dictionary".to_string())),
        None => Ok(&EMPTY_RESOURCES),
    }
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Page = LopdfPage;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;
        if inner.is_encrypted() {
            return Err(BackendError::Core(PdfError::PasswordRequired));
        }
        let page_ids: Vec<ObjectId> = inner.get_pages().values().copied().collect();
        tracing::debug!(pages = page_ids.len(), "parsed PDF");
        Ok(LopdfDocument { inner, page_ids })
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.page_ids.len()
    }

    fn get_page(doc: &Self::Document, index: usize) -> Result<Self::Page, Self::Error> {
        let object_id = *doc.page_ids.get(index).ok_or(BackendError::Core(
            PdfError::PageOutOfRange {
                index,
                page_count: doc.page_ids.len(),
            },
        ))?;
        Ok(LopdfPage { object_id, index })
    }

    fn page_geometry(doc: &Self::Document, page: &Self::Page) -> Result<PageGeometry, Self::Error> {
        let media_box = box_entry(&doc.inner, page.object_id, b"MediaBox")?
            .ok_or_else(|| BackendError::Parse("page has no /MediaBox".to_string()))?;
        let crop_box = match box_entry(&doc.inner, page.object_id, b"CropBox") {
            Ok(crop) => crop,
            Err(err) => {
                tracing::warn!(page = page.index, %err, "ignoring malformed /CropBox");
                None
            }
        };
        let rotate = resolve_inherited(&doc.inner, page.object_id, b"Rotate")?
            .and_then(|obj| obj.as_i64().ok())
            .unwrap_or(0);
        Ok(PageGeometry::new(media_box, crop_box, rotate))
    }

    fn interpret_page(
        doc: &Self::Document,
        page: &Self::Page,
        handler: &mut dyn ContentHandler,
        options: &ExtractOptions,
    ) -> Result<(), Self::Error> {
        let inner = &doc.inner;
        let page_dict = inner
            .get_object(page.object_id)
            .and_then(Object::as_dict)
            .map_err(|e| BackendError::Parse(format!("failed to get page dictionary: {e}")))?;
        let content = page_content(inner, page_dict)?;
        let resources = page_resources(inner, page.object_id)?;
        Interpreter::new(inner, handler, options).run(&content, resources, 0)
    }
}
