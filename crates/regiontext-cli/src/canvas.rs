//! Drawing-surface documents.
//!
//! A drawing surface reports its state as `{"objects": [...]}` with one entry
//! per rectangle drawn. Only the most recent one is a selection.

use std::io::Read;
use std::path::Path;

use regiontext::CanvasRect;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CanvasDocument {
    #[serde(default)]
    pub objects: Vec<CanvasRect>,
}

impl CanvasDocument {
    /// The last rectangle drawn, if any.
    pub fn selection(&self) -> Option<CanvasRect> {
        self.objects.last().copied()
    }
}

/// Read a canvas document from a file, or from stdin when `path` is `-`.
pub fn read_canvas(path: &Path) -> Result<CanvasDocument, i32> {
    let mut json = String::new();
    let read = if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut json).map(|_| ())
    } else {
        std::fs::read_to_string(path).map(|s| json = s)
    };
    if let Err(e) = read {
        eprintln!("Error: failed to read canvas {}: {e}", path.display());
        return Err(1);
    }
    serde_json::from_str(&json).map_err(|e| {
        eprintln!("Error: invalid canvas JSON: {e}");
        1
    })
}
