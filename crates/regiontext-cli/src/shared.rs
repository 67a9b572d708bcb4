use std::path::Path;

use regiontext::{Document, LoadError, Rasterize, RenderOptions, Session, SessionOptions};
use regiontext_raster::SkiaRasterizer;

/// Shown when the upload cannot be opened as a PDF.
pub const INVALID_PDF: &str = "Invalid PDF file. Please try again.";

/// Shown when the selected page cannot be rendered.
pub const PAGE_FAILED: &str = "Failed to process the selected page.";

fn read_file(file: &Path) -> Result<Vec<u8>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    std::fs::read(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

fn report_load_error(e: &LoadError) -> i32 {
    eprintln!("{INVALID_PDF}");
    eprintln!("Error: {e}");
    1
}

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or is not a PDF this tool can read.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    let bytes = read_file(file)?;
    Document::open(&bytes).map_err(|e| report_load_error(&e))
}

/// Open a PDF file as a selection session.
pub fn open_session<R: Rasterize>(
    file: &Path,
    rasterizer: R,
    options: SessionOptions,
) -> Result<Session<R>, i32> {
    let bytes = read_file(file)?;
    Session::open(&bytes, rasterizer, options).map_err(|e| report_load_error(&e))
}

/// Print the failure of a page render and return the exit code.
pub fn page_failure(e: &dyn std::error::Error) -> i32 {
    eprintln!("{PAGE_FAILED}");
    eprintln!("Error: {e}");
    1
}

/// Rasterizer honouring the same pixel budget as the render options.
pub fn rasterizer(options: &RenderOptions) -> SkiaRasterizer {
    SkiaRasterizer {
        max_pixels: options.max_native_pixels,
        ..SkiaRasterizer::default()
    }
}
