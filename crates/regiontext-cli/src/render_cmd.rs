use std::path::Path;

use regiontext::{RenderError, RenderOptions, render};

use crate::cli::OutputFormat;
use crate::shared::{open_document, page_failure, rasterizer};

pub fn run(
    file: &Path,
    page: usize,
    options: &RenderOptions,
    output: &Path,
    format: OutputFormat,
) -> Result<(), i32> {
    let doc = open_document(file)?;
    let page_count = doc.page_count();
    if page == 0 || page > page_count {
        return Err(page_failure(&RenderError::PageOutOfRange { page, page_count }));
    }

    let image = render(&doc, &rasterizer(options), page - 1, options)
        .map_err(|e| page_failure(&e))?;
    let png = image.to_png().map_err(|e| page_failure(&e))?;
    std::fs::write(output, png).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;
    tracing::info!(page, output = %output.display(), "page rendered");

    let points = image.point_dims();
    match format {
        OutputFormat::Text => {
            println!(
                "Page {page}: {}x{} px ({:.2} x {:.2} pt) -> {}",
                image.width(),
                image.height(),
                points.width(),
                points.height(),
                output.display()
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "page": page,
                "width": image.width(),
                "height": image.height(),
                "page_width": points.width(),
                "page_height": points.height(),
                "output": output.display().to_string(),
            });
            println!("{value}");
        }
    }

    Ok(())
}
