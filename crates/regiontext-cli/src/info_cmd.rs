use std::path::Path;

use crate::cli::OutputFormat;
use crate::shared::open_document;

pub fn run(file: &Path, format: OutputFormat) -> Result<(), i32> {
    let doc = open_document(file)?;

    match format {
        OutputFormat::Text => {
            println!("Pages: {}", doc.page_count());
            for info in doc.pages() {
                println!(
                    "Page {}: {:.2} x {:.2} pt (rotation {})",
                    info.number(),
                    info.width(),
                    info.height(),
                    info.rotation()
                );
            }
        }
        OutputFormat::Json => {
            let pages: Vec<serde_json::Value> = doc
                .pages()
                .iter()
                .map(|info| {
                    serde_json::json!({
                        "page": info.number(),
                        "width": info.width(),
                        "height": info.height(),
                        "rotation": info.rotation(),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "page_count": doc.page_count(),
                "pages": pages,
            });
            println!("{output}");
        }
    }

    Ok(())
}
