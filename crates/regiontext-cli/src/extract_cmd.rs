use std::path::Path;

use regiontext::{
    CanvasRect, DOWNLOAD_FILE_NAME, Outcome, PixelSpace, Region, RenderOptions, SessionError,
    SessionOptions, TextOptions,
};

use crate::canvas::read_canvas;
use crate::cli::OutputFormat;
use crate::shared::{open_session, page_failure, rasterizer};

/// Shown when nothing has been drawn.
pub const DRAW_PROMPT: &str = "Draw a bounding box to select text.";

/// Shown when the selection holds no text on any page.
pub const NO_TEXT: &str = "No text found in the selected area across all pages.";

pub struct ExtractArgs<'a> {
    pub file: &'a Path,
    pub page: usize,
    pub rects: &'a [CanvasRect],
    pub canvas: Option<&'a Path>,
    /// `Some(None)` saves under the default file name.
    pub output: Option<Option<&'a Path>>,
    pub format: OutputFormat,
    pub x_tolerance: f64,
    pub y_tolerance: f64,
    pub render: RenderOptions,
}

pub fn run(args: &ExtractArgs<'_>) -> Result<(), i32> {
    let options = SessionOptions {
        render: args.render.clone(),
        text: TextOptions {
            x_tolerance: args.x_tolerance,
            y_tolerance: args.y_tolerance,
            ..TextOptions::default()
        },
    };
    let mut session = open_session(args.file, rasterizer(&args.render), options)?;
    session.select_page(args.page).map_err(|e| page_failure(&e))?;
    session.render_current().map_err(|e| page_failure(&e))?;

    let drawn = match args.canvas {
        Some(path) => read_canvas(path)?.selection(),
        None => args.rects.last().copied(),
    };
    if let Some(rect) = drawn {
        session.draw(rect);
        print_coordinates(&rect.to_region());
    }

    let result = match session.extract() {
        Ok(Outcome::NoSelection) => {
            eprintln!("{DRAW_PROMPT}");
            return Ok(());
        }
        Ok(Outcome::NoText) => {
            eprintln!("{NO_TEXT}");
            return Ok(());
        }
        Ok(Outcome::Text(result)) => result,
        Err(SessionError::Render(e)) => return Err(page_failure(&e)),
        Err(SessionError::Extract(e)) => {
            eprintln!("Error: failed to extract text: {e}");
            return Err(1);
        }
    };

    let text = result.to_display_string();
    match args.format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "pages": result.pages(),
                "text": text,
            });
            println!("{value}");
        }
    }

    if let Some(path) = args.output {
        let path = path.unwrap_or(Path::new(DOWNLOAD_FILE_NAME));
        std::fs::write(path, &text).map_err(|e| {
            eprintln!("Error: failed to write {}: {e}", path.display());
            1
        })?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

/// Echo the drawn rectangle the way a front end shows it under the canvas.
fn print_coordinates(region: &Region<PixelSpace>) {
    eprintln!("Bounding Box Coordinates");
    eprintln!("{}", coordinate_line(region));
}

fn coordinate_line(region: &Region<PixelSpace>) -> String {
    format!(
        "Top-left: ({:.1}, {:.1}) | Bottom-right: ({:.1}, {:.1})",
        region.x0, region.y0, region.x1, region.y1
    )
}
