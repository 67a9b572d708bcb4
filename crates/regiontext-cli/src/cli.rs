use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use regiontext::{CanvasRect, DEFAULT_MAX_NATIVE_PIXELS, RenderOptions};

/// Render a PDF page and extract the text inside a rectangle drawn on it,
/// from every page of the document.
#[derive(Debug, Parser)]
#[command(name = "regiontext", about, version)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the page count and page sizes in points
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render a page to the PNG a drawing surface uses as its background
    Render {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[command(flatten)]
        display: DisplayArgs,

        /// Where to write the PNG
        #[arg(long, short)]
        output: PathBuf,

        /// Output format for the reported dimensions
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract the text inside a rectangle drawn on a rendered page
    Extract {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page the rectangle was drawn on (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rectangle in image pixels as LEFT,TOP,WIDTH,HEIGHT. May repeat;
        /// the last one is used
        #[arg(long, value_name = "L,T,W,H", value_parser = parse_rect, allow_hyphen_values = true)]
        rect: Vec<CanvasRect>,

        /// Canvas JSON document ({"objects": [...]}); its last object is
        /// used. `-` reads stdin
        #[arg(long, value_name = "JSON", conflicts_with = "rect")]
        canvas: Option<PathBuf>,

        /// Save the text to a file (default name: extracted_text.txt)
        #[arg(long, short, num_args = 0..=1, value_name = "PATH")]
        output: Option<Option<PathBuf>>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Horizontal tolerance for word grouping
        #[arg(long, default_value_t = 3.0)]
        x_tolerance: f64,

        /// Vertical tolerance for word and line grouping
        #[arg(long, default_value_t = 3.0)]
        y_tolerance: f64,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Size of the displayed image the rectangle refers to.
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Largest image width in pixels
    #[arg(long, default_value_t = 800)]
    pub max_width: u32,

    /// Largest image height in pixels
    #[arg(long, default_value_t = 1000)]
    pub max_height: u32,

    /// Do not enlarge pages smaller than the maximum size
    #[arg(long)]
    pub no_upscale: bool,

    /// Native rendering resolution in DPI
    #[arg(long, default_value_t = 72.0)]
    pub resolution: f64,

    /// Refuse pages whose native bitmap would exceed this many pixels
    #[arg(long, default_value_t = DEFAULT_MAX_NATIVE_PIXELS)]
    pub max_native_pixels: u64,
}

impl DisplayArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_width: self.max_width,
            max_height: self.max_height,
            upscale: !self.no_upscale,
            resolution: self.resolution,
            max_native_pixels: self.max_native_pixels,
        }
    }
}

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}

/// Parse `LEFT,TOP,WIDTH,HEIGHT`.
pub fn parse_rect(s: &str) -> Result<CanvasRect, String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{}': {e}", part.trim()))
        })
        .collect::<Result<_, _>>()?;
    match values.as_slice() {
        [left, top, width, height] => Ok(CanvasRect::new(*left, *top, *width, *height)),
        _ => Err(format!(
            "expected LEFT,TOP,WIDTH,HEIGHT, got {} value(s)",
            values.len()
        )),
    }
}
