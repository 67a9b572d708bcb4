mod canvas;
mod cli;
mod extract_cmd;
mod info_cmd;
mod render_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only command output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        cli::Commands::Info { ref file, format } => info_cmd::run(file, format),
        cli::Commands::Render {
            ref file,
            page,
            ref display,
            ref output,
            format,
        } => render_cmd::run(file, page, &display.render_options(), output, format),
        cli::Commands::Extract {
            ref file,
            page,
            ref rect,
            ref canvas,
            ref output,
            format,
            x_tolerance,
            y_tolerance,
            ref display,
        } => extract_cmd::run(&extract_cmd::ExtractArgs {
            file,
            page,
            rects: rect,
            canvas: canvas.as_deref(),
            output: output.as_ref().map(|path| path.as_deref()),
            format,
            x_tolerance,
            y_tolerance,
            render: display.render_options(),
        }),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
