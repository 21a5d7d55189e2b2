/// Monthly tide page renderer CLI.
///
/// Reads the JSON artifact produced by `tidetab` and writes printable
/// monthly pages — one 25-column grid per year-month:
///
///   tide_pages input.json output.txt [location]

use std::path::Path;
use std::process::ExitCode;

use tidetab::config::DEFAULT_LOCATION;
use tidetab::logging::{self, LogLevel, Stage};
use tidetab::model::TideError;
use tidetab::output::read_records;
use tidetab::render::render_pages;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: tide_pages input.json output.txt [location]");
        return ExitCode::from(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);
    let location = args.get(3).map(String::as_str).unwrap_or(DEFAULT_LOCATION);

    match run(input, output, location) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(input: &Path, output: &Path, location: &str) -> Result<(), TideError> {
    logging::init_logger(LogLevel::Info, None, false);

    println!("📄 Tide Page Renderer");
    println!("{}", "═".repeat(60));

    let records = read_records(input)?;
    if records.is_empty() {
        logging::warn(Stage::Render, None, "input artifact contains no days");
    }

    let pages = render_pages(&records, location);
    std::fs::write(output, &pages).map_err(|e| TideError::Io {
        path: output.display().to_string(),
        message: e.to_string(),
    })?;

    let months = pages.matches('\u{c}').count() + if records.is_empty() { 0 } else { 1 };
    logging::info(
        Stage::Render,
        None,
        &format!("✅ Rendered {} month page(s) for {}", months, location),
    );
    println!("📄 Output file: {}", output.display());

    Ok(())
}
