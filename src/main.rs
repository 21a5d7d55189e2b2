/// Tide data converter CLI.
///
/// Reads a tide-extrema CSV, reconstructs hourly heights, validates, and
/// writes the JSON artifact consumed by the page renderer:
///
///   tidetab input.csv output.json [config.toml]
///
/// The output file is only written after the whole input has parsed — a
/// malformed row aborts the run and leaves no partial artifact behind.

use std::path::Path;
use std::process::ExitCode;

use tidetab::analysis::hourly::generate_hourly;
use tidetab::config::Config;
use tidetab::ingest::csv_extrema::load_extrema;
use tidetab::logging::{self, Stage};
use tidetab::model::TideError;
use tidetab::output::write_records;
use tidetab::validate::{print_summary, validate_records};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: tidetab input.csv output.json [config.toml]");
        return ExitCode::from(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);
    let config_path = args.get(3).map(Path::new);

    match run(input, output, config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<(), TideError> {
    let config = Config::load(config_path)?;
    logging::init_logger(config.log_level(), config.log_file.as_deref(), false);

    println!("🌊 Tide Data Converter");
    println!("{}", "═".repeat(60));
    println!();

    // Step 1: Parse CSV to extrema
    println!("📖 Reading CSV file: {}", input.display());
    let extrema = load_extrema(input).inspect_err(|e| {
        logging::error(Stage::Loader, None, &e.to_string());
    })?;
    logging::info(
        Stage::Loader,
        None,
        &format!("✅ Loaded {} tide extrema", extrema.len()),
    );

    if let (Some(first), Some(last)) = (extrema.first(), extrema.last()) {
        println!(
            "📅 Date range: {} to {}",
            first.time.date(),
            last.time.date()
        );
        println!();
        logging::debug(
            Stage::Loader,
            None,
            &format!("extrema span {} to {}", first.time, last.time),
        );
    }

    // Step 2: Generate hourly tides
    println!("🔄 Generating hourly tide data...");
    let records = generate_hourly(&extrema);
    logging::info(
        Stage::Generator,
        None,
        &format!("✅ Generated {} days of hourly data", records.len()),
    );
    println!();

    // Step 3: Validate output
    println!("🔍 Validating output...");
    let findings = validate_records(&records, &config.plausible_range());
    for finding in &findings {
        logging::warn(Stage::Validator, Some(&finding.date.to_string()), &finding.message);
    }
    print_summary(&findings);
    println!();

    // Step 4: Write output
    println!("💾 Writing to {}...", output.display());
    write_records(output, &records)?;

    let samples: usize = records.iter().map(|r| r.hours.len()).sum();
    logging::log_run_summary(records.len(), samples, findings.len());

    println!();
    println!("{}", "═".repeat(60));
    println!("🎉 SUCCESS!");
    println!("{}", "═".repeat(60));
    println!("📊 Generated: {} days of tide data", records.len());
    println!("📁 Total hourly records: {}", samples);
    println!("📄 Output file: {}", output.display());
    println!();
    println!("📝 Next step:");
    println!("   Run: tide_pages {} tide_tables.txt", output.display());

    Ok(())
}
