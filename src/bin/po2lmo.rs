//! po2lmo Binary
//!
//! Converts a PO file into an LMO file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use po2lmo::{Config, Converter, Po2LmoError};
use tracing_subscriber::{fmt, EnvFilter};

/// Convert GNU gettext PO files to LMO binary format
#[derive(Parser, Debug)]
#[command(name = "po2lmo")]
#[command(about = "Convert GNU gettext PO files to LMO binary format")]
#[command(after_help = "Example: po2lmo input.po output.lmo")]
#[command(version)]
struct Args {
    /// Input PO file
    input: PathBuf,

    /// Output LMO file
    output: PathBuf,

    /// Trace every entry's hash and index slot to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing/logging; diagnostics go to stderr
    let default_filter = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("po2lmo v{}", po2lmo::VERSION);

    let config = Config::builder().debug(args.debug).build();
    let converter = Converter::new(config);

    match converter.convert(&args.input, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so the reason survives any RUST_LOG filter
            eprintln!("Error: {}", describe(&e, &args));
            ExitCode::FAILURE
        }
    }
}

/// Error reason prefixed with the file (and line) it concerns
fn describe(e: &Po2LmoError, args: &Args) -> String {
    match e {
        // Already name their path
        Po2LmoError::Read { .. } | Po2LmoError::Write { .. } => e.to_string(),
        _ => match e.line() {
            Some(line) => format!("{}:{line}: {e}", args.input.display()),
            None => format!("{}: {e}", args.input.display()),
        },
    }
}
