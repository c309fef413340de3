//! Command-line front end: convert a YAML file into the configuration DSL.
//!
//! Usage:
//!   rune-dsl-convert -i config.yaml -o config.conf
//!   rune-dsl-convert -i config.yaml -o config.conf --options convert.yaml -v
//!
//! Exits with status 0 on success and 1 on any failure; the output file is
//! not written when conversion fails.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rune_dsl_convert::export::convert_file;
use rune_dsl_convert::{ConvertError, ConvertOptions};

#[derive(Parser)]
#[command(name = "rune-dsl-convert")]
#[command(version)]
#[command(about = "Convert a commented YAML document into the configuration DSL")]
struct Args {
    /// Path to the input YAML file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Path to the output file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// YAML file with conversion options
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins when set; otherwise warn, or debug with --verbose.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => {
            println!("File written: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            if let Some(hint) = e.hint() {
                eprintln!("  hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let options = match &args.options {
        Some(path) => ConvertOptions::from_file(path)?,
        None => ConvertOptions::default(),
    };
    convert_file(&args.input, &args.output, &options)
}
