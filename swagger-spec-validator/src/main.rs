// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use colored::Colorize;
use swagger_spec_validator::{SpecValidator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

/// Validate a Swagger 1.2 or 2.0 spec file.
#[derive(Parser, Debug)]
#[command(name = "swagger-spec-validator", version, about)]
struct Cli {
    /// Spec file to validate (.json, .yaml or .yml)
    spec_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Maximum spec size in bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ValidatorConfig::default();
    if let Some(max_size) = cli.max_size {
        config.max_document_size = max_size;
    }

    let validator = SpecValidator::with_config(config);
    let mut stdout = std::io::stdout().lock();
    match validator.validate_spec_file(&cli.spec_file, &mut stdout) {
        Ok(outcome) => tracing::debug!(?outcome, "done"),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}
