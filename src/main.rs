//! # html-validator
//!
//! `html-validator` checks HTML files offline by running the v.Nu checker
//! (`vnu.jar`) and printing what it finds, one finding per line.
//!
//! ## Quick Start
//! ```sh
//! html-validator --jar /opt/vnu/vnu.jar index.html about.html
//! ```
//!
//! Exits with 0 when the files are clean, 1 when findings were reported and
//! 2 when the checker could not be run.

use html_validator::{Cli, Diagnostic, Validator, ValidatorError};
use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

const EXIT_FINDINGS: i32 = 1;
const EXIT_FAILURE: i32 = 2;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let validator = Validator::new(cli.config());
    let diagnostics = match validator.validate(&cli.files, cli.verbose) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ValidatorError::MissingRuntimeOrTool { .. } = e {
                eprintln!("Hint: pass --java and --jar, or set HTML_VALIDATOR_JAVA and HTML_VALIDATOR_VNU_JAR.");
            }
            exit(EXIT_FAILURE);
        }
    };

    if cli.json {
        print_json(&diagnostics)?;
    } else {
        print_plain(&diagnostics);
    }

    if !diagnostics.is_empty() {
        exit(EXIT_FINDINGS);
    }
    Ok(())
}

fn print_plain(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!("{}", diagnostic);
    }
}

#[cfg(feature = "uses_serde")]
fn print_json(diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(diagnostics)?);
    Ok(())
}

#[cfg(not(feature = "uses_serde"))]
fn print_json(_diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    anyhow::bail!("--json needs the uses_serde feature")
}
