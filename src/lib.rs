#![doc = include_str!("../README.md")]

pub mod e_cli;
pub use e_cli::Cli;
pub mod e_command_builder;
pub use e_command_builder::VnuCommandBuilder;
pub mod e_config;
pub use e_config::ValidatorConfig;
pub mod e_diagnostic;
pub use e_diagnostic::Diagnostic;
pub mod e_error;
pub use e_error::{ValidatorError, ValidatorResult};
pub mod e_parser;
pub use e_parser::{parse_diagnostic, parse_diagnostics};
pub mod e_runner;
pub use e_runner::Validator;

use std::path::Path;

/// Validate one or more HTML files with the default configuration
/// (see [`ValidatorConfig::from_env`]).
///
/// Returns every finding the checker reported, in the order it reported
/// them. An empty vector means the files are clean.
pub fn validate<I, P>(files: I, verbose: bool) -> ValidatorResult<Vec<Diagnostic>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Validator::new(ValidatorConfig::from_env()).validate(files, verbose)
}
