use std::path::Path;
use std::process::Output;

use tracing::{debug, info, warn};

use crate::e_command_builder::VnuCommandBuilder;
use crate::e_config::ValidatorConfig;
use crate::e_diagnostic::Diagnostic;
use crate::e_error::{ValidatorError, ValidatorResult};
use crate::e_parser::{has_location_prefix, parse_diagnostics};

/// How much of the raw output is echoed in verbose mode.
const OUTPUT_PREVIEW_CHARS: usize = 256;

/// Runs the checker over local files and collects its findings.
///
/// A `Validator` holds no state besides its configuration; each call to
/// [`validate`](Self::validate) launches and reaps exactly one process.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Validator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a single file.
    pub fn validate_file(
        &self,
        file: impl AsRef<Path>,
        verbose: bool,
    ) -> ValidatorResult<Vec<Diagnostic>> {
        self.validate([file], verbose)
    }

    /// Validate a list of files in one checker run.
    ///
    /// Every path is checked for existence first; the first missing one
    /// fails the call before anything is launched. Findings come back in the
    /// order the checker wrote them.
    pub fn validate<I, P>(&self, files: I, verbose: bool) -> ValidatorResult<Vec<Diagnostic>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files: Vec<P> = files.into_iter().collect();
        for file in &files {
            let path = file.as_ref();
            if !path.exists() {
                return Err(ValidatorError::missing_input(path));
            }
        }
        if files.is_empty() {
            debug!("No files to validate");
            return Ok(Vec::new());
        }

        let builder = VnuCommandBuilder::new(&self.config).with_files(&files);
        if verbose {
            info!("Execute command: {}", builder.display());
        } else {
            debug!("Execute command: {}", builder.display());
        }

        let output = self.run(builder)?;
        let errs = String::from_utf8_lossy(&output.stderr);
        if verbose {
            let out = String::from_utf8_lossy(&output.stdout);
            info!(
                "Command output: ({:?}, {:?})...",
                preview(&out),
                preview(&errs)
            );
        }

        check_launch(&output, &errs)?;

        let diagnostics = parse_diagnostics(&errs, verbose)?;
        if verbose {
            info!("Total errors found: {}", diagnostics.len());
        }
        Ok(diagnostics)
    }

    fn run(&self, builder: VnuCommandBuilder) -> ValidatorResult<Output> {
        if let Err(e) = which::which(&self.config.runtime) {
            let reason = format!("{}: {}", self.config.runtime.to_string_lossy(), e);
            warn!("Runtime not found: {}", reason);
            return Err(ValidatorError::missing_runtime_or_tool(reason));
        }

        // output() drains stdout and stderr and waits for the child.
        builder.build_command().output().map_err(|e| {
            let reason = format!("failed to execute command: {}", e);
            warn!("{}", reason);
            ValidatorError::missing_runtime_or_tool(reason)
        })
    }
}

/// Tells a failed launch apart from a run that merely found problems.
///
/// The checker exits unsuccessfully whenever it reports findings, so a bad
/// status alone means nothing. It does when nothing on stderr looks like a
/// diagnostic: either the stream is empty (the artifact is probably
/// missing) or it holds the runtime's own complaint.
fn check_launch(output: &Output, errs: &str) -> ValidatorResult<()> {
    if output.status.success() {
        return Ok(());
    }
    if errs.trim().is_empty() {
        let reason = format!(
            "couldn't get output ({}), maybe 'vnu.jar' is missing?",
            output.status
        );
        warn!("{}", reason);
        return Err(ValidatorError::missing_runtime_or_tool(reason));
    }
    if !errs.lines().any(has_location_prefix) {
        let reason = format!("{}: {}", output.status, errs.trim());
        warn!("Checker failed to start: {}", reason);
        return Err(ValidatorError::missing_runtime_or_tool(reason));
    }
    Ok(())
}

fn preview(text: &str) -> String {
    text.chars().take(OUTPUT_PREVIEW_CHARS).collect()
}
