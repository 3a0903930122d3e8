//! Failure kinds surfaced by [`validate`](crate::validate).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the checker or reading its output.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A file to validate does not exist. Raised before any process is launched.
    #[error("Missing HTML file to test: {}", path.display())]
    MissingInput { path: PathBuf },

    /// The runtime or the checker artifact could not be run.
    #[error("Unable to run the HTML checker, are you sure Java and vnu.jar are properly installed? {reason}")]
    MissingRuntimeOrTool { reason: String },

    /// A non-blank line on the diagnostic stream could not be parsed.
    #[error("Malformed diagnostic line ({reason}): {line}")]
    MalformedDiagnostic { line: String, reason: String },
}

impl ValidatorError {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    pub fn missing_runtime_or_tool(reason: impl Into<String>) -> Self {
        Self::MissingRuntimeOrTool {
            reason: reason.into(),
        }
    }

    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDiagnostic {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for validator operations
pub type ValidatorResult<T> = Result<T, ValidatorError>;
