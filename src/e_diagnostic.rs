use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::e_error::ValidatorError;
use crate::e_parser::parse_diagnostic;

/// One finding reported by the checker.
///
/// A `Diagnostic` is built once from a single line of the checker's
/// diagnostic stream and never changes afterwards. Two diagnostics compare
/// equal only when they came from the same text, so findings with identical
/// parsed fields on different lines stay distinguishable.
///
/// ```
/// use html_validator::Diagnostic;
///
/// let line = r#""file:/home/x/test.html":16.5-16.9: error: Unclosed element "div"."#;
/// let diag: Diagnostic = line.parse().unwrap();
/// assert_eq!(diag.source_path(), "home/x/test.html");
/// assert_eq!(diag.line_number(), 16);
/// assert_eq!(diag.severity(), "error");
/// assert_eq!(diag.message(), r#"Unclosed element "div"."#);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "uses_serde", derive(serde::Serialize))]
pub struct Diagnostic {
    severity: String,
    source_path: String,
    line_number: usize,
    message: String,
    raw_text: String,
}

impl Diagnostic {
    pub(crate) fn new(
        severity: String,
        source_path: String,
        line_number: usize,
        message: String,
        raw_text: String,
    ) -> Self {
        Diagnostic {
            severity,
            source_path,
            line_number,
            message,
            raw_text,
        }
    }

    /// Classification label as emitted by the checker ("error", "info warning", ...).
    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// 1-based line within [`source_path`](Self::source_path).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The line this diagnostic was parsed from, unmodified.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }

    // v.Nu reports warnings as "info warning".
    pub fn is_warning(&self) -> bool {
        self.severity.split_whitespace().any(|word| word == "warning")
    }

    pub fn is_info(&self) -> bool {
        self.severity == "info"
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.raw_text == other.raw_text
    }
}

impl Eq for Diagnostic {}

impl Hash for Diagnostic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_text.hash(state);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationError({}, {}, {}, {})",
            self.severity, self.source_path, self.line_number, self.message
        )
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationError({})", self.raw_text)
    }
}

impl FromStr for Diagnostic {
    type Err = ValidatorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_diagnostic(line)
    }
}
