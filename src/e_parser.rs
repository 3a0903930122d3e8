//! Parsing of the checker's diagnostic stream.
//!
//! Each line has the shape
//!
//! ```text
//! "file:/<path>":<line>.<col>-<endline>.<endcol>: <severity>: <message>
//! ```
//!
//! The message may contain colons and quotes of its own, so the line is
//! consumed left to right in stages and never split on every colon.

use tracing::{debug, info};

use crate::e_diagnostic::Diagnostic;
use crate::e_error::{ValidatorError, ValidatorResult};

/// Closes the quoted file URI at the start of a line.
const LOCATION_BOUNDARY: &str = "\":";
const FILE_SCHEME: &str = "file:/";
const TYPOGRAPHIC_QUOTES: [char; 4] = ['\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}'];

/// Replaces the stylized quotes the checker puts around element and
/// attribute names with plain `"`.
pub fn normalize_quotes(line: &str) -> String {
    line.replace(TYPOGRAPHIC_QUOTES, "\"")
}

/// Splits a normalized line into its quoted location prefix (closing quote
/// included) and everything after the boundary colon.
fn split_location(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('"') {
        return None;
    }
    let boundary = line.find(LOCATION_BOUNDARY)?;
    Some((&line[..=boundary], &line[boundary + LOCATION_BOUNDARY.len()..]))
}

fn source_path_of(location_prefix: &str) -> &str {
    let unquoted = location_prefix.trim_matches('"').trim();
    unquoted.strip_prefix(FILE_SCHEME).unwrap_or(unquoted)
}

/// Parses a single diagnostic line.
///
/// `raw_text` of the result is `line` as given; quote normalization only
/// affects the parsed fields.
pub fn parse_diagnostic(line: &str) -> ValidatorResult<Diagnostic> {
    let normalized = normalize_quotes(line);

    let (location_prefix, remainder) = split_location(&normalized)
        .ok_or_else(|| ValidatorError::malformed(line, "no quoted location prefix"))?;

    let source_path = source_path_of(location_prefix);
    if source_path.is_empty() {
        return Err(ValidatorError::malformed(line, "empty source path"));
    }

    let remainder = remainder.trim_matches(|c: char| c == ':' || c.is_whitespace());
    let mut parts = remainder.splitn(3, ':');
    let position = parts.next().unwrap_or_default();
    let severity = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidatorError::malformed(line, "missing severity"))?;
    let message = parts.next().unwrap_or_default().trim();

    let line_field = position.split('.').next().unwrap_or_default().trim();
    let line_number = line_field.parse::<usize>().map_err(|e| {
        ValidatorError::malformed(line, format!("bad line number {:?}: {}", line_field, e))
    })?;

    Ok(Diagnostic::new(
        severity.to_string(),
        source_path.to_string(),
        line_number,
        message.to_string(),
        line.to_string(),
    ))
}

/// Parses every non-blank line of a diagnostic stream, in order.
///
/// Stops at the first malformed line; nothing is dropped silently.
pub fn parse_diagnostics(stream: &str, verbose: bool) -> ValidatorResult<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    for line in stream.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if verbose {
            info!("Parse output line: {}", trimmed);
        } else {
            debug!("Parse output line: {}", trimmed);
        }
        diagnostics.push(parse_diagnostic(trimmed)?);
    }
    Ok(diagnostics)
}

/// Whether a line starts with something that looks like a location prefix.
pub(crate) fn has_location_prefix(line: &str) -> bool {
    split_location(&normalize_quotes(line.trim())).is_some()
}
