//! Core engine: split, match each line, aggregate, assemble the result.

use tracing::debug;

use crate::aggregate::Aggregate;
use crate::error::EngineError;
use crate::normalize::{normalize_line, LineOutcome};
use crate::split::non_blank_lines;
use crate::types::*;

/// Parse raw multi-line log text into a [`ParsedLogResult`].
///
/// Every non-blank line yields exactly one entry or one parse error, in input
/// order. Returns `EngineError::EmptyInput` if the text has no non-blank line.
pub fn parse_logs(raw: &str) -> Result<ParsedLogResult, EngineError> {
  if raw.trim().is_empty() {
    return Err(EngineError::EmptyInput);
  }

  let mut entries = Vec::new();
  let mut parse_errors = Vec::new();
  let mut aggregate = Aggregate::new();

  for (line_number, line) in non_blank_lines(raw) {
    match normalize_line(line_number, line) {
      LineOutcome::Entry(entry) => {
        aggregate.record(&entry);
        entries.push(entry);
      }
      LineOutcome::Error(err) => parse_errors.push(err),
    }
  }

  let stats = aggregate.finish();
  let format = if entries.is_empty() {
    LogFormat::Unknown
  } else {
    LogFormat::Structured
  };

  debug!(
    entries = entries.len(),
    parse_errors = parse_errors.len(),
    services = stats.services.len(),
    "parsed log text"
  );

  Ok(ParsedLogResult {
    entries,
    services: stats.services,
    time_range: stats.time_range,
    severity_counts: stats.severity_counts,
    format,
    parse_errors,
  })
}
