//! Normalize one input line into a canonical LogEntry, or a ParseError.

use tracing::{debug, trace};

use crate::json;
use crate::patterns;
use crate::types::*;

/// Outcome for one non-blank line: exactly one of entry or error.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
  Entry(LogEntry),
  Error(ParseError),
}

/// Run the matchers for one line: structural patterns first, then the JSON
/// fallback. A line neither accepts is recorded as unrecognized.
pub fn normalize_line(line_number: usize, raw: &str) -> LineOutcome {
  if let Some(f) = patterns::match_structural(raw) {
    trace!(line = line_number, matcher = f.matcher, "structural match");
    return LineOutcome::Entry(LogEntry {
      timestamp: f.timestamp.to_string(),
      severity: f.severity,
      service: f.service.to_string(),
      message: f.message.to_string(),
      raw: raw.to_string(),
      line_number,
      trace_id: None,
      span_id: None,
      metadata: None,
    });
  }

  if let Some(f) = json::match_json(raw) {
    trace!(line = line_number, matcher = "json", "json match");
    if let Some(level) = &f.clamped_level {
      debug!(line = line_number, level = %level, "unknown severity clamped to info");
    }
    return LineOutcome::Entry(LogEntry {
      timestamp: f.timestamp,
      severity: f.severity,
      service: f.service,
      message: f.message,
      raw: raw.to_string(),
      line_number,
      trace_id: f.trace_id,
      span_id: f.span_id,
      metadata: f.metadata,
    });
  }

  debug!(line = line_number, "unrecognized log line");
  LineOutcome::Error(ParseError::unrecognized(line_number, raw))
}
