//! Core types for the log engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Severity enum (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Debug,
  Info,
  Warn,
  Error,
  Fatal,
}

impl Severity {
  pub const ALL: [Severity; 5] = [
    Self::Debug,
    Self::Info,
    Self::Warn,
    Self::Error,
    Self::Fatal,
  ];

  /// Look up a raw severity token, case-insensitively.
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "debug" => Some(Self::Debug),
      "info" => Some(Self::Info),
      "warn" | "warning" => Some(Self::Warn),
      "error" => Some(Self::Error),
      "fatal" | "crit" => Some(Self::Fatal),
      _ => None,
    }
  }

  /// Like [`Severity::from_str_loose`], but unknown tokens clamp to `Info`
  /// so the closed enumeration holds end-to-end.
  pub fn canonicalize(s: &str) -> Self {
    Self::from_str_loose(s).unwrap_or(Self::Info)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
      Self::Fatal => "fatal",
    }
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Per-line outcomes
// ---------------------------------------------------------------------------

/// One normalized log record, derived from exactly one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
  /// Verbatim from the source; empty when the line carries none.
  pub timestamp: String,
  pub severity: Severity,
  pub service: String,
  pub message: String,
  /// The exact source line, byte-for-byte.
  pub raw: String,
  /// 1-based position in the unfiltered input.
  pub line_number: usize,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trace_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub span_id: Option<String>,
  /// Top-level JSON keys not consumed by any field mapping.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<Map<String, Value>>,
}

pub const UNRECOGNIZED_FORMAT: &str = "Unrecognized format";

/// One input line that no matcher accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
  pub line: usize,
  pub raw: String,
  pub error: String,
}

impl ParseError {
  pub fn unrecognized(line: usize, raw: &str) -> Self {
    Self {
      line,
      raw: raw.to_string(),
      error: UNRECOGNIZED_FORMAT.to_string(),
    }
  }
}

// ---------------------------------------------------------------------------
// Corpus aggregates
// ---------------------------------------------------------------------------

/// Severity histogram. One field per canonical severity, so all five keys are
/// always present on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
  pub debug: u64,
  pub info: u64,
  pub warn: u64,
  pub error: u64,
  pub fatal: u64,
}

impl SeverityCounts {
  fn slot(&mut self, severity: Severity) -> &mut u64 {
    match severity {
      Severity::Debug => &mut self.debug,
      Severity::Info => &mut self.info,
      Severity::Warn => &mut self.warn,
      Severity::Error => &mut self.error,
      Severity::Fatal => &mut self.fatal,
    }
  }

  pub fn increment(&mut self, severity: Severity) {
    *self.slot(severity) += 1;
  }

  pub fn get(&self, severity: Severity) -> u64 {
    match severity {
      Severity::Debug => self.debug,
      Severity::Info => self.info,
      Severity::Warn => self.warn,
      Severity::Error => self.error,
      Severity::Fatal => self.fatal,
    }
  }

  pub fn total(&self) -> u64 {
    Severity::ALL.iter().map(|&s| self.get(s)).sum()
  }

  pub fn merge(&mut self, other: &SeverityCounts) {
    for s in Severity::ALL {
      *self.slot(s) += other.get(s);
    }
  }
}

/// Earliest and latest timestamp observed; both empty when none were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
  pub start: String,
  pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  Json,
  Structured,
  Plaintext,
  Unknown,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// The full result of one parse call. Field names are a wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLogResult {
  pub entries: Vec<LogEntry>,
  pub services: Vec<String>,
  pub time_range: TimeRange,
  pub severity_counts: SeverityCounts,
  pub format: LogFormat,
  pub parse_errors: Vec<ParseError>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
