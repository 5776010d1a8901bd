//! JSON-line fallback matcher.
//!
//! Tried only after every structural matcher has failed. The line must parse
//! as a JSON object; arrays, scalars and invalid JSON are no-match.

use serde_json::{Map, Value};

use crate::types::Severity;

const LEVEL_KEYS: &[&str] = &["level", "severity"];
const SERVICE_KEYS: &[&str] = &["service", "logger"];
const TIMESTAMP_KEYS: &[&str] = &["timestamp", "time", "@timestamp"];
const MESSAGE_KEYS: &[&str] = &["message", "msg"];
const TRACE_KEYS: &[&str] = &["traceId", "trace_id"];
const SPAN_KEYS: &[&str] = &["spanId", "span_id"];

pub const DEFAULT_SERVICE: &str = "unknown";

/// Fields extracted from a JSON log line.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonFields {
  pub timestamp: String,
  pub severity: Severity,
  /// Set when the raw level was present but not a known token and was
  /// clamped to `Info`.
  pub clamped_level: Option<String>,
  pub service: String,
  pub message: String,
  pub trace_id: Option<String>,
  pub span_id: Option<String>,
  pub metadata: Option<Map<String, Value>>,
}

/// Parse a line as a JSON object and map its fields.
pub fn match_json(line: &str) -> Option<JsonFields> {
  let value: Value = serde_json::from_str(line).ok()?;
  let obj = value.as_object()?;

  let raw_level = first_text(obj, LEVEL_KEYS);
  let (severity, clamped_level) = match raw_level {
    Some(level) => match Severity::from_str_loose(&level) {
      Some(s) => (s, None),
      None => (Severity::Info, Some(level)),
    },
    None => (Severity::Info, None),
  };

  let message = match first_text(obj, MESSAGE_KEYS) {
    Some(m) => m,
    // Re-serializing an object that was just parsed cannot fail.
    None => serde_json::to_string(obj).unwrap_or_default(),
  };

  Some(JsonFields {
    timestamp: first_text(obj, TIMESTAMP_KEYS).unwrap_or_default(),
    severity,
    clamped_level,
    service: first_text(obj, SERVICE_KEYS).unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
    message,
    trace_id: first_text(obj, TRACE_KEYS),
    span_id: first_text(obj, SPAN_KEYS),
    metadata: remaining_fields(obj),
  })
}

/// First key whose value is a non-empty string or a number.
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
  keys.iter().find_map(|key| match obj.get(*key)? {
    Value::String(s) if !s.is_empty() => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  })
}

/// Every top-level key not claimed by a field mapping; `None` if empty.
fn remaining_fields(obj: &Map<String, Value>) -> Option<Map<String, Value>> {
  let known = [
    LEVEL_KEYS,
    SERVICE_KEYS,
    TIMESTAMP_KEYS,
    MESSAGE_KEYS,
    TRACE_KEYS,
    SPAN_KEYS,
  ];

  let rest: Map<String, Value> = obj
    .iter()
    .filter(|(k, _)| !known.iter().any(|keys| keys.contains(&k.as_str())))
    .map(|(k, v)| (k.clone(), v.clone()))
    .collect();

  if rest.is_empty() {
    None
  } else {
    Some(rest)
  }
}
