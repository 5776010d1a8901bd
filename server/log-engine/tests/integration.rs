//! Integration tests for the log engine.

use log_engine::{parse_logs, EngineError, LogFormat, Severity};
use pretty_assertions::assert_eq;
use serde_json::json;

const BRACKETED: &str = "2025-01-15T14:23:01.003Z ERROR [payment-service] Stripe timeout after 30s";
const JSON_LINE: &str =
  r#"{"level":"warn","service":"auth","msg":"retry exhausted","time":"2025-01-15T14:23:05Z"}"#;
const GARBAGE: &str = "not a log line at all";

fn fixture_incident() -> String {
  [
    "2025-01-15T14:23:01.003Z INFO [api-gateway] POST /checkout 200 in 41ms",
    "2025-01-15T14:23:01.120Z WARN [payment-service] Stripe latency 4200ms",
    "",
    "2025-01-15T14:23:02.500Z ERROR payment-service Stripe timeout after 30s",
    r#"{"timestamp":"2025-01-15T14:23:03.000Z","level":"error","logger":"auth-service","message":"retry storm detected","trace_id":"abc123","attempt":5}"#,
    "Jan 15 14:23:04 api-gateway WARNING entering degraded mode",
    "   ",
    "panic: runtime error: invalid memory address",
    "2025-01-15T14:23:05.000Z FATAL [auth-service] connection pool exhausted",
    "",
  ]
  .join("\n")
}

#[test]
fn bracketed_line_example() {
  let result = parse_logs(BRACKETED).unwrap();
  assert_eq!(result.entries.len(), 1);
  let e = &result.entries[0];
  assert_eq!(e.severity, Severity::Error);
  assert_eq!(e.service, "payment-service");
  assert_eq!(e.timestamp, "2025-01-15T14:23:01.003Z");
  assert_eq!(e.message, "Stripe timeout after 30s");
  assert_eq!(e.raw, BRACKETED);
  assert_eq!(e.line_number, 1);
}

#[test]
fn json_line_example() {
  let result = parse_logs(JSON_LINE).unwrap();
  assert_eq!(result.entries.len(), 1);
  let e = &result.entries[0];
  assert_eq!(e.severity, Severity::Warn);
  assert_eq!(e.service, "auth");
  assert_eq!(e.message, "retry exhausted");
  assert_eq!(e.timestamp, "2025-01-15T14:23:05Z");
}

#[test]
fn garbage_line_example() {
  let result = parse_logs(GARBAGE).unwrap();
  assert!(result.entries.is_empty());
  assert_eq!(result.parse_errors.len(), 1);
  assert_eq!(result.parse_errors[0].line, 1);
  assert_eq!(result.parse_errors[0].raw, GARBAGE);
  assert_eq!(result.parse_errors[0].error, "Unrecognized format");
  assert_eq!(result.format, LogFormat::Unknown);
}

#[test]
fn mixed_input_example() {
  let raw = [BRACKETED, JSON_LINE, GARBAGE].join("\n");
  let result = parse_logs(&raw).unwrap();

  assert_eq!(result.entries.len(), 2);
  assert_eq!(result.parse_errors.len(), 1);
  assert_eq!(result.parse_errors[0].line, 3);
  assert!(result.services.contains(&"payment-service".to_string()));
  assert!(result.services.contains(&"auth".to_string()));
  assert_eq!(result.time_range.start, "2025-01-15T14:23:01.003Z");
  assert_eq!(result.time_range.end, "2025-01-15T14:23:05Z");
  assert_eq!(result.format, LogFormat::Structured);
}

#[test]
fn incident_fixture_end_to_end() {
  let raw = fixture_incident();
  let result = parse_logs(&raw).unwrap();

  let lines: Vec<usize> = result.entries.iter().map(|e| e.line_number).collect();
  assert_eq!(lines, vec![1, 2, 4, 5, 6, 9]);
  assert_eq!(result.parse_errors.len(), 1);
  assert_eq!(result.parse_errors[0].line, 8);

  assert_eq!(
    result.services,
    vec![
      "api-gateway".to_string(),
      "payment-service".to_string(),
      "auth-service".to_string(),
    ]
  );

  let counts = result.severity_counts;
  assert_eq!(
    (counts.debug, counts.info, counts.warn, counts.error, counts.fatal),
    (0, 1, 2, 2, 1)
  );

  // The syslog timestamp cannot be placed in time, so the range falls back to
  // lexicographic order over every timestamp.
  assert_eq!(result.time_range.start, "2025-01-15T14:23:01.003Z");
  assert_eq!(result.time_range.end, "Jan 15 14:23:04");

  let json_entry = &result.entries[3];
  assert_eq!(json_entry.service, "auth-service");
  assert_eq!(json_entry.trace_id.as_deref(), Some("abc123"));
  assert_eq!(json_entry.metadata.as_ref().unwrap()["attempt"], json!(5));

  let syslog_entry = &result.entries[4];
  assert_eq!(syslog_entry.severity, Severity::Warn);
  assert_eq!(syslog_entry.message, "entering degraded mode");
}

#[test]
fn wire_contract_field_names() {
  let raw = [BRACKETED, GARBAGE].join("\n");
  let value = serde_json::to_value(parse_logs(&raw).unwrap()).unwrap();

  let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
  keys.sort_unstable();
  assert_eq!(
    keys,
    vec!["entries", "format", "parseErrors", "services", "severityCounts", "timeRange"]
  );

  assert_eq!(
    value["entries"][0],
    json!({
      "timestamp": "2025-01-15T14:23:01.003Z",
      "severity": "error",
      "service": "payment-service",
      "message": "Stripe timeout after 30s",
      "raw": BRACKETED,
      "lineNumber": 1,
    })
  );
  assert_eq!(
    value["severityCounts"],
    json!({"debug": 0, "info": 0, "warn": 0, "error": 1, "fatal": 0})
  );
  assert_eq!(
    value["timeRange"],
    json!({"start": "2025-01-15T14:23:01.003Z", "end": "2025-01-15T14:23:01.003Z"})
  );
  assert_eq!(value["format"], "structured");
  assert_eq!(
    value["parseErrors"],
    json!([{"line": 2, "raw": GARBAGE, "error": "Unrecognized format"}])
  );
}

#[test]
fn crlf_input_keeps_raw_and_strips_message() {
  let raw = "2025-01-15T14:23:01Z INFO [api] started\r\nJan 15 14:23:02 db CRIT disk full\r\n";
  let result = parse_logs(raw).unwrap();
  assert_eq!(result.entries.len(), 2);
  assert_eq!(result.entries[0].raw, "2025-01-15T14:23:01Z INFO [api] started\r");
  assert_eq!(result.entries[0].message, "started");
  assert_eq!(result.entries[1].severity, Severity::Fatal);
  assert_eq!(result.entries[1].message, "disk full");
}

#[test]
fn blank_input_is_rejected() {
  let err = parse_logs("\n\n   \n").unwrap_err();
  assert!(matches!(err, EngineError::EmptyInput));
  assert_eq!(err.field(), Some("rawLogs"));
}

#[test]
fn deterministic_output_across_runs() {
  let raw = fixture_incident();
  let json1 = serde_json::to_string(&parse_logs(&raw).unwrap()).unwrap();
  let json2 = serde_json::to_string(&parse_logs(&raw).unwrap()).unwrap();
  assert_eq!(json1, json2, "Same inputs must produce identical JSON output");
}

#[test]
fn result_round_trips_through_json() {
  let result = parse_logs(&fixture_incident()).unwrap();
  let json = serde_json::to_string(&result).unwrap();
  let back: log_engine::ParsedLogResult = serde_json::from_str(&json).unwrap();
  assert_eq!(back, result);
}
