//! Binary entrypoint: read raw log text from stdin, write one JSON document to stdout.
//!
//! The output is either:
//! - A ParsedLogResult (exit status 0)
//! - An ErrorOutput (exit status 1) when the input is rejected at the boundary
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only JSON.

use std::io::{self, Write};

use log_engine::input::read_bounded;
use log_engine::types::ErrorOutput;
use log_engine::{parse_logs, Config, EngineError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    error!(error = %e, "log-engine failed");
    let mut out = ErrorOutput::new(e.to_string());
    if let Some(field) = e.field() {
      out = out.with_field(field);
    }
    let mut stdout = io::stdout().lock();
    let _ = serde_json::to_writer(&mut stdout, &out);
    let _ = writeln!(stdout);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let config = Config::from_env()?;
  let raw = read_bounded(io::stdin().lock(), config.max_input_bytes)?;

  let result = parse_logs(&raw)?;
  info!(
    entries = result.entries.len(),
    parse_errors = result.parse_errors.len(),
    services = result.services.len(),
    "normalized log input"
  );

  let mut out = io::BufWriter::new(io::stdout().lock());
  if config.pretty {
    serde_json::to_writer_pretty(&mut out, &result)?;
  } else {
    serde_json::to_writer(&mut out, &result)?;
  }
  writeln!(out)?;
  out.flush()?;
  Ok(())
}
