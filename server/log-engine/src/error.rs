//! Structured error types for the log engine.
//!
//! These cover boundary failures only. A line that no matcher accepts is not an
//! error here; it becomes a [`crate::types::ParseError`] inside the result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("rawLogs required")]
  EmptyInput,

  #[error("input too large: exceeds limit of {limit} bytes")]
  InputTooLarge { limit: usize },

  #[error("config: {key}: {reason}")]
  Config { key: String, reason: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn config(key: &str, reason: &str) -> Self {
    Self::Config {
      key: key.to_string(),
      reason: reason.to_string(),
    }
  }

  /// The caller-facing input field this error is about, if any.
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::EmptyInput | Self::InputTooLarge { .. } => Some("rawLogs"),
      _ => None,
    }
  }
}
