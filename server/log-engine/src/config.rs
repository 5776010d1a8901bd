//! Binary configuration with sane defaults.
//!
//! The parse function itself takes no options; these settings only shape the
//! stdin/stdout boundary.

use crate::error::EngineError;

pub const ENV_MAX_INPUT_BYTES: &str = "LOG_ENGINE_MAX_INPUT_BYTES";
pub const ENV_PRETTY: &str = "LOG_ENGINE_PRETTY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Largest raw input accepted from stdin. Matches the enclosing service's
  /// request-body cap.
  pub max_input_bytes: usize,
  /// Pretty-print the output document.
  pub pretty: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      max_input_bytes: 5 * 1024 * 1024,
      pretty: false,
    }
  }
}

impl Config {
  /// Defaults overridden by `LOG_ENGINE_*` environment variables.
  pub fn from_env() -> Result<Self, EngineError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(v) = lookup(ENV_MAX_INPUT_BYTES) {
      config.max_input_bytes = v
        .trim()
        .parse()
        .map_err(|_| EngineError::config(ENV_MAX_INPUT_BYTES, "expected a byte count"))?;
    }

    if let Some(v) = lookup(ENV_PRETTY) {
      config.pretty = match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "0" | "false" | "no" | "" => false,
        _ => return Err(EngineError::config(ENV_PRETTY, "expected a boolean")),
      };
    }

    Ok(config)
  }
}
