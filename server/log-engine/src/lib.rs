//! PushLog Log Engine — deterministic log ingestion and normalization.
//!
//! Accepts raw multi-line log text in any of the supported shapes (bracketed
//! and unbracketed "ISO SEVERITY service message" lines, syslog-style lines,
//! JSON lines), normalizes each line into a typed [`LogEntry`], and folds the
//! entries into corpus statistics.
//!
//! No AI, no DB, no network; pure computation, no state across calls.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod json;
pub mod normalize;
pub mod patterns;
pub mod split;
pub mod types;

pub use config::Config;
pub use engine::parse_logs;
pub use error::EngineError;
pub use types::{LogEntry, LogFormat, ParseError, ParsedLogResult, Severity, SeverityCounts, TimeRange};
