//! Corpus aggregation: service set, severity histogram, time range.
//!
//! Partial aggregates can be built over any split of the entries and merged;
//! the set and count outputs do not depend on merge order.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::{LogEntry, SeverityCounts, TimeRange};

/// Running aggregate over normalized entries.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
  /// Distinct services in first-seen order.
  services: Vec<String>,
  seen: HashSet<String>,
  severity_counts: SeverityCounts,
  /// Non-empty timestamps, pooled for the final min/max.
  timestamps: Vec<String>,
}

/// Final corpus statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
  pub services: Vec<String>,
  pub severity_counts: SeverityCounts,
  pub time_range: TimeRange,
}

impl Aggregate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, entry: &LogEntry) {
    self.add_service(&entry.service);
    self.severity_counts.increment(entry.severity);
    if !entry.timestamp.is_empty() {
      self.timestamps.push(entry.timestamp.clone());
    }
  }

  /// Fold another partial aggregate into this one.
  pub fn merge(&mut self, other: Aggregate) {
    for service in &other.services {
      self.add_service(service);
    }
    self.severity_counts.merge(&other.severity_counts);
    self.timestamps.extend(other.timestamps);
  }

  pub fn finish(self) -> CorpusStats {
    let time_range = time_range(self.timestamps.as_slice());
    CorpusStats {
      services: self.services,
      severity_counts: self.severity_counts,
      time_range,
    }
  }

  fn add_service(&mut self, service: &str) {
    if self.seen.insert(service.to_string()) {
      self.services.push(service.to_string());
    }
  }
}

/// Earliest and latest of the non-empty timestamps.
///
/// When every timestamp parses as an instant, they are compared
/// chronologically and the original strings are reported. Otherwise the
/// whole set is compared lexicographically.
pub fn time_range<S: AsRef<str>>(timestamps: &[S]) -> TimeRange {
  let stamps: Vec<&str> = timestamps
    .iter()
    .map(|s| s.as_ref())
    .filter(|s| !s.is_empty())
    .collect();

  let instants: Option<Vec<(DateTime<Utc>, &str)>> = stamps
    .iter()
    .map(|s| parse_instant(s).map(|t| (t, *s)))
    .collect();

  let bounds = match instants {
    Some(instants) => instants
      .iter()
      .min()
      .zip(instants.iter().max())
      .map(|(lo, hi)| (lo.1, hi.1)),
    None => stamps.iter().min().zip(stamps.iter().max()).map(|(lo, hi)| (*lo, *hi)),
  };

  match bounds {
    Some((start, end)) => TimeRange {
      start: start.to_string(),
      end: end.to_string(),
    },
    None => TimeRange::default(),
  }
}

/// RFC 3339, or a zone-less ISO-8601 date-time taken as UTC.
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
    .ok()
    .map(|naive| naive.and_utc())
}
