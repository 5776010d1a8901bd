//! Structural matchers: fixed-grammar line layouts tried in priority order.
//!
//! The table is compiled once per process and never mutated. Order matters:
//! the bracketed layout is the most specific and must win over the
//! unbracketed one, and the syslog layout has the loosest timestamp grammar so
//! it goes last.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Severity;

/// Which capture group holds each field.
#[derive(Debug, Clone, Copy)]
struct Layout {
  timestamp: usize,
  severity: usize,
  service: usize,
  message: usize,
}

/// Fields extracted by a structural matcher, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredFields<'a> {
  /// Name of the matcher that accepted the line.
  pub matcher: &'static str,
  pub timestamp: &'a str,
  pub severity: Severity,
  pub service: &'a str,
  pub message: &'a str,
}

struct Matcher {
  name: &'static str,
  regex: Regex,
  layout: Layout,
}

// Case folding is scoped to the severity vocabulary and the `T`/`Z` date
// literals. Digit and word classes stay strictly ASCII.
const BRACKETED: &str =
  r"^([0-9]{4}-[0-9]{2}-[0-9]{2}[Tt][0-9:.]+[Zz]?)\s+((?i:DEBUG|INFO|WARN|ERROR|FATAL))\s+\[([^\]]+)\]\s+(.+)$";
const UNBRACKETED: &str =
  r"^([0-9]{4}-[0-9]{2}-[0-9]{2}[Tt][0-9:.]+[Zz]?)\s+((?i:DEBUG|INFO|WARN|ERROR|FATAL))\s+(\S+)\s+(.+)$";
const SYSLOG: &str =
  r"^([0-9A-Za-z_]{3}\s+[0-9]+\s+[0-9:]+)\s+(\S+)\s+((?i:DEBUG|INFO|WARN|WARNING|ERROR|FATAL|CRIT))\s+(.+)$";

const ISO_LAYOUT: Layout = Layout {
  timestamp: 1,
  severity: 2,
  service: 3,
  message: 4,
};

const SYSLOG_LAYOUT: Layout = Layout {
  timestamp: 1,
  service: 2,
  severity: 3,
  message: 4,
};

static MATCHERS: LazyLock<[Matcher; 3]> = LazyLock::new(|| {
  [
    matcher("bracketed", BRACKETED, ISO_LAYOUT),
    matcher("unbracketed", UNBRACKETED, ISO_LAYOUT),
    matcher("syslog", SYSLOG, SYSLOG_LAYOUT),
  ]
});

fn matcher(name: &'static str, pattern: &str, layout: Layout) -> Matcher {
  Matcher {
    name,
    // The patterns are compile-time constants; a failure here is a build defect.
    regex: Regex::new(pattern).expect("static log pattern must compile"),
    layout,
  }
}

/// Try every structural matcher in priority order; first match wins.
///
/// A single trailing `\r` is ignored so CRLF input yields clean messages.
pub fn match_structural(line: &str) -> Option<StructuredFields<'_>> {
  let line = line.strip_suffix('\r').unwrap_or(line);

  MATCHERS.iter().find_map(|m| {
    let caps = m.regex.captures(line)?;
    let group = |i: usize| caps.get(i).map_or("", |g| g.as_str());
    let layout = m.layout;

    Some(StructuredFields {
      matcher: m.name,
      timestamp: group(layout.timestamp),
      severity: Severity::canonicalize(group(layout.severity)),
      service: group(layout.service),
      message: group(layout.message),
    })
  })
}
