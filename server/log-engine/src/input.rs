//! Bounded reading of raw log text at the process boundary.

use std::io::{self, Read};

use crate::error::EngineError;

/// Read all of `reader` as UTF-8, refusing more than `limit` bytes.
///
/// The size check runs before decoding, so oversize input is always
/// `InputTooLarge` even when the cut splits a multi-byte character.
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String, EngineError> {
  let mut bytes = Vec::new();
  let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
  reader.take(cap).read_to_end(&mut bytes)?;

  if bytes.len() > limit {
    return Err(EngineError::InputTooLarge { limit });
  }
  String::from_utf8(bytes)
    .map_err(|e| EngineError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
