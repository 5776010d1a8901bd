//! Split raw text into non-blank lines, keeping original line numbers.

/// Yield `(line_number, line)` for every line that is not empty or all
/// whitespace. Line numbers are 1-based positions in the unfiltered input, so
/// blank lines consume a number without producing output.
///
/// Splits on `\n` only; a trailing `\r` stays part of the line.
pub fn non_blank_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
  raw
    .split('\n')
    .enumerate()
    .filter(|(_, line)| !line.trim().is_empty())
    .map(|(idx, line)| (idx + 1, line))
}
