//! Text Importer
//!
//! Reads `key=value` lines (the `mkenvimage` input format) into a mapping.
//! Empty lines and lines starting with `#` are ignored. There is no quoting
//! or escaping: everything after the first `=` is the value.

use std::io::BufRead;

use crate::error::{EnvError, Result};
use crate::layout::EnvMap;

/// Parse one line of import text
///
/// Returns:
/// - `Ok(None)` — blank line or comment
/// - `Ok(Some((key, value)))` — an assignment
/// - `Err(InvalidLine)` — no `=` in the line, or nothing before it
pub fn parse_line(line: &str) -> Result<Option<(&str, &str)>> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match line.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(Some((key, value))),
        _ => Err(EnvError::InvalidLine(line.to_string())),
    }
}

/// Import every line of `reader` into `map`, overwriting existing keys
///
/// Stops at the first invalid line or read error. Lines applied before the
/// failure stay in `map`. Returns the number of assignments applied.
pub fn import_into<R: BufRead>(map: &mut EnvMap, reader: R) -> Result<usize> {
    let mut applied = 0;

    for line in reader.lines() {
        let line = line?;
        if let Some((key, value)) = parse_line(&line)? {
            map.insert(key.to_string(), value.to_string());
            applied += 1;
        }
    }

    Ok(applied)
}
