//! # soundalike-input
//!
//! **Tier 1 (Input Parsing)**
//!
//! Parses line-delimited name lists into [`RawRecord`]s.
//!
//! Each significant line holds a name and an integer value separated by the
//! *last* delimiter on the line, so names may themselves contain the
//! delimiter (`"Smith, John",4` splits as `Smith, John` / `4`). Blank lines
//! and lines starting with `#` are skipped.
//!
//! Negative values are accepted here; rejecting them is the job of ingestion.

use std::path::Path;

use soundalike_types::RawRecord;
use thiserror::Error;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Errors produced while reading a name list. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing value (expected `name{delimiter}value`)")]
    MissingValue { line: usize, delimiter: char },

    #[error("line {line}: empty name")]
    EmptyName { line: usize },

    #[error("line {line}: value '{value}' is not an integer")]
    InvalidValue { line: usize, value: String },
}

/// Parse a name list held in memory.
pub fn parse_str(text: &str, delimiter: char) -> Result<Vec<RawRecord>, InputError> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(parse_line(trimmed, line, delimiter)?);
    }
    Ok(records)
}

/// Read and parse a name list from disk.
pub fn parse_file(path: &Path, delimiter: char) -> Result<Vec<RawRecord>, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text, delimiter)
}

fn parse_line(line_text: &str, line: usize, delimiter: char) -> Result<RawRecord, InputError> {
    let (name, value) = line_text
        .rsplit_once(delimiter)
        .ok_or(InputError::MissingValue { line, delimiter })?;

    let name = unquote(name.trim());
    if name.is_empty() {
        return Err(InputError::EmptyName { line });
    }

    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::MissingValue { line, delimiter });
    }
    let value: i64 = value.parse().map_err(|_| InputError::InvalidValue {
        line,
        value: value.to_string(),
    })?;

    Ok(RawRecord::new(name, value))
}

/// Strip one pair of surrounding double quotes.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}
