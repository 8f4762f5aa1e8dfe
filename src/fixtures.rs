//! Phone-number fixtures used to drive the registry.
//!
//! Fixtures are plain data: a built-in list, or a delimited text file with
//! one value per line where only the first comma-separated column is used.

use crate::error::{FixtureError, FixtureResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Phone numbers used when no fixture file is configured.
pub const DEFAULT_PHONE_NUMBERS: [&str; 3] = ["0123456789", "0123456123", "0123456456"];

/// Parse fixture text into phone numbers.
///
/// Blank lines and lines starting with `#` are skipped. Values are trimmed;
/// a value wrapped in double quotes loses one layer of quotes, with `""`
/// inside it read as a literal quote, and may contain commas.
///
/// # Example
///
/// ```
/// use contact_registry::fixtures::parse_phone_numbers;
///
/// let numbers = parse_phone_numbers("0123456789\n\n# comment\n0123456123,home\n");
/// assert_eq!(numbers, vec!["0123456789", "0123456123"]);
/// ```
pub fn parse_phone_numbers(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(first_field)
        .filter(|value| !value.is_empty())
        .collect()
}

/// First comma-separated column of a trimmed line, unquoted.
///
/// A line with an unterminated opening quote is read as unquoted.
fn first_field(line: &str) -> String {
    line.strip_prefix('"')
        .and_then(closed_quote)
        .unwrap_or_else(|| line.split(',').next().unwrap_or_default().to_string())
        .trim()
        .to_string()
}

/// Text up to the closing quote, with `""` collapsed to `"`.
fn closed_quote(rest: &str) -> Option<String> {
    let mut value = String::new();
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek() == Some(&'"') => {
                value.push('"');
                chars.next();
            }
            '"' => return Some(value),
            c => value.push(c),
        }
    }

    None
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns `FixtureError::Io` if the file cannot be read and
/// `FixtureError::Empty` if it holds no phone numbers.
pub fn load_phone_numbers(path: impl AsRef<Path>) -> FixtureResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let numbers = parse_phone_numbers(&text);
    if numbers.is_empty() {
        return Err(FixtureError::Empty(path.to_path_buf()));
    }

    info!(path = %path.display(), count = numbers.len(), "Loaded phone number fixture");
    Ok(numbers)
}

/// The built-in phone numbers as owned strings.
pub fn default_phone_numbers() -> Vec<String> {
    DEFAULT_PHONE_NUMBERS.iter().map(|s| s.to_string()).collect()
}
