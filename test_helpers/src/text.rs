//! Shared text normalization helpers for behavioural test suites.

use anyhow::{Result, bail};

/// Strips one layer of matching double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Reverses PO string escaping (`\\`, `\"`, `\n`, `\r`, `\t`).
///
/// # Errors
///
/// Returns an error for a trailing lone backslash or an unknown escape.
pub fn unescape_po(value: &str) -> Result<String> {
    unescape(value, |ch| match ch {
        '\\' => Some('\\'),
        '"' => Some('"'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    })
}

/// Reverses PHP double-quoted string escaping (`\\`, `\"`, `\$`, `\n`,
/// `\r`, `\t`).
///
/// # Errors
///
/// Returns an error for a trailing lone backslash or an unknown escape.
pub fn unescape_php(value: &str) -> Result<String> {
    unescape(value, |ch| match ch {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '$' => Some('$'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    })
}

fn unescape(value: &str, decode: impl Fn(char) -> Option<char>) -> Result<String> {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        let Some(escaped) = chars.next() else {
            bail!("dangling backslash in {value:?}");
        };
        let Some(decoded) = decode(escaped) else {
            bail!("unsupported escape \\{escaped} in {value:?}");
        };
        result.push(decoded);
    }
    Ok(result)
}
