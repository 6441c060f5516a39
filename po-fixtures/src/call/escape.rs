//! PHP double-quoted string escaping.

/// Escapes text for inclusion in a double-quoted PHP string literal.
///
/// Backslashes, double quotes, and dollar signs are escaped so PHP neither
/// terminates the literal early nor interpolates variables. Line feeds,
/// carriage returns, and tabs become escape sequences so every call stays on
/// a single source line.
///
/// # Examples
///
/// ```
/// use po_fixtures::call::escape::escape_php;
///
/// assert_eq!(escape_php("plain %d"), "plain %d");
/// assert_eq!(escape_php("$total"), "\\$total");
/// assert_eq!(escape_php("a\nb"), "a\\nb");
/// ```
#[must_use]
pub fn escape_php(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '$' => result.push_str("\\$"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result
}
