//! PO string escaping and quoting utilities.
//!
//! Provides functions for escaping text so it can sit inside a double-quoted
//! PO string literal.

/// Escapes text for inclusion in a double-quoted PO string.
///
/// Handles:
/// - Backslashes: `\` -> `\\`
/// - Double quotes: `"` -> `\"`
/// - Newlines: line feed -> `\n`
/// - Carriage returns: carriage return -> `\r`
/// - Tabs: tab -> `\t`
///
/// # Examples
///
/// ```
/// use po_fixtures::catalog::escape::escape_po;
///
/// assert_eq!(escape_po("plain"), "plain");
/// assert_eq!(escape_po("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape_po("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn escape_po(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result
}

/// Formats a PO keyword line such as `msgid "text"`.
///
/// # Examples
///
/// ```
/// use po_fixtures::catalog::escape::keyword_line;
///
/// assert_eq!(keyword_line("msgstr[1]", "x"), "msgstr[1] \"x\"");
/// ```
#[must_use]
pub fn keyword_line(keyword: &str, text: &str) -> String {
    format!("{keyword} \"{}\"", escape_po(text))
}
