//! Companion PHP source rendering.
//!
//! The companion file wraps one translation call per entry in a single
//! function so a benchmark can `require` it and time the calls.

pub mod escape;

use crate::entry::Entry;

use self::escape::escape_php;

/// Opening lines of the companion file.
pub const PREAMBLE: &str = "<?php\nfunction doTest(){\n";

/// Closing line of the companion file.
pub const CLOSING: &str = "}\n";

/// Number of lines written by [`PREAMBLE`].
pub const PREAMBLE_LINES: usize = 2;

/// Name of the single-string translation function.
pub const SIMPLE_CALL: &str = "__";

/// Name of the plural-aware translation function.
pub const PLURAL_CALL: &str = "_n";

/// Renders the call statement for `entry`, tab-indented and without a
/// trailing newline.
///
/// # Examples
///
/// ```
/// use po_fixtures::call::render_call;
/// use po_fixtures::entry::Entry;
///
/// let entry = Entry::Simple {
///     source: "hello".to_owned(),
///     translation: "привет".to_owned(),
/// };
/// assert_eq!(render_call(&entry), "\t__(\"hello\");");
/// ```
#[must_use]
pub fn render_call(entry: &Entry) -> String {
    match entry {
        Entry::Simple { source, .. } => {
            format!("\t{SIMPLE_CALL}(\"{}\");", escape_php(source))
        }
        Entry::Plural {
            singular,
            plural,
            count,
            ..
        } => format!(
            "\t{PLURAL_CALL}(\"{}\", \"{}\", {count});",
            escape_php(singular),
            escape_php(plural)
        ),
    }
}
