//! Gettext PO catalog rendering.
//!
//! Serialises [`Entry`] values into PO records. Records are rendered without
//! their location comment or separating blank line; the generator adds both
//! so record text stays independent of the entry's position.

pub mod escape;
mod header;
mod plural;

pub use header::{CatalogHeader, HEADER_WRAP_WIDTH};
pub use plural::PluralRule;

use crate::entry::Entry;

use self::escape::keyword_line;

/// Flag comment marking plural templates as PHP format strings.
pub const PHP_FORMAT_FLAG: &str = "#, php-format";

/// Renders the catalog record for `entry`.
///
/// Simple entries become a `msgid`/`msgstr` pair. Plural entries carry the
/// format flag, `msgid`, `msgid_plural`, and one `msgstr[N]` per category.
///
/// # Examples
///
/// ```
/// use po_fixtures::catalog::render_catalog;
/// use po_fixtures::entry::Entry;
///
/// let entry = Entry::Simple {
///     source: "hello".to_owned(),
///     translation: "привет".to_owned(),
/// };
/// assert_eq!(render_catalog(&entry), "msgid \"hello\"\nmsgstr \"привет\"");
/// ```
#[must_use]
pub fn render_catalog(entry: &Entry) -> String {
    match entry {
        Entry::Simple {
            source,
            translation,
        } => format!(
            "{}\n{}",
            keyword_line("msgid", source),
            keyword_line("msgstr", translation)
        ),
        Entry::Plural {
            singular,
            plural,
            translations,
            ..
        } => {
            let mut lines = vec![
                PHP_FORMAT_FLAG.to_owned(),
                keyword_line("msgid", singular),
                keyword_line("msgid_plural", plural),
            ];
            lines.extend(
                translations
                    .iter()
                    .enumerate()
                    .map(|(index, text)| keyword_line(&format!("msgstr[{index}]"), text)),
            );
            lines.join("\n")
        }
    }
}

/// Renders a `#: file:line` location comment.
#[must_use]
pub fn render_location(file: &str, line: usize) -> String {
    format!("#: {file}:{line}")
}
