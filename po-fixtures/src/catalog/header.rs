//! Catalog header block.

use super::escape::escape_po;
use super::plural::PluralRule;

/// Maximum number of characters of a header field placed on one quoted line.
pub const HEADER_WRAP_WIDTH: usize = 73;

/// Metadata emitted in the catalog's leading `msgid ""` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    /// `Project-Id-Version` value.
    pub project_id_version: String,
    /// `POT-Creation-Date` value.
    pub pot_creation_date: String,
    /// `PO-Revision-Date` value.
    pub po_revision_date: String,
    /// `Last-Translator` value.
    pub last_translator: String,
    /// `Language-Team` value.
    pub language_team: String,
    /// `Language` value.
    pub language: String,
    /// Rule advertised in `Plural-Forms`.
    pub plural_rule: PluralRule,
}

impl Default for CatalogHeader {
    fn default() -> Self {
        Self {
            project_id_version: String::new(),
            pot_creation_date: "2016-01-25 20:56+0300".to_owned(),
            po_revision_date: "2016-01-26 01:00+0300".to_owned(),
            last_translator: String::new(),
            language_team: String::new(),
            language: "ru_RU".to_owned(),
            plural_rule: PluralRule,
        }
    }
}

impl CatalogHeader {
    /// Ordered `(key, value)` pairs of the header fields.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Project-Id-Version", self.project_id_version.clone()),
            ("POT-Creation-Date", self.pot_creation_date.clone()),
            ("PO-Revision-Date", self.po_revision_date.clone()),
            ("Last-Translator", self.last_translator.clone()),
            ("Language-Team", self.language_team.clone()),
            ("Language", self.language.clone()),
            ("MIME-Version", "1.0".to_owned()),
            ("Content-Type", "text/plain; charset=UTF-8".to_owned()),
            ("Content-Transfer-Encoding", "8bit".to_owned()),
            ("Plural-Forms", self.plural_rule.header_value()),
        ]
    }

    /// Renders the header block, including the trailing blank line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = String::from("msgid \"\"\nmsgstr \"\"\n");
        for (key, value) in self.fields() {
            push_field(&mut content, &format!("{key}: {value}"));
        }
        content.push('\n');
        content
    }
}

/// Appends one header field, hard-wrapped at [`HEADER_WRAP_WIDTH`] characters.
fn push_field(content: &mut String, field: &str) {
    let chars: Vec<char> = field.chars().collect();
    let mut chunks = chars.chunks(HEADER_WRAP_WIDTH).peekable();
    if chunks.peek().is_none() {
        content.push_str("\"\\n\"\n");
        return;
    }
    while let Some(chunk) = chunks.next() {
        let text: String = chunk.iter().collect();
        content.push('"');
        content.push_str(&escape_po(&text));
        if chunks.peek().is_none() {
            content.push_str("\\n");
        }
        content.push_str("\"\n");
    }
}
