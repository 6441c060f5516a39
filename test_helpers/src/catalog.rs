//! Parser for generated PO catalogs.

use anyhow::{Context, Result, bail, ensure};

use crate::text::{unescape_po, unquote};

/// One record of a generated catalog, with strings unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Text after `#: `, for example `words.php:2`.
    pub location: String,
    /// Flag comments such as `php-format`.
    pub flags: Vec<String>,
    /// The `msgid` value.
    pub msgid: String,
    /// The `msgid_plural` value, when present.
    pub msgid_plural: Option<String>,
    /// `msgstr` values in order; plural records carry one per category.
    pub msgstr: Vec<String>,
    /// Indices parsed from `msgstr[N]` keywords.
    pub msgstr_indices: Vec<usize>,
    /// Number of lines in the record, including the location comment.
    pub line_count: usize,
}

impl CatalogRecord {
    /// Line number of the location comment.
    ///
    /// # Errors
    ///
    /// Returns an error when the location has no numeric `:line` suffix.
    pub fn location_line(&self) -> Result<usize> {
        let (_, line) = self
            .location
            .rsplit_once(':')
            .with_context(|| format!("location without line: {}", self.location))?;
        line.parse()
            .with_context(|| format!("invalid location line: {}", self.location))
    }

    /// Untranslated strings in declaration order.
    #[must_use]
    pub fn source_strings(&self) -> Vec<&str> {
        std::iter::once(self.msgid.as_str())
            .chain(self.msgid_plural.as_deref())
            .collect()
    }
}

/// Parsed catalog: the raw header block and the records that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// Header block without its trailing blank line.
    pub header: String,
    /// Entry records in file order.
    pub records: Vec<CatalogRecord>,
}

/// Splits a catalog into its header and blank-line separated records.
///
/// # Errors
///
/// Returns an error when the header is missing or a record is malformed.
pub fn parse_catalog(text: &str) -> Result<ParsedCatalog> {
    let mut blocks = text.split("\n\n").filter(|block| !block.is_empty());
    let header = blocks.next().context("catalog is empty")?;
    ensure!(
        header.starts_with("msgid \"\"\nmsgstr \"\""),
        "catalog does not start with a header entry"
    );
    let records = blocks
        .enumerate()
        .map(|(index, block)| {
            parse_record(block).with_context(|| format!("record {index} is malformed"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ParsedCatalog {
        header: header.to_owned(),
        records,
    })
}

/// Joins the quoted continuation lines of the header into a single string.
///
/// # Errors
///
/// Returns an error when a header line contains an invalid escape.
pub fn header_text(header: &str) -> Result<String> {
    header
        .lines()
        .skip(2)
        .map(|line| unescape_po(unquote(line)))
        .collect()
}

fn parse_record(block: &str) -> Result<CatalogRecord> {
    let mut location = None;
    let mut flags = Vec::new();
    let mut msgid = None;
    let mut msgid_plural = None;
    let mut msgstr = Vec::new();
    let mut msgstr_indices = Vec::new();
    let mut line_count = 0;

    for line in block.lines() {
        line_count += 1;
        if let Some(rest) = line.strip_prefix("#: ") {
            location = Some(rest.to_owned());
        } else if let Some(rest) = line.strip_prefix("#, ") {
            flags.push(rest.to_owned());
        } else if let Some(rest) = line.strip_prefix("msgid_plural ") {
            msgid_plural = Some(unescape_po(unquote(rest))?);
        } else if let Some(rest) = line.strip_prefix("msgid ") {
            msgid = Some(unescape_po(unquote(rest))?);
        } else if let Some(rest) = line.strip_prefix("msgstr[") {
            let (index, value) = rest
                .split_once("] ")
                .with_context(|| format!("malformed plural msgstr: {line}"))?;
            msgstr_indices.push(index.parse::<usize>()?);
            msgstr.push(unescape_po(unquote(value))?);
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            msgstr.push(unescape_po(unquote(rest))?);
        } else {
            bail!("unexpected catalog line: {line}");
        }
    }

    Ok(CatalogRecord {
        location: location.context("record lacks a location comment")?,
        flags,
        msgid: msgid.context("record lacks msgid")?,
        msgid_plural,
        msgstr,
        msgstr_indices,
        line_count,
    })
}
