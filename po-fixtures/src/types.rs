//! Configuration and result types for the fixture generator.

use camino::{Utf8Path, Utf8PathBuf};

use crate::alphabet::Alphabet;
use crate::catalog::PluralRule;
use crate::entry::EntryKind;
use crate::random::LengthBounds;

/// Default number of generated entries.
pub const DEFAULT_ENTRIES: usize = 100_000;

/// Default catalog file name.
pub const DEFAULT_CATALOG_NAME: &str = "ru_RU.po";

/// Default companion source file name.
pub const DEFAULT_CALLS_NAME: &str = "words.php";

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of entries to generate.
    pub entries: usize,
    /// Bounds on the sampled length of every random string.
    pub lengths: LengthBounds,
    /// Characters used for untranslated strings.
    pub source_alphabet: Alphabet,
    /// Characters used for translations.
    pub target_alphabet: Alphabet,
    /// Directory receiving both artefacts.
    pub out_dir: Utf8PathBuf,
    /// File name of the catalog, relative to `out_dir`.
    pub catalog_name: String,
    /// File name of the companion source file, relative to `out_dir`.
    pub calls_name: String,
}

impl GeneratorConfig {
    /// Full path of the catalog artefact.
    #[must_use]
    pub fn catalog_path(&self) -> Utf8PathBuf {
        self.out_dir.join(&self.catalog_name)
    }

    /// Full path of the companion source artefact.
    #[must_use]
    pub fn calls_path(&self) -> Utf8PathBuf {
        self.out_dir.join(&self.calls_name)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES,
            lengths: LengthBounds::default(),
            source_alphabet: Alphabet::english(),
            target_alphabet: Alphabet::russian(),
            out_dir: Utf8PathBuf::from("."),
            catalog_name: DEFAULT_CATALOG_NAME.to_owned(),
            calls_name: DEFAULT_CALLS_NAME.to_owned(),
        }
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of simple entries written.
    pub simple_entries: usize,
    /// Number of plural entries written.
    pub plural_entries: usize,
    /// Plural entries per category selected by their call count.
    pub plural_categories: [usize; PluralRule::NPLURALS],
    /// Paths of the artefacts written to disk.
    pub files: Vec<Utf8PathBuf>,
}

impl GenerationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one written entry of `kind`.
    pub const fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Simple => self.simple_entries += 1,
            EntryKind::Plural => self.plural_entries += 1,
        }
    }

    /// Counts one plural call whose count selects `category`.
    pub fn record_category(&mut self, category: usize) {
        if let Some(slot) = self.plural_categories.get_mut(category) {
            *slot += 1;
        }
    }

    /// Total number of entries written.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.simple_entries + self.plural_entries
    }

    /// Adds a written artefact path.
    pub fn add_file(&mut self, path: &Utf8Path) {
        self.files.push(path.to_path_buf());
    }
}
