//! Command-line interface definitions for `po-fixtures`.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::alphabet::{Alphabet, EN, RU};
use crate::error::FixtureError;
use crate::random::LengthBounds;
use crate::types::{DEFAULT_CALLS_NAME, DEFAULT_CATALOG_NAME, DEFAULT_ENTRIES, GeneratorConfig};

/// Parsed CLI arguments for `po-fixtures`.
///
/// Every flag defaults to the reference fixture settings, so running the
/// binary without arguments reproduces the standard benchmark pair.
#[derive(Debug, Parser)]
#[command(name = "po-fixtures")]
#[command(about = "Generate a random gettext catalog and matching PHP translation calls")]
#[command(version)]
pub struct Args {
    /// Number of entries to generate.
    #[arg(long, value_name = "count", default_value_t = DEFAULT_ENTRIES)]
    pub entries: usize,
    /// Minimum sampled length of each random string.
    #[arg(long, value_name = "chars", default_value_t = 10)]
    pub min_len: usize,
    /// Maximum sampled length of each random string.
    #[arg(long, value_name = "chars", default_value_t = 50)]
    pub max_len: usize,
    /// Seed for the random generator (a fresh seed is drawn when omitted).
    #[arg(long, value_name = "u64")]
    pub seed: Option<u64>,
    /// Directory receiving both artefacts.
    #[arg(long, value_name = "path", default_value = ".")]
    pub out_dir: Utf8PathBuf,
    /// Characters used for untranslated strings.
    #[arg(long, value_name = "chars", default_value = EN)]
    pub source_alphabet: String,
    /// Characters used for translations.
    #[arg(long, value_name = "chars", default_value = RU)]
    pub target_alphabet: String,
    /// Log at debug level.
    #[arg(short = 'v', long = "verbose")]
    pub is_verbose: bool,
}

impl Args {
    /// Validates the arguments and builds the generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidLengthBounds`] when `--min-len` exceeds
    /// `--max-len`, or [`FixtureError::EmptyAlphabet`] when an alphabet is
    /// empty.
    pub fn to_config(&self) -> Result<GeneratorConfig, FixtureError> {
        Ok(GeneratorConfig {
            entries: self.entries,
            lengths: LengthBounds::new(self.min_len, self.max_len)?,
            source_alphabet: Alphabet::new("source", &self.source_alphabet)?,
            target_alphabet: Alphabet::new("target", &self.target_alphabet)?,
            out_dir: self.out_dir.clone(),
            catalog_name: DEFAULT_CATALOG_NAME.to_owned(),
            calls_name: DEFAULT_CALLS_NAME.to_owned(),
        })
    }
}
