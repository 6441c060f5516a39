//! Translation entries built once per generation step.
//!
//! An [`Entry`] is immutable after construction and is handed to both the
//! catalog and the call renderers, so the two artefacts always quote the same
//! source strings.

use rand::Rng;

use crate::random::{random_plural_string, random_string};
use crate::types::GeneratorConfig;

/// Number of plural categories carried by every plural entry.
pub const PLURAL_CATEGORIES: usize = 3;

/// Exclusive upper bound for the count passed to plural calls.
pub const MAX_PLURAL_COUNT: u32 = 100;

/// Variant tag of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A single message with one translation.
    Simple,
    /// A singular/plural message pair with one translation per category.
    Plural,
}

/// One logical translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Non-pluralised message.
    Simple {
        /// Untranslated message.
        source: String,
        /// Translated message.
        translation: String,
    },
    /// Pluralised message.
    Plural {
        /// Untranslated singular template.
        singular: String,
        /// Untranslated plural template.
        plural: String,
        /// Translated templates indexed by plural category.
        translations: [String; PLURAL_CATEGORIES],
        /// Count passed to the plural call.
        count: u32,
    },
}

impl Entry {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Simple { .. } => EntryKind::Simple,
            Self::Plural { .. } => EntryKind::Plural,
        }
    }

    /// Returns the untranslated strings in the order both renderers emit them.
    #[must_use]
    pub fn source_strings(&self) -> Vec<&str> {
        match self {
            Self::Simple { source, .. } => vec![source.as_str()],
            Self::Plural {
                singular, plural, ..
            } => vec![singular.as_str(), plural.as_str()],
        }
    }
}

/// Builds a simple entry: one source string and one translation.
pub fn make_simple_entry<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Entry {
    let source = random_string(rng, &config.source_alphabet, config.lengths);
    let translation = random_string(rng, &config.target_alphabet, config.lengths);
    Entry::Simple {
        source,
        translation,
    }
}

/// Builds a plural entry: two source templates, three translated templates,
/// and a count in `0..MAX_PLURAL_COUNT`.
pub fn make_plural_entry<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Entry {
    let singular = random_plural_string(rng, &config.source_alphabet, config.lengths);
    let plural = random_plural_string(rng, &config.source_alphabet, config.lengths);
    let translations = std::array::from_fn(|_| {
        random_plural_string(&mut *rng, &config.target_alphabet, config.lengths)
    });
    let count = rng.gen_range(0..MAX_PLURAL_COUNT);
    Entry::Plural {
        singular,
        plural,
        translations,
        count,
    }
}

/// Flips an unbiased coin and builds a simple (heads) or plural (tails) entry.
pub fn make_entry<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Entry {
    if rng.gen_bool(0.5) {
        make_simple_entry(rng, config)
    } else {
        make_plural_entry(rng, config)
    }
}
