//! Character sets used to build random source strings and translations.
//!
//! Sampling is uniform over the *positions* of the alphabet, so characters
//! that appear more than once (notably the space) are drawn proportionally
//! more often. The built-in alphabets rely on this to produce word-like runs.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::FixtureError;

/// Latin letters, punctuation, and spaces used for source strings.
pub const EN: &str = " qwerty uiop asdf ghjkl zxcv bnm ,. ";

/// Cyrillic letters, punctuation, and spaces used for translations.
pub const RU: &str = " ёйцукен гшщзхъ фыва пролджэ ячсмить бю ,. ";

/// A non-empty sequence of characters to sample from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from `chars`, rejecting empty input.
    ///
    /// `role` names the alphabet in the error message (for example `"source"`).
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::EmptyAlphabet`] when `chars` is empty.
    pub fn new(role: &'static str, chars: &str) -> Result<Self, FixtureError> {
        if chars.is_empty() {
            return Err(FixtureError::EmptyAlphabet(role));
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// The built-in English alphabet.
    #[must_use]
    pub fn english() -> Self {
        Self {
            chars: EN.chars().collect(),
        }
    }

    /// The built-in Russian alphabet.
    #[must_use]
    pub fn russian() -> Self {
        Self {
            chars: RU.chars().collect(),
        }
    }

    /// Draws one character uniformly from the alphabet positions.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        // `chars` is never empty, so `choose` always yields a value.
        self.chars.choose(rng).copied().unwrap_or(' ')
    }

    /// Returns the characters in declaration order.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Reports whether `ch` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}
