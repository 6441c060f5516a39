//! Random string construction over an injected generator.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::FixtureError;

/// Numeric substitution marker inserted into plural templates.
pub const PLURAL_PLACEHOLDER: &str = " %d ";

/// Inclusive bounds on the sampled length of a random string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Creates bounds covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidLengthBounds`] when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, FixtureError> {
        if min > max {
            return Err(FixtureError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest length that may be sampled.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Largest length that may be sampled.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Draws a length uniformly from the bounds.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self { min: 10, max: 50 }
    }
}

/// Builds an untrimmed string of exactly `len` characters.
pub(crate) fn raw_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet, len: usize) -> String {
    (0..len).map(|_| alphabet.sample(rng)).collect()
}

/// Builds a random string with surrounding whitespace removed.
///
/// The result may be empty when every sampled character is whitespace.
pub fn random_string<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &Alphabet,
    bounds: LengthBounds,
) -> String {
    let len = bounds.sample(rng);
    raw_string(rng, alphabet, len).trim().to_owned()
}

/// Builds a random plural template containing [`PLURAL_PLACEHOLDER`].
///
/// The placeholder lands at a uniformly chosen character position of the base
/// string. An empty base string takes the placeholder at position zero, which
/// trims down to a bare `%d`.
pub fn random_plural_string<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &Alphabet,
    bounds: LengthBounds,
) -> String {
    let mut template = random_string(rng, alphabet, bounds);
    let char_count = template.chars().count();
    let position = if char_count == 0 {
        0
    } else {
        rng.gen_range(0..char_count)
    };
    let offset = template
        .char_indices()
        .nth(position)
        .map_or(template.len(), |(byte_offset, _)| byte_offset);
    template.insert_str(offset, PLURAL_PLACEHOLDER);
    template.trim().to_owned()
}
