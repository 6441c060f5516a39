//! Error types for `po-fixtures`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the fixture generation pipeline.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The minimum string length is larger than the maximum.
    #[error("invalid string length bounds: min {min} exceeds max {max}")]
    InvalidLengthBounds {
        /// Requested minimum length.
        min: usize,
        /// Requested maximum length.
        max: usize,
    },

    /// An alphabet has no characters to sample from.
    #[error("the {0} alphabet must contain at least one character")]
    EmptyAlphabet(&'static str),

    /// Creating, writing, or flushing an output artefact failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path of the artefact or directory involved.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
