//! Capability-scoped access to artefacts written during a test.

use anyhow::{Context, Result};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Reads `name` from `dir` as UTF-8 text.
///
/// # Errors
///
/// Returns an error when the directory cannot be opened or the file cannot
/// be read as UTF-8.
pub fn read_artefact(dir: &Utf8Path, name: &str) -> Result<String> {
    let handle = Dir::open_ambient_dir(dir, ambient_authority())
        .with_context(|| format!("open output dir {dir}"))?;
    handle
        .read_to_string(name)
        .with_context(|| format!("read {dir}/{name}"))
}
