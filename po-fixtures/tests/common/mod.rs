//! Shared helpers for `po-fixtures` integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use camino::Utf8PathBuf;
use po_fixtures::generator::{GeneratedFixtures, generate_to_strings};
use po_fixtures::random::LengthBounds;
use po_fixtures::types::GeneratorConfig;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::error::Error;

/// Resolves the compiled `po-fixtures` binary path.
///
/// Cargo exposes the path at compile time; nextest exposes it at run time.
///
/// # Errors
///
/// Returns an error when none of the supported binary path variables are
/// present.
pub(crate) fn po_fixtures_exe() -> Result<Utf8PathBuf, Box<dyn Error>> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_po-fixtures") {
        return Ok(Utf8PathBuf::from(path));
    }
    let env_vars = ["NEXTEST_BIN_EXE_po-fixtures", "NEXTEST_BIN_EXE_po_fixtures"];
    for var in env_vars {
        if let Ok(path) = std::env::var(var) {
            return Ok(Utf8PathBuf::from(path));
        }
    }
    Err("po-fixtures binary path not found in environment".into())
}

/// Default configuration shrunk to `entries` entries.
pub(crate) fn config_with_entries(entries: usize) -> GeneratorConfig {
    GeneratorConfig {
        entries,
        ..GeneratorConfig::default()
    }
}

/// Configuration with `entries` entries and custom length bounds.
pub(crate) fn config_with_lengths(entries: usize, min: usize, max: usize) -> GeneratorConfig {
    GeneratorConfig {
        entries,
        lengths: LengthBounds::new(min, max).expect("valid length bounds"),
        ..GeneratorConfig::default()
    }
}

/// Renders both artefacts in memory from a seeded generator.
pub(crate) fn render(config: &GeneratorConfig, seed: u64) -> GeneratedFixtures {
    let mut rng = Pcg64::seed_from_u64(seed);
    generate_to_strings(config, &mut rng).expect("in-memory generation")
}
