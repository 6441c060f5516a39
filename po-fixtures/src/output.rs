//! Output writers for `po-fixtures`.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use rand::Rng;
use std::io::{BufWriter, Write};

use crate::error::FixtureError;
use crate::generator::generate;
use crate::types::{GenerationReport, GeneratorConfig};

const WRITE_BUFFER_BYTES: usize = 1 << 20;

/// Generates both artefacts into `config.out_dir`.
///
/// The two files are opened once, written sequentially through buffered
/// writers, and flushed before returning. Both handles are closed on every
/// exit path. A failed run may leave partially written files behind.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] when the output directory cannot be created
/// or either file cannot be opened, written, or flushed.
pub fn write_fixtures<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationReport, FixtureError> {
    let dir = ensure_dir(&config.out_dir)?;
    let catalog_path = config.catalog_path();
    let calls_path = config.calls_path();

    let mut catalog = BufWriter::with_capacity(
        WRITE_BUFFER_BYTES,
        create_file(&dir, &config.catalog_name, &catalog_path)?,
    );
    let mut calls = BufWriter::with_capacity(
        WRITE_BUFFER_BYTES,
        create_file(&dir, &config.calls_name, &calls_path)?,
    );
    tracing::info!(catalog = %catalog_path, calls = %calls_path, "writing fixtures");

    let mut report = generate(config, rng, &mut catalog, &mut calls)?;

    catalog
        .flush()
        .map_err(|io_err| FixtureError::io(catalog_path.clone(), io_err))?;
    calls
        .flush()
        .map_err(|io_err| FixtureError::io(calls_path.clone(), io_err))?;

    report.add_file(&catalog_path);
    report.add_file(&calls_path);
    Ok(report)
}

fn create_file(dir: &Dir, name: &str, path: &Utf8Path) -> Result<File, FixtureError> {
    dir.open_with(
        name,
        OpenOptions::new().write(true).create(true).truncate(true),
    )
    .map_err(|io_err| FixtureError::io(path, io_err))
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, FixtureError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "creating output directory");
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| FixtureError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| FixtureError::io(path, io_err))
        }
        Err(open_err) => Err(FixtureError::io(path, open_err)),
    }
}
