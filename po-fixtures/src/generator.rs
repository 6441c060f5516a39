//! Single-pass fixture generation over two output sinks.

use std::io::Write;

use rand::Rng;

use crate::call::{self, CLOSING, PREAMBLE, PREAMBLE_LINES};
use crate::catalog::{self, CatalogHeader, PluralRule};
use crate::entry::{Entry, make_entry};
use crate::error::FixtureError;
use crate::types::{GenerationReport, GeneratorConfig};

/// Both artefacts rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixtures {
    /// Catalog text.
    pub catalog: String,
    /// Companion source text.
    pub calls: String,
    /// Entry tally. `files` is empty because nothing touched the disk.
    pub report: GenerationReport,
}

/// Writes the catalog header, `config.entries` random records, and the
/// matching call statements into the two sinks.
///
/// Each entry is drawn with an unbiased coin flip between the simple and
/// plural shapes, then rendered into both grammars before the next one is
/// drawn.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] when either sink rejects a write. The path
/// reported is the configured artefact path for that sink.
pub fn generate<R, C, P>(
    config: &GeneratorConfig,
    rng: &mut R,
    catalog_out: &mut C,
    calls_out: &mut P,
) -> Result<GenerationReport, FixtureError>
where
    R: Rng + ?Sized,
    C: Write + ?Sized,
    P: Write + ?Sized,
{
    let entries = std::iter::repeat_with(|| make_entry(&mut *rng, config)).take(config.entries);
    write_entries(config, entries, catalog_out, calls_out)
}

/// Writes the catalog header, one record per entry, and the matching call
/// statements into the two sinks.
///
/// The location comment of the entry at index `i` points at line
/// `PREAMBLE_LINES + i` of the companion file.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] when either sink rejects a write.
pub fn write_entries<I, C, P>(
    config: &GeneratorConfig,
    entries: I,
    catalog_out: &mut C,
    calls_out: &mut P,
) -> Result<GenerationReport, FixtureError>
where
    I: IntoIterator<Item = Entry>,
    C: Write + ?Sized,
    P: Write + ?Sized,
{
    let catalog_path = config.catalog_path();
    let calls_path = config.calls_path();
    let catalog_err = |io_err: std::io::Error| FixtureError::io(catalog_path.clone(), io_err);
    let calls_err = |io_err: std::io::Error| FixtureError::io(calls_path.clone(), io_err);

    catalog_out
        .write_all(CatalogHeader::default().render().as_bytes())
        .map_err(catalog_err)?;
    calls_out
        .write_all(PREAMBLE.as_bytes())
        .map_err(calls_err)?;

    let mut report = GenerationReport::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let location = catalog::render_location(&config.calls_name, PREAMBLE_LINES + index);
        write!(
            catalog_out,
            "{location}\n{}\n\n",
            catalog::render_catalog(&entry)
        )
        .map_err(catalog_err)?;
        writeln!(calls_out, "{}", call::render_call(&entry)).map_err(calls_err)?;
        report.record(entry.kind());
        if let Entry::Plural { count, .. } = entry {
            report.record_category(PluralRule.category(u64::from(count)));
        }
    }

    calls_out
        .write_all(CLOSING.as_bytes())
        .map_err(calls_err)?;

    tracing::debug!(
        simple = report.simple_entries,
        plural = report.plural_entries,
        categories = ?report.plural_categories,
        "rendered fixture entries"
    );
    Ok(report)
}

/// Renders both artefacts into strings without touching the filesystem.
///
/// Useful for testing and golden file comparisons.
///
/// # Errors
///
/// Propagates [`generate`] errors; in-memory sinks do not fail in practice.
pub fn generate_to_strings<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedFixtures, FixtureError> {
    let mut catalog = Vec::new();
    let mut calls = Vec::new();
    let report = generate(config, rng, &mut catalog, &mut calls)?;
    Ok(GeneratedFixtures {
        catalog: utf8_or_lossy(catalog),
        calls: utf8_or_lossy(calls),
        report,
    })
}

fn utf8_or_lossy(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::LengthBounds;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use rstest::{fixture, rstest};

    #[fixture]
    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            entries: 25,
            lengths: LengthBounds::new(4, 12).expect("valid bounds"),
            ..GeneratorConfig::default()
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn zero_entries_writes_only_frame(small_config: GeneratorConfig) {
        let config = GeneratorConfig {
            entries: 0,
            ..small_config
        };
        let mut rng = Pcg64::seed_from_u64(1);
        let fixtures = generate_to_strings(&config, &mut rng).expect("generate");
        assert_eq!(fixtures.catalog, CatalogHeader::default().render());
        assert_eq!(fixtures.calls, format!("{PREAMBLE}{CLOSING}"));
        assert_eq!(fixtures.report.total(), 0);
    }

    #[rstest]
    fn report_tallies_every_entry(small_config: GeneratorConfig) {
        let mut rng = Pcg64::seed_from_u64(2);
        let fixtures = generate_to_strings(&small_config, &mut rng).expect("generate");
        assert_eq!(fixtures.report.total(), small_config.entries);
        assert!(fixtures.report.files.is_empty());
    }

    #[rstest]
    fn report_tallies_plural_categories() {
        let config = GeneratorConfig {
            entries: 4,
            ..GeneratorConfig::default()
        };
        let plural = |count| Entry::Plural {
            singular: "%d".to_owned(),
            plural: "%d".to_owned(),
            translations: ["%d".to_owned(), "%d".to_owned(), "%d".to_owned()],
            count,
        };
        let simple = Entry::Simple {
            source: "a".to_owned(),
            translation: "б".to_owned(),
        };
        let entries = vec![plural(21), simple, plural(3), plural(11)];
        let report = write_entries(&config, entries, &mut Vec::new(), &mut Vec::new())
            .expect("in-memory sinks");
        assert_eq!(report.plural_categories, [1, 1, 1]);
        assert_eq!(report.plural_entries, 3);
    }

    #[rstest]
    fn plural_categories_sum_to_plural_entries(small_config: GeneratorConfig) {
        let mut rng = Pcg64::seed_from_u64(6);
        let report = generate_to_strings(&small_config, &mut rng)
            .expect("generate")
            .report;
        assert_eq!(
            report.plural_categories.iter().sum::<usize>(),
            report.plural_entries
        );
    }

    #[rstest]
    fn location_comments_count_up_from_preamble(small_config: GeneratorConfig) {
        let mut rng = Pcg64::seed_from_u64(3);
        let fixtures = generate_to_strings(&small_config, &mut rng).expect("generate");
        let lines: Vec<usize> = fixtures
            .catalog
            .lines()
            .filter_map(|line| line.strip_prefix("#: words.php:"))
            .filter_map(|line| line.parse().ok())
            .collect();
        let expected: Vec<usize> = (0..small_config.entries)
            .map(|index| index + PREAMBLE_LINES)
            .collect();
        assert_eq!(lines, expected);
    }

    #[rstest]
    fn catalog_write_failure_reports_catalog_path(small_config: GeneratorConfig) {
        let mut rng = Pcg64::seed_from_u64(4);
        let mut calls = Vec::new();
        let err = generate(&small_config, &mut rng, &mut FailingSink, &mut calls)
            .expect_err("failing sink must abort generation");
        match err {
            FixtureError::Io { path, .. } => assert_eq!(path, small_config.catalog_path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn calls_write_failure_reports_calls_path(small_config: GeneratorConfig) {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut catalog = Vec::new();
        let err = generate(&small_config, &mut rng, &mut catalog, &mut FailingSink)
            .expect_err("failing sink must abort generation");
        match err {
            FixtureError::Io { path, .. } => assert_eq!(path, small_config.calls_path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
