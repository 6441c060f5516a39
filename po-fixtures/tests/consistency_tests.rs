//! Cross-file consistency checks over seeded runs.

mod common;

use po_fixtures::catalog::{PHP_FORMAT_FLAG, PluralRule};
use po_fixtures::entry::MAX_PLURAL_COUNT;
use rstest::rstest;
use test_helpers::calls::{CallRecord, parse_calls};
use test_helpers::catalog::{header_text, parse_catalog};

#[rstest]
#[case(0)]
#[case(17)]
#[case(0xdead_beef)]
fn same_seed_produces_identical_artefacts(#[case] seed: u64) {
    let config = common::config_with_entries(200);
    let first = common::render(&config, seed);
    let second = common::render(&config, seed);
    assert_eq!(first.catalog, second.catalog);
    assert_eq!(first.calls, second.calls);
}

#[rstest]
fn different_seeds_diverge() {
    let config = common::config_with_entries(50);
    assert_ne!(
        common::render(&config, 1).catalog,
        common::render(&config, 2).catalog
    );
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(333)]
fn entry_counts_match_configuration(#[case] entries: usize) {
    let fixtures = common::render(&common::config_with_entries(entries), 3);
    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    let calls = parse_calls(&fixtures.calls).expect("valid calls");
    assert_eq!(catalog.records.len(), entries);
    assert_eq!(calls.len(), entries);
    assert_eq!(fixtures.report.total(), entries);
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(7)]
fn catalog_and_calls_quote_identical_sources(#[case] seed: u64) {
    let fixtures = common::render(&common::config_with_entries(500), seed);
    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    let calls = parse_calls(&fixtures.calls).expect("valid calls");

    for (index, (record, call)) in catalog.records.iter().zip(&calls).enumerate() {
        assert_eq!(
            record.source_strings(),
            call.source_strings(),
            "entry {index} differs between catalog and calls"
        );
        assert_eq!(
            record.location_line().expect("location line"),
            index + 2,
            "entry {index} points at the wrong line"
        );
    }
}

#[rstest]
fn plural_records_are_complete() {
    let fixtures = common::render(&common::config_with_entries(400), 9);
    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    let calls = parse_calls(&fixtures.calls).expect("valid calls");

    let mut plural_seen = 0;
    for (record, call) in catalog.records.iter().zip(&calls) {
        match call {
            CallRecord::Plural { count, .. } => {
                plural_seen += 1;
                assert!(*count < MAX_PLURAL_COUNT);
                assert_eq!(record.flags, vec![PHP_FORMAT_FLAG.trim_start_matches("#, ")]);
                assert!(record.msgid_plural.is_some());
                assert_eq!(record.msgstr_indices, vec![0, 1, 2]);
                assert_eq!(record.msgstr.len(), PluralRule::NPLURALS);
                assert!(record.msgstr.iter().all(|text| text.contains("%d")));
            }
            CallRecord::Simple { .. } => {
                assert!(record.flags.is_empty());
                assert!(record.msgid_plural.is_none());
                assert!(record.msgstr_indices.is_empty());
                assert_eq!(record.msgstr.len(), 1);
            }
        }
    }
    assert!(plural_seen > 0, "a 400-entry run should contain plural entries");
    assert_eq!(plural_seen, fixtures.report.plural_entries);
}

#[rstest]
fn header_advertises_the_plural_rule() {
    let fixtures = common::render(&common::config_with_entries(0), 0);
    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    let header = header_text(&catalog.header).expect("valid header");
    let expected = format!("Plural-Forms: {}\n", PluralRule.header_value());
    assert!(
        header.contains(&expected),
        "header should advertise {expected:?}: {header:?}"
    );
    assert!(header.contains("Language: ru_RU\n"));
}

#[rstest]
#[case(1, 1)]
#[case(3, 8)]
#[case(10, 50)]
fn source_strings_respect_length_bounds(#[case] min: usize, #[case] max: usize) {
    let fixtures = common::render(&common::config_with_lengths(300, min, max), 4);
    let calls = parse_calls(&fixtures.calls).expect("valid calls");
    let placeholder_len = "%d".len() + 2;
    for call in &calls {
        let limit = match call {
            CallRecord::Simple { .. } => max,
            CallRecord::Plural { .. } => max + placeholder_len,
        };
        for source in call.source_strings() {
            let len = source.chars().count();
            assert!(len <= limit, "{source:?} exceeds {limit} characters");
            assert_eq!(source, source.trim());
        }
    }
}

#[rstest]
fn special_characters_survive_both_escapers() {
    let config = po_fixtures::types::GeneratorConfig {
        entries: 200,
        source_alphabet: po_fixtures::alphabet::Alphabet::new("source", "a\"\\$\t\n\r b")
            .expect("non-empty alphabet"),
        target_alphabet: po_fixtures::alphabet::Alphabet::new("target", "я\"\\\nю")
            .expect("non-empty alphabet"),
        ..common::config_with_entries(200)
    };
    let fixtures = common::render(&config, 21);
    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    let calls = parse_calls(&fixtures.calls).expect("valid calls");
    assert_eq!(catalog.records.len(), 200);

    let mut saw_special = false;
    let mut saw_line_break = false;
    for (index, (record, call)) in catalog.records.iter().zip(&calls).enumerate() {
        assert_eq!(record.source_strings(), call.source_strings());
        assert_eq!(
            record.location_line().expect("location line"),
            index + 2,
            "entry {index} points at the wrong line"
        );
        saw_special |= record
            .source_strings()
            .iter()
            .any(|text| text.contains(['"', '\\', '$']));
        saw_line_break |= record
            .source_strings()
            .iter()
            .any(|text| text.contains(['\n', '\r']));
        for translation in &record.msgstr {
            assert!(
                translation
                    .chars()
                    .all(|ch| config.target_alphabet.contains(ch) || "%d ".contains(ch)),
                "{translation:?} strays outside the target alphabet"
            );
        }
    }
    assert!(saw_special, "special characters should have been sampled");
    assert!(saw_line_break, "line breaks should have been sampled");
}

#[rstest]
fn line_breaks_keep_one_call_per_line() {
    let config = po_fixtures::types::GeneratorConfig {
        source_alphabet: po_fixtures::alphabet::Alphabet::new("source", "ab\ncd")
            .expect("non-empty alphabet"),
        ..common::config_with_entries(3)
    };
    let fixtures = common::render(&config, 1);
    let call_lines: Vec<&str> = fixtures.calls.lines().collect();
    assert_eq!(call_lines.len(), 2 + 3 + 1, "preamble, calls, closing");

    let catalog = parse_catalog(&fixtures.catalog).expect("valid catalog");
    for (index, record) in catalog.records.iter().enumerate() {
        let line = record.location_line().expect("location line");
        let statement = call_lines
            .get(line - 1)
            .expect("location points inside the companion file");
        let call = test_helpers::calls::parse_call_line(statement).expect("call statement");
        assert_eq!(call.source_strings(), record.source_strings(), "entry {index}");
    }
}
