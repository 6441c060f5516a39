//! Test helpers shared across crates.
//!
//! This crate parses the artefacts produced by `po-fixtures` back into
//! structured records so behavioural tests can compare the catalog with the
//! companion call file without re-implementing either grammar.

pub mod calls;
pub mod catalog;
pub mod fs;
pub mod text;
