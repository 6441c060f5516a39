//! Library interface for `po-fixtures`.
//!
//! Generates synthetic gettext benchmark fixtures: a PO catalog populated
//! with random strings and a companion PHP file that calls `__()` or `_n()`
//! once per catalog entry. Both artefacts are rendered from the same
//! [`entry::Entry`] values, so every call quotes exactly the `msgid` (and
//! `msgid_plural`) recorded in the catalog.

pub mod alphabet;
pub mod call;
pub mod catalog;
pub mod cli;
pub mod entry;
pub mod error;
pub mod generator;
pub mod output;
pub mod random;
pub mod types;
