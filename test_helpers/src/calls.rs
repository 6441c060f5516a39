//! Parser for generated PHP companion files.

use anyhow::{Context, Result, bail, ensure};

use crate::text::unescape_php;

/// Expected first lines of a companion file.
pub const EXPECTED_PREAMBLE: [&str; 2] = ["<?php", "function doTest(){"];

/// Expected last line of a companion file.
pub const EXPECTED_CLOSING: &str = "}";

/// One translation call, with string arguments unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallRecord {
    /// `__("source");`
    Simple {
        /// The single string argument.
        source: String,
    },
    /// `_n("singular", "plural", count);`
    Plural {
        /// First string argument.
        singular: String,
        /// Second string argument.
        plural: String,
        /// Numeric third argument.
        count: u32,
    },
}

impl CallRecord {
    /// String arguments in call order.
    #[must_use]
    pub fn source_strings(&self) -> Vec<&str> {
        match self {
            Self::Simple { source } => vec![source.as_str()],
            Self::Plural {
                singular, plural, ..
            } => vec![singular.as_str(), plural.as_str()],
        }
    }

    /// Number of arguments passed to the call.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Simple { .. } => 1,
            Self::Plural { .. } => 3,
        }
    }
}

/// Parses a companion file into its call records.
///
/// Fails unless the file opens with [`EXPECTED_PREAMBLE`], closes with
/// [`EXPECTED_CLOSING`], and holds only call statements in between.
///
/// # Errors
///
/// Returns an error when the frame is wrong or a call line is malformed.
pub fn parse_calls(text: &str) -> Result<Vec<CallRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    let Some((closing, rest)) = lines.split_last() else {
        bail!("companion file is empty");
    };
    ensure!(
        *closing == EXPECTED_CLOSING,
        "unexpected closing line: {closing}"
    );
    ensure!(
        rest.starts_with(&EXPECTED_PREAMBLE),
        "unexpected preamble: {:?}",
        rest.iter().take(EXPECTED_PREAMBLE.len()).collect::<Vec<_>>()
    );
    rest.iter()
        .skip(EXPECTED_PREAMBLE.len())
        .map(|line| parse_call_line(line))
        .collect()
}

/// Parses a single `\t__(...);` or `\t_n(...);` statement.
///
/// # Errors
///
/// Returns an error when the statement shape or its arguments are malformed.
pub fn parse_call_line(line: &str) -> Result<CallRecord> {
    let body = line
        .strip_prefix('\t')
        .and_then(|rest| rest.strip_suffix(");"))
        .with_context(|| format!("not a tab-indented call statement: {line:?}"))?;
    let (name, args) = body
        .split_once('(')
        .with_context(|| format!("missing argument list: {line:?}"))?;
    let args = split_arguments(args)?;
    match (name, args.as_slice()) {
        ("__", [Argument::Text(source)]) => Ok(CallRecord::Simple {
            source: source.clone(),
        }),
        ("_n", [Argument::Text(singular), Argument::Text(plural), Argument::Bare(count)]) => {
            Ok(CallRecord::Plural {
                singular: singular.clone(),
                plural: plural.clone(),
                count: count
                    .parse::<u32>()
                    .with_context(|| format!("invalid count: {count}"))?,
            })
        }
        _ => bail!("unexpected call shape: {line:?}"),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Argument {
    Text(String),
    Bare(String),
}

fn split_arguments(args: &str) -> Result<Vec<Argument>> {
    let mut parsed = Vec::new();
    let mut chars = args.chars().peekable();
    loop {
        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
        match chars.peek() {
            None => break,
            Some('"') => {
                chars.next();
                let mut raw = String::new();
                loop {
                    match chars.next() {
                        None => bail!("unterminated string in {args:?}"),
                        Some('"') => break,
                        Some('\\') => {
                            raw.push('\\');
                            raw.extend(chars.next());
                        }
                        Some(ch) => raw.push(ch),
                    }
                }
                parsed.push(Argument::Text(unescape_php(&raw)?));
            }
            Some(_) => {
                let mut bare = String::new();
                while let Some(ch) = chars.next_if(|ch| *ch != ',') {
                    bare.push(ch);
                }
                parsed.push(Argument::Bare(bare.trim().to_owned()));
            }
        }
        while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(other) => bail!("unexpected {other:?} between arguments in {args:?}"),
        }
    }
    Ok(parsed)
}
