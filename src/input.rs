//! Line-oriented input reading.
//!
//! Every input file holds one token per line. Lines are trimmed, blank lines are skipped, and
//! lines that do not parse as the expected token kind are reported and dropped.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// A value that can be read from a single line of input.
pub trait Token: Sized {
    /// Human-readable kind, used in warnings.
    const KIND: &'static str;

    /// Parse from a trimmed, non-empty line.
    fn parse(text: &str) -> Option<Self>;
}

/// Remove `_` digit separators. Each one must sit between two ASCII digits.
fn strip_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte != b'_' {
            continue;
        }
        let before = index.checked_sub(1).map(|prev| bytes[prev]);
        let after = bytes.get(index + 1).copied();
        match (before, after) {
            (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit() => (),
            _ => return None,
        }
    }

    Some(Cow::Owned(text.replace('_', "")))
}

impl Token for i64 {
    const KIND: &'static str = "number";

    fn parse(text: &str) -> Option<Self> {
        strip_separators(text)?.parse().ok()
    }
}

impl Token for f64 {
    const KIND: &'static str = "number";

    fn parse(text: &str) -> Option<Self> {
        strip_separators(text)?.parse().ok()
    }
}

/// A purely alphabetic word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Token for Word {
    const KIND: &'static str = "word";

    fn parse(text: &str) -> Option<Self> {
        if !text.is_empty() && text.chars().all(char::is_alphabetic) {
            Some(Self(text.to_owned()))
        } else {
            None
        }
    }
}

/// A line that was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Tokens read from an input, in order, plus the lines that were dropped.
#[derive(Debug)]
pub struct Tokens<T> {
    pub values: Vec<T>,
    pub rejected: Vec<Rejected>,
}

pub fn read_tokens<T: Token, R: BufRead>(reader: R) -> io::Result<Tokens<T>> {
    let mut values = Vec::new();
    let mut rejected = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match T::parse(text) {
            Some(value) => values.push(value),
            None => {
                warn!("{} is not a {} and will not be taken into account", text, T::KIND);
                rejected.push(Rejected {
                    line: index + 1,
                    text: text.to_owned(),
                });
            }
        }
    }

    debug!(accepted = values.len(), rejected = rejected.len(), "read input");
    Ok(Tokens { values, rejected })
}

/// Convenience function to read tokens from the file at a given `Path`.
pub fn read_tokens_path<T: Token>(path: impl AsRef<Path>) -> io::Result<Tokens<T>> {
    let file = File::open(path)?;
    read_tokens(BufReader::new(file))
}
