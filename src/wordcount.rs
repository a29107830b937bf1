//! Word occurrence counting.

use std::collections::HashMap;
use std::fmt;

use crate::input::Word;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence counts ordered by each word's first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCounts {
    entries: Vec<WordCount>,
}

impl WordCounts {
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }

    /// Total number of words counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Count occurrences of every distinct word. Matching is case-sensitive.
pub fn count<'w>(words: impl IntoIterator<Item = &'w Word>) -> WordCounts {
    let mut slots: HashMap<&'w str, usize> = HashMap::new();
    let mut entries: Vec<WordCount> = Vec::new();

    for word in words {
        let word = word.as_str();
        match slots.get(word) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                slots.insert(word, entries.len());
                entries.push(WordCount {
                    word: word.to_owned(),
                    count: 1,
                });
            }
        }
    }

    WordCounts { entries }
}

impl fmt::Display for WordCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{} Word: {}, Occurrences: {}", index + 1, entry.word, entry.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{read_tokens, Tokens};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn words(text: &str) -> Vec<Word> {
        let tokens: Tokens<Word> = read_tokens(Cursor::new(text.to_owned())).unwrap();
        tokens.values
    }

    #[test]
    fn counts_in_first_appearance_order() {
        let words = words("pear\napple\npear\nfig\napple\npear\n");
        let counts = count(&words);
        let pairs: Vec<_> = counts
            .entries()
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect();
        assert_eq!(pairs, vec![("pear", 3), ("apple", 2), ("fig", 1)]);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let words = words("Rust\nrust\nRust\n");
        let counts = count(&words);
        assert_eq!(counts.get("Rust"), Some(2));
        assert_eq!(counts.get("rust"), Some(1));
        assert_eq!(counts.get("RUST"), None);
    }

    #[test]
    fn empty_input_renders_header_only() {
        let counts = count(&Vec::<Word>::new());
        assert_eq!(counts, WordCounts::default());
        assert_eq!(counts.to_string(), "Results:\n");
    }

    #[test]
    fn renders_report() {
        let words = words("b\na\nb\n");
        let expected = "Results:\n1 Word: b, Occurrences: 2\n2 Word: a, Occurrences: 1\n";
        assert_eq!(count(&words).to_string(), expected);
    }
}
