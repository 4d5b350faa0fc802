//! Dictionary: known-word set for counting misspellings.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A set of correctly spelled words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a word list with one word per line.
    ///
    /// Line endings are stripped and blank lines skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dictionary: Self = content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|word| !word.is_empty())
            .collect();
        tracing::debug!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().collect()
    }

    /// Check whether `word` is known. Matching is exact and case-sensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count tokens of `text` that are not in the dictionary.
    ///
    /// Trailing spaces are ignored and the rest is split on single spaces,
    /// so consecutive spaces yield empty tokens and punctuation stays
    /// attached to its word (`day!`). Only `' '` separates tokens: newlines
    /// and tabs stay inside them, so `"good\nday"` is one unknown token.
    /// Empty text has no misspellings.
    pub fn count_misspellings(&self, text: &str) -> usize {
        let text = text.trim_end_matches(' ');
        if text.is_empty() {
            return 0;
        }
        text.split(' ').filter(|token| !self.contains(token)).count()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
