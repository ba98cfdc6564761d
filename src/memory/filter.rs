//! Sentence tokenizing and the common-word filter.

use std::collections::HashSet;

/// Characters stripped from every token
pub const PUNCTUATION: [char; 7] = ['.', ';', ',', '!', '?', '\'', '"'];

/// Removes every punctuation character from a token
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Splits a sentence on single spaces and strips punctuation from each piece.
///
/// Empty pieces are kept, so `""` yields one empty token and `"a  b"`
/// yields three.
pub fn filter_words(sentence: &str) -> Vec<String> {
    sentence.split(' ').map(strip_punctuation).collect()
}

/// Read-only set of words never worth caching
#[derive(Debug, Clone, Default)]
pub struct CommonWords {
    words: HashSet<String>,
}

impl CommonWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a newline-delimited list. A trailing newline contributes the
    /// empty word.
    pub fn parse(content: &str) -> Self {
        Self::new(content.split('\n'))
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
