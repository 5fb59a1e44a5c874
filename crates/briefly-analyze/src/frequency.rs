//! Term-frequency table and sentence scoring.

use std::collections::HashMap;

use crate::tokenize::{content_words, words};

/// Token → occurrence count for one document.
///
/// Remembers the order in which tokens were first seen so that ranking
/// ties resolve to the earliest token.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Count the content words of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(content_words(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::default();
        for token in tokens {
            match table.counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    table.counts.insert(token.clone(), 1);
                    table.order.push(token);
                }
            }
        }
        table
    }

    /// Count for `token`; absent tokens count 0.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of counts over the lowercase tokens of `sentence`.
    pub fn score_sentence(&self, sentence: &str) -> usize {
        words(sentence).iter().map(|w| self.get(w)).sum()
    }

    /// The `n` most frequent tokens, highest first; equal counts keep
    /// first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|token| (token.as_str(), self.counts[token]))
            .collect();
        // Stable sort keeps insertion order among ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
