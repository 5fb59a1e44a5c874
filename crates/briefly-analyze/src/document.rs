//! A single piece of text under analysis.

use crate::frequency::FrequencyTable;
use crate::tokenize::{split_sentences, word_count};

/// Raw text plus the structures derived from it once.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    sentences: Vec<&'a str>,
    frequencies: FrequencyTable,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            sentences: split_sentences(text),
            frequencies: FrequencyTable::from_text(text),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Sentences in document order.
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Whitespace-delimited word count of the raw text.
    pub fn word_count(&self) -> usize {
        word_count(self.text)
    }
}
