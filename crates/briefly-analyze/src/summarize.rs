//! Extractive summarization by term-frequency sentence scoring.
//!
//! Sentences are scored against the document's frequency table and the
//! best ones are returned verbatim, joined in rank order (highest score
//! first). Equal scores rank by position in the document.

use std::collections::HashSet;

use crate::frequency::FrequencyTable;
use crate::tokenize::split_sentences;

/// A sentence with its document position and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub index: usize,
    pub text: &'a str,
    pub score: usize,
}

/// Score every distinct sentence and sort best first.
///
/// Repeated sentences are scored once, at their first position.
pub fn rank_sentences<'a>(sentences: &[&'a str], table: &FrequencyTable) -> Vec<ScoredSentence<'a>> {
    let mut seen = HashSet::new();
    let mut scored: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .enumerate()
        .filter(|(_, text)| seen.insert(**text))
        .map(|(index, &text)| ScoredSentence {
            index,
            text,
            score: table.score_sentence(text),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    scored
}

/// Summarize `text` down to `sentence_count` sentences.
///
/// Text that already has no more than `sentence_count` sentences is
/// returned unchanged. A count of zero is treated as one.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= sentence_count.max(1) {
        return text.to_string();
    }
    let table = FrequencyTable::from_text(text);
    summarize_sentences(text, &sentences, &table, sentence_count)
}

/// Summarize using sentences and a table that were already computed for `text`.
pub(crate) fn summarize_sentences(
    text: &str,
    sentences: &[&str],
    table: &FrequencyTable,
    sentence_count: usize,
) -> String {
    let sentence_count = sentence_count.max(1);
    if sentences.len() <= sentence_count {
        return text.to_string();
    }

    rank_sentences(sentences, table)
        .into_iter()
        .take(sentence_count)
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}
