//! Frequency-based keyword extraction.

use crate::frequency::FrequencyTable;

/// Number of keywords returned per analysis.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// The `k` most frequent content words of `text`, most frequent first.
pub fn extract_keywords(text: &str, k: usize) -> Vec<String> {
    keywords_from_table(&FrequencyTable::from_text(text), k)
}

pub(crate) fn keywords_from_table(table: &FrequencyTable, k: usize) -> Vec<String> {
    table
        .most_common(k)
        .into_iter()
        .map(|(word, _)| word.to_string())
        .collect()
}
