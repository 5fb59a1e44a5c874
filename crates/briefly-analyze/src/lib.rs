//! Briefly Analyze — extractive summary, keywords, sentiment and reading time.
//!
//! Everything here is synchronous and allocation-local: the only shared
//! state is the fixed stopword set, initialized once on first use.

pub mod document;
pub mod frequency;
pub mod keywords;
pub mod length;
pub mod metrics;
pub mod sentiment;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use document::Document;
pub use frequency::FrequencyTable;
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
pub use length::LengthMode;
pub use metrics::reading_time_minutes;
pub use sentiment::{classify, Sentiment};
pub use summarize::summarize;

/// Combined analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub word_count: usize,
    pub reading_time_minutes: f64,
}

/// Run every analysis on `text`.
///
/// The frequency table is built once and shared by the summarizer and the
/// keyword extractor.
pub fn analyze(text: &str, length: LengthMode) -> AnalysisResult {
    let doc = Document::new(text);
    let sentence_count = length.sentence_count();

    let summary = summarize::summarize_sentences(
        doc.text(),
        doc.sentences(),
        doc.frequencies(),
        sentence_count,
    );
    let keywords = keywords::keywords_from_table(doc.frequencies(), DEFAULT_KEYWORD_COUNT);
    let sentiment = classify(doc.text());
    let word_count = doc.word_count();

    debug!(
        sentences = doc.sentences().len(),
        distinct_terms = doc.frequencies().len(),
        word_count,
        "Analyzed document"
    );

    AnalysisResult {
        summary,
        keywords,
        sentiment,
        word_count,
        reading_time_minutes: reading_time_minutes(word_count),
    }
}
