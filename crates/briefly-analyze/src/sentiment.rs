//! Marker-based sentiment classification.
//!
//! Positive markers are checked before negative ones, so mixed text is
//! positive. Markers match as substrings of the lowercased text.

use serde::{Deserialize, Serialize};

const POSITIVE_MARKERS: &[&str] = &["good", "happy", "great", "love", "excellent"];
const NEGATIVE_MARKERS: &[&str] = &["bad", "sad", "terrible", "hate", "awful"];

/// Coarse sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `text` by marker presence.
pub fn classify(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let contains_any = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

    if contains_any(POSITIVE_MARKERS) {
        Sentiment::Positive
    } else if contains_any(NEGATIVE_MARKERS) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
