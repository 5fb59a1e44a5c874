//! Named summary lengths.

use serde::{Deserialize, Serialize};

/// Requested summary length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthMode {
    /// Parse a request value. Unknown names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    /// Target number of summary sentences.
    pub fn sentence_count(&self) -> usize {
        match self {
            Self::Short => 1,
            Self::Medium => 2,
            Self::Long => 4,
        }
    }
}
