//! Word count and reading-time estimate.

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Minutes needed to read `word_count` words, rounded to two decimals.
///
/// Rounding works on the exact binary value of the quotient with ties to
/// even, so `0.125` becomes `0.12` and `0.185` (stored just below) `0.18`.
pub fn reading_time_minutes(word_count: usize) -> f64 {
    let minutes = word_count as f64 / WORDS_PER_MINUTE;
    format!("{minutes:.2}").parse().unwrap_or(minutes)
}
