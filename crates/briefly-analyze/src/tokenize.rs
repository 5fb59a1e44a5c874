//! Sentence segmentation and word tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::is_stopword;

/// Words (with inner `-` or `.` kept, as in `well-known`, `2.5`,
/// `example.com`), or runs of punctuation. Apostrophes split contractions
/// (`don't` → `don`, `'`, `t`).
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:[-.]\w+)*|[^\w\s]+").unwrap());

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e",
    "inc", "ltd", "co", "corp", "u.s", "u.k", "approx", "dept", "est",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// True when the period closing `prefix` does not end the sentence: the
/// last word is a known abbreviation, or an initial.
fn ends_with_abbreviation(prefix: &str, following: &str) -> bool {
    let Some(last) = prefix.split_whitespace().last() else {
        return false;
    };
    let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());
    ABBREVIATIONS.contains(&word.to_lowercase().as_str()) || is_initial(word, following)
}

/// A single capital letter followed by a capitalized name (`J. R. Tolkien`).
/// A capitalized stopword after it (`plan B. It worked`) starts a new sentence.
fn is_initial(word: &str, following: &str) -> bool {
    let mut chars = word.chars();
    if !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase()) {
        return false;
    }
    let Some(next) = following.split_whitespace().next() else {
        return false;
    };
    let next = next.trim_matches(|c: char| !c.is_alphanumeric());
    let capitalized = next.chars().next().is_some_and(char::is_uppercase);
    capitalized && (next.chars().count() == 1 || !is_stopword(&next.to_lowercase()))
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let s = candidate.trim();
    if !s.is_empty() {
        sentences.push(s);
    }
}

/// Split text into sentences, in document order.
///
/// Every returned sentence is a trimmed slice of `text`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        // Keep "?!", "..." and closing quotes with the sentence they end.
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) || is_closer(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }
        if c == '.' && end == i + 1 && ends_with_abbreviation(&text[start..i], &text[end..]) {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Lowercase word and punctuation tokens, unfiltered.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens that carry topical signal: purely alphanumeric and not stopwords.
pub fn content_words(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|w| w.chars().all(char::is_alphanumeric) && !is_stopword(w))
        .collect()
}

/// Whitespace-delimited token count of the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
