//! Shared tokenizer for motif extraction.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::MIN_TOKEN_CHARS;

use super::stopwords::StopWords;

/// Deterministic tokenizer for journal text.
///
/// Text is lower-cased, whitespace control characters become spaces and
/// typographic quotes become their ASCII forms. Candidates are maximal runs
/// of a letter followed by one or more letters or apostrophes, where a
/// letter is a grapheme cluster so combining marks stay attached; a trailing
/// possessive `'s` is stripped, then short words and stop words are dropped.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    /// Create a new tokenizer with the base stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::new(),
        }
    }

    /// Create a tokenizer with an explicit stop-word set.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Tokenize text into normalized terms, in order, duplicates retained.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        word_runs(&normalized)
            .into_iter()
            .filter_map(candidate)
            .map(strip_possessive)
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| !self.stop_words.contains(token))
            .map(|s| s.to_string())
            .collect()
    }

    /// Tokenize and return term frequencies.
    pub fn term_frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut freqs = HashMap::new();
        for token in self.tokenize(text) {
            *freqs.entry(token).or_insert(0) += 1;
        }
        freqs
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\t' => ' ',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

fn is_word_grapheme(g: &str) -> bool {
    g == "'" || g.chars().next().is_some_and(char::is_alphabetic)
}

/// Maximal runs of letter and apostrophe graphemes.
fn word_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = None;
    for (idx, g) in text.grapheme_indices(true) {
        if is_word_grapheme(g) {
            start.get_or_insert(idx);
        } else if let Some(s) = start.take() {
            runs.push(&text[s..idx]);
        }
    }
    if let Some(s) = start {
        runs.push(&text[s..]);
    }
    runs
}

/// A run of letters and apostrophes only matches once it reaches its first
/// letter, and needs at least one more grapheme after it.
fn candidate(run: &str) -> Option<&str> {
    let word = run.trim_start_matches('\'');
    let mut graphemes = word.graphemes(true);
    match (graphemes.next(), graphemes.next()) {
        (Some(_), Some(_)) => Some(word),
        _ => None,
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s").unwrap_or(word)
}
