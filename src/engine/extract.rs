//! Motif extraction: qualification, ranking and truncation.

use std::collections::BTreeSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::index::FrequencyTables;
use crate::types::{
    Motif, BIGRAM_MIN_COUNT, DEFAULT_MIN_GLOBAL_COUNT, DEFAULT_MIN_PER_DOCUMENT_COUNT,
    DEFAULT_TOP_K,
};

use super::stopwords::StopWords;
use super::tokenizer::Tokenizer;

/// Parameters for one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Maximum number of motifs returned (default: 20). Zero yields nothing.
    pub top_k: usize,
    /// A word qualifies when its corpus-wide count reaches this (default: 3).
    pub min_global_count: usize,
    /// A word also qualifies when any single document contains it at least
    /// this many times (default: 2).
    pub min_per_document_count: usize,
    /// Extra stop words for this call only, matched case-insensitively.
    pub extra_stopwords: BTreeSet<String>,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_global_count: DEFAULT_MIN_GLOBAL_COUNT,
            min_per_document_count: DEFAULT_MIN_PER_DOCUMENT_COUNT,
            extra_stopwords: BTreeSet::new(),
        }
    }
}

impl ExtractParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn min_global_count(mut self, count: usize) -> Self {
        self.min_global_count = count;
        self
    }

    pub fn min_per_document_count(mut self, count: usize) -> Self {
        self.min_per_document_count = count;
        self
    }

    pub fn stopword(mut self, word: impl Into<String>) -> Self {
        self.extra_stopwords.insert(word.into());
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// The effective stop-word set: base list plus `extra_stopwords`.
    pub fn stop_words(&self) -> StopWords {
        StopWords::with_extra(&self.extra_stopwords)
    }
}

/// Extract the recurring motifs of a corpus.
///
/// Returns at most `params.top_k` unigrams and bigrams, ordered by count
/// descending then term ascending. Never fails: an empty corpus, text made
/// only of stop words, or `top_k == 0` all yield an empty or short list.
pub fn extract_motifs<S: AsRef<str>>(documents: &[S], params: &ExtractParams) -> Vec<Motif> {
    if documents.is_empty() || params.top_k == 0 {
        return Vec::new();
    }

    let stop_words = params.stop_words();
    let tokenizer = Tokenizer::with_stop_words(stop_words);
    let tables = FrequencyTables::build(documents, &tokenizer);

    rank(&tables, tokenizer.stop_words(), params)
}

/// Qualify, merge, sort and truncate the terms of pre-built tables.
pub fn rank(
    tables: &FrequencyTables,
    stop_words: &StopWords,
    params: &ExtractParams,
) -> Vec<Motif> {
    let mut motifs: Vec<Motif> = tables
        .words()
        .filter(|&(word, count)| {
            (count >= params.min_global_count
                || tables.max_document_count(word) >= params.min_per_document_count)
                && !stop_words.contains(word)
        })
        .map(|(word, count)| Motif::new(word, count))
        .collect();
    let unigrams = motifs.len();

    motifs.extend(
        tables
            .bigrams()
            .filter(|&(_, count)| count >= BIGRAM_MIN_COUNT)
            .map(|(bigram, count)| Motif::new(bigram, count)),
    );

    debug!(
        "motifs: {} documents, {} words, {} bigrams; {} unigrams and {} bigrams qualify",
        tables.doc_count(),
        tables.term_count(),
        tables.bigram_term_count(),
        unigrams,
        motifs.len() - unigrams,
    );

    motifs.sort_by(Motif::rank_cmp);
    motifs.truncate(params.top_k);

    trace!("top motifs: {:?}", motifs);
    motifs
}
