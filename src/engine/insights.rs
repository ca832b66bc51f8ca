//! Corpus summary for statistics views: counts plus top words and phrases.

use log::debug;
use serde::Serialize;

use crate::index::FrequencyTables;
use crate::types::{Motif, TermKind};

use super::extract::{rank, ExtractParams};
use super::tokenizer::Tokenizer;

/// Size figures for one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub documents: usize,
    /// Documents that produced no tokens at all.
    pub empty_documents: usize,
    pub tokens: usize,
    pub distinct_words: usize,
    pub distinct_bigrams: usize,
}

impl CorpusStats {
    pub fn from_tables(tables: &FrequencyTables) -> Self {
        Self {
            documents: tables.doc_count(),
            empty_documents: tables.empty_doc_count(),
            tokens: tables.token_count(),
            distinct_words: tables.term_count(),
            distinct_bigrams: tables.bigram_term_count(),
        }
    }
}

/// Result of [`summarize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub stats: CorpusStats,
    /// Same list `extract_motifs` returns for the same parameters.
    pub motifs: Vec<Motif>,
    /// First `top_n` single-word motifs of `motifs`.
    pub top_words: Vec<Motif>,
    /// First `top_n` two-word motifs of `motifs`.
    pub top_phrases: Vec<Motif>,
}

/// Build corpus statistics and ranked motifs in one pass over the text.
pub fn summarize<S: AsRef<str>>(documents: &[S], params: &ExtractParams, top_n: usize) -> Insights {
    if documents.is_empty() {
        return Insights::default();
    }

    let tokenizer = Tokenizer::with_stop_words(params.stop_words());
    let tables = FrequencyTables::build(documents, &tokenizer);
    let stats = CorpusStats::from_tables(&tables);
    let motifs = rank(&tables, tokenizer.stop_words(), params);

    let pick = |kind: TermKind| -> Vec<Motif> {
        motifs
            .iter()
            .filter(|m| m.kind() == kind)
            .take(top_n)
            .cloned()
            .collect()
    };
    let top_words = pick(TermKind::Unigram);
    let top_phrases = pick(TermKind::Bigram);

    debug!(
        "insights: {} documents, {} tokens, {} motifs",
        stats.documents,
        stats.tokens,
        motifs.len()
    );

    Insights {
        stats,
        motifs,
        top_words,
        top_phrases,
    }
}
