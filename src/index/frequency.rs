//! Per-call frequency tables over words and adjacent-word pairs.

use std::collections::HashMap;

use crate::engine::tokenizer::Tokenizer;

/// Word and bigram counts for one corpus.
///
/// Built fresh for every extraction call and dropped on return.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
    /// word → total count across all documents.
    words: HashMap<String, usize>,
    /// One word → count map per input document, aligned with the input order.
    /// Documents without tokens get an empty map.
    per_document: Vec<HashMap<String, usize>>,
    /// word → highest count inside any single document.
    max_per_document: HashMap<String, usize>,
    /// "first second" → total count. Pairs never span two documents.
    bigrams: HashMap<String, usize>,
    /// Total number of tokens seen.
    token_count: usize,
}

impl FrequencyTables {
    /// Create empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize every document and count words and bigrams.
    pub fn build<S: AsRef<str>>(documents: &[S], tokenizer: &Tokenizer) -> Self {
        documents.iter().fold(Self::new(), |mut tables, doc| {
            let tokens = tokenizer.tokenize(doc.as_ref());
            tables.add_document(&tokens);
            tables
        })
    }

    /// Count one already-tokenized document.
    pub fn add_document(&mut self, tokens: &[String]) {
        let mut local: HashMap<String, usize> = HashMap::new();
        if tokens.is_empty() {
            self.per_document.push(local);
            return;
        }

        for token in tokens {
            *local.entry(token.clone()).or_insert(0) += 1;
            *self.words.entry(token.clone()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            *self.bigrams.entry(bigram).or_insert(0) += 1;
        }

        for (word, &count) in &local {
            let max = self.max_per_document.entry(word.clone()).or_insert(0);
            *max = (*max).max(count);
        }

        self.token_count += tokens.len();
        self.per_document.push(local);
    }

    /// Corpus-wide count for a word.
    pub fn word_count(&self, word: &str) -> usize {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Corpus-wide count for a bigram ("first second").
    pub fn bigram_count(&self, bigram: &str) -> usize {
        self.bigrams.get(bigram).copied().unwrap_or(0)
    }

    /// Count of `word` inside document `index`.
    pub fn document_count_of(&self, index: usize, word: &str) -> usize {
        self.per_document
            .get(index)
            .and_then(|doc| doc.get(word))
            .copied()
            .unwrap_or(0)
    }

    /// Highest count of `word` in any single document.
    pub fn max_document_count(&self, word: &str) -> usize {
        self.max_per_document.get(word).copied().unwrap_or(0)
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words.iter().map(|(w, &c)| (w.as_str(), c))
    }

    pub fn bigrams(&self) -> impl Iterator<Item = (&str, usize)> {
        self.bigrams.iter().map(|(b, &c)| (b.as_str(), c))
    }

    pub fn per_document(&self) -> &[HashMap<String, usize>] {
        &self.per_document
    }

    /// Number of documents counted, including empty ones.
    pub fn doc_count(&self) -> usize {
        self.per_document.len()
    }

    /// Number of documents that produced no tokens.
    pub fn empty_doc_count(&self) -> usize {
        self.per_document.iter().filter(|d| d.is_empty()).count()
    }

    /// Number of distinct words.
    pub fn term_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct bigrams.
    pub fn bigram_term_count(&self) -> usize {
        self.bigrams.len()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }
}
