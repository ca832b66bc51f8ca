//! Ranked result items.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a term is a single word or an adjacent-word pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Unigram,
    Bigram,
}

impl TermKind {
    /// Classify a normalized term. Bigrams are the only terms containing a space.
    pub fn of(term: &str) -> Self {
        if term.contains(' ') {
            TermKind::Bigram
        } else {
            TermKind::Unigram
        }
    }
}

/// A recurring term and its total count across the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motif {
    pub term: String,
    pub count: usize,
}

impl Motif {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }

    pub fn kind(&self) -> TermKind {
        TermKind::of(&self.term)
    }

    /// Ranking order: count descending, then term ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.count)
    }
}
