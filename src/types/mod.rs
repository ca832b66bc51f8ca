//! Core data types shared across the crate.

pub mod error;
pub mod motif;

pub use error::{MotifError, MotifResult};
pub use motif::{Motif, TermKind};

/// Default maximum number of motifs returned.
pub const DEFAULT_TOP_K: usize = 20;

/// Default corpus-wide count a word needs to qualify.
pub const DEFAULT_MIN_GLOBAL_COUNT: usize = 3;

/// Default count a word needs within a single document to qualify.
pub const DEFAULT_MIN_PER_DOCUMENT_COUNT: usize = 2;

/// Corpus-wide count a bigram needs to qualify. Not configurable.
pub const BIGRAM_MIN_COUNT: usize = 2;

/// Minimum token length, in characters, after possessive stripping.
pub const MIN_TOKEN_CHARS: usize = 3;
