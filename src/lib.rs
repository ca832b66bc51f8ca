//! Recurring-motif extraction for journal text.
//!
//! Given a corpus of free-form entries, [`extract_motifs`] finds the words
//! and two-word phrases that keep coming back, ranked by how often they
//! occur:
//!
//! ```
//! use motif_engine::{extract_motifs, ExtractParams};
//!
//! let docs = [
//!     "A dark forest path. The dark forest was silent.",
//!     "Another dark forest, and a portal.",
//! ];
//! let motifs = extract_motifs(&docs, &ExtractParams::default());
//! assert_eq!(motifs[0].term, "dark");
//! assert_eq!(motifs[0].count, 3);
//! ```

pub mod config;
pub mod corpus;
pub mod engine;
pub mod index;
pub mod types;

pub use config::MotifConfig;
pub use corpus::{parse_date, Corpus, JournalEntry};
pub use engine::{
    extract_motifs, summarize, CorpusStats, ExtractParams, Insights, StopWords, Tokenizer,
    BASE_STOP_WORDS,
};
pub use index::FrequencyTables;
pub use types::{Motif, MotifError, MotifResult, TermKind};
