//! Text analytics: tokenization, motif extraction and corpus insights.

pub mod extract;
pub mod insights;
pub mod stopwords;
pub mod tokenizer;

pub use extract::{extract_motifs, rank, ExtractParams};
pub use insights::{summarize, CorpusStats, Insights};
pub use stopwords::{StopWords, BASE_STOP_WORDS};
pub use tokenizer::Tokenizer;
