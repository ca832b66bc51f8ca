//! Error types for the corpus, config and CLI layers.
//!
//! Extraction itself never fails; only the code that reads input from
//! disk or validates caller-supplied settings returns [`MotifResult`].

use std::path::PathBuf;

/// Errors raised outside the pure extraction core.
#[derive(Debug, thiserror::Error)]
pub enum MotifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl MotifError {
    /// Shorthand for [`MotifError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type MotifResult<T> = Result<T, MotifError>;
