//! Extraction defaults loaded from a TOML file.
//!
//! ```toml
//! [extract]
//! top_k = 20
//! min_global_count = 3
//! min_per_document_count = 2
//! stopwords = ["lucid"]
//! ```
//!
//! Values are read as signed integers so that a negative setting is reported
//! as [`MotifError::InvalidArgument`] instead of a parse failure.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::engine::ExtractParams;
use crate::types::{MotifError, MotifResult};

/// Directory under the user config dir that holds `config.toml`.
pub const CONFIG_DIR_NAME: &str = "motif";

/// File name looked up by [`MotifConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotifConfig {
    pub extract: ExtractSection,
}

/// The `[extract]` table. Unset values fall back to the library defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSection {
    pub top_k: Option<i64>,
    pub min_global_count: Option<i64>,
    pub min_per_document_count: Option<i64>,
    pub stopwords: Vec<String>,
}

impl MotifConfig {
    pub fn from_toml_str(s: &str) -> MotifResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> MotifResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| MotifError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config_dir>/motif/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the user config file when it exists, defaults otherwise.
    pub fn discover() -> MotifResult<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no user config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the `[extract]` table into extraction parameters.
    pub fn extract_params(&self) -> MotifResult<ExtractParams> {
        let defaults = ExtractParams::default();
        let section = &self.extract;
        Ok(ExtractParams {
            top_k: non_negative("top_k", section.top_k, defaults.top_k)?,
            min_global_count: non_negative(
                "min_global_count",
                section.min_global_count,
                defaults.min_global_count,
            )?,
            min_per_document_count: non_negative(
                "min_per_document_count",
                section.min_per_document_count,
                defaults.min_per_document_count,
            )?,
            extra_stopwords: section.stopwords.iter().cloned().collect(),
        })
    }
}

fn non_negative(name: &'static str, value: Option<i64>, default: usize) -> MotifResult<usize> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v)
            .map_err(|_| MotifError::invalid_argument(name, format!("must be >= 0, got {v}"))),
    }
}
