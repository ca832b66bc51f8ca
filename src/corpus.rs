//! Journal entries and the corpora built from them.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::types::{MotifError, MotifResult};

/// One journal entry. Missing JSON fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    pub title: String,
    pub body: String,
    pub date: Option<NaiveDate>,
}

impl JournalEntry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The text submitted for analysis: title and body joined by a space,
    /// skipping whichever is blank.
    pub fn document(&self) -> String {
        let title = self.title.trim();
        let body = self.body.trim();
        match (title.is_empty(), body.is_empty()) {
            (true, _) => body.to_string(),
            (false, true) => title.to_string(),
            (false, false) => format!("{title} {body}"),
        }
    }
}

/// An ordered collection of journal entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<JournalEntry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> MotifResult<Self> {
        let entries: Vec<JournalEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Split text into entries at blank lines. Each block becomes one body.
    pub fn from_paragraphs(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut block: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    entries.push(JournalEntry::new("", block.join("\n")));
                    block.clear();
                }
            } else {
                block.push(line);
            }
        }
        if !block.is_empty() {
            entries.push(JournalEntry::new("", block.join("\n")));
        }
        Self { entries }
    }

    /// Load a JSON array of entries from a file.
    pub fn load_json(path: &Path) -> MotifResult<Self> {
        let corpus = Self::from_json_str(&read(path)?)?;
        info!("loaded {} entries from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Load a plain-text file as a single entry.
    pub fn load_text(path: &Path) -> MotifResult<Self> {
        let body = read(path)?;
        if body.trim().is_empty() {
            warn!("{} is empty", path.display());
        }
        Ok(Self {
            entries: vec![JournalEntry::new("", body)],
        })
    }

    /// Load by extension: `.json` files hold an entry array, anything else
    /// is one plain-text entry.
    pub fn load(path: &Path) -> MotifResult<Self> {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::load_json(path)
        } else {
            Self::load_text(path)
        }
    }

    /// Load and concatenate several files, in order.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> MotifResult<Self> {
        let mut corpus = Self::new();
        for path in paths {
            corpus.extend(Self::load(path.as_ref())?);
        }
        Ok(corpus)
    }

    pub fn push(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: Corpus) {
        self.entries.extend(other.entries);
    }

    /// Entries dated within `[since, until]`. With no bounds every entry is
    /// kept; with any bound, undated entries are dropped.
    pub fn between(&self, since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        if since.is_none() && until.is_none() {
            return self.clone();
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| match entry.date {
                Some(date) => {
                    since.map_or(true, |s| date >= s) && until.map_or(true, |u| date <= u)
                }
                None => false,
            })
            .cloned()
            .collect();
        Self { entries }
    }

    /// Analysis text of each entry, in order.
    pub fn documents(&self) -> Vec<String> {
        self.entries.iter().map(JournalEntry::document).collect()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<JournalEntry> for Corpus {
    fn from_iter<I: IntoIterator<Item = JournalEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> MotifResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| MotifError::InvalidDate(s.to_string()))
}

fn read(path: &Path) -> MotifResult<String> {
    fs::read_to_string(path).map_err(|source| MotifError::Read {
        path: path.to_path_buf(),
        source,
    })
}
