//! Base stop-word list and per-call stop-word sets.

use std::collections::HashSet;

/// Words that never stand alone as a motif. All entries are lower-case and
/// at least three characters long; shorter words are already dropped by the
/// length filter.
pub const BASE_STOP_WORDS: &[&str] = &[
    // articles, determiners, quantifiers
    "the", "this", "that", "these", "those", "another", "any", "all", "each", "every", "some",
    "such", "both", "few", "many", "much", "more", "most", "other", "own", "same", "several",
    // pronouns
    "you", "your", "yours", "she", "her", "hers", "him", "his", "its", "they", "them", "their",
    "theirs", "our", "ours", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "themselves", "who", "whom", "whose", "what", "which", "someone", "something", "anyone",
    "anything", "everyone", "everything", "nobody", "nothing",
    // auxiliaries and modals
    "are", "was", "were", "been", "being", "have", "has", "had", "having", "does", "did",
    "doing", "will", "would", "could", "should", "shall", "may", "might", "must", "can",
    "cannot",
    // contractions left after possessive stripping
    "i'm", "i've", "i'd", "i'll", "you're", "you've", "you'd", "you'll", "he'd", "he'll",
    "she'd", "she'll", "we're", "we've", "we'd", "we'll", "they're", "they've", "they'd",
    "they'll", "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't",
    "wouldn't", "couldn't", "shouldn't", "can't", "haven't", "hasn't", "hadn't",
    // prepositions and conjunctions
    "and", "but", "nor", "for", "yet", "with", "without", "from", "into", "onto", "upon",
    "about", "above", "below", "over", "under", "after", "before", "between", "during",
    "until", "while", "against", "around", "toward", "towards", "then", "than", "because",
    "since", "unless", "although", "though", "whether",
    // adverbs and fillers
    "not", "very", "too", "also", "just", "only", "really", "quite", "there", "here", "now",
    "when", "where", "why", "how", "again", "still", "even", "ever", "never", "always",
    "maybe", "perhaps", "like", "well", "back", "out", "off", "down", "away", "once",
    "kind", "sort", "bit", "lot", "thing", "things",
    // light verbs
    "get", "got", "getting", "make", "made", "went", "going", "gone", "come", "came", "take",
    "took", "taken", "give", "gave", "given", "say", "said", "says", "see", "saw", "seen",
    "know", "knew", "think", "thought", "felt", "feel", "seemed", "seems", "remember",
    "remembered",
    // journal boilerplate
    "dream", "dreams", "dreamed", "dreamt", "dreaming", "woke", "wake", "waking", "night",
    "last", "today", "tonight", "yesterday",
];

/// The effective stop-word set for one extraction call: the base list plus
/// any caller-supplied extras, all lower-cased.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The base list only.
    pub fn new() -> Self {
        Self {
            words: BASE_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Base list extended with `extra` (case-insensitive).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(extra);
        set
    }

    /// Merge additional words into the set, lower-casing each one.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Membership test. `word` is expected to be lower-case already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
