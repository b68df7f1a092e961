// src/models/word_stats.rs
use serde::{Deserialize, Serialize};

use crate::core::ranking::Ranking;

/// Frequency profile of the canonical (cleaned, lower-cased) words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    /// Canonical word occurrences, duplicates included.
    pub total_tokens: usize,
    pub unique_word_count: usize,
    pub words_only_once_count: usize,
    /// Occurrences longer than six characters, the LIX "long words".
    pub words_above_length_6: usize,
    /// One length per distinct word, in first-seen order.
    pub word_lengths_unique: Vec<usize>,
    /// One length per occurrence, in document order.
    pub word_lengths_with_duplicates: Vec<usize>,
    /// At most ten words, keyed by their capitalized form.
    pub top_words: Ranking<String>,
    pub unique_words: Vec<String>,
    pub words_only_once: Vec<String>,
}

impl WordStats {
    #[inline]
    #[must_use]
    pub fn has_words(&self) -> bool {
        self.total_tokens > 0
    }
}
