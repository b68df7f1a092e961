// src/models/basic_stats.rs
use serde::{Deserialize, Serialize};

/// Composition of a document: lines, raw words and characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_lines: usize,
    pub total_words: usize,
    pub total_characters: usize,
    pub total_characters_no_spaces: usize,
    pub avg_words_per_line: f64,
    pub avg_characters_per_word: f64,
}

impl BasicStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_lines: 0,
            total_words: 0,
            total_characters: 0,
            total_characters_no_spaces: 0,
            avg_words_per_line: 0.0,
            avg_characters_per_word: 0.0,
        }
    }

    /// A document with no lines at all. Its averages are reported as zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_lines == 0
    }
}
