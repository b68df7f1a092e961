// src/models/sentence_stats.rs
use serde::{Deserialize, Serialize};

use crate::core::ranking::Ranking;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceStats {
    pub sentence_count: usize,
    /// Whitespace words of the whole document, the numerator of the average.
    pub document_words: usize,
    pub average_words_per_sentence: f64,
    pub shortest_sentence: Option<Vec<String>>,
    pub longest_sentence: Option<Vec<String>>,
    /// Word count of each sentence, in document order.
    pub sentence_length_distribution: Vec<usize>,
    pub top_10_sentence_lengths: Ranking<usize>,
    pub sentences: Vec<String>,
}

impl SentenceStats {
    #[inline]
    #[must_use]
    pub const fn has_sentences(&self) -> bool {
        self.sentence_count > 0
    }
}
