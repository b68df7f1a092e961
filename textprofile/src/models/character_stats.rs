// src/models/character_stats.rs
use serde::{Deserialize, Serialize};

use crate::core::ranking::Ranking;

/// Classification of every character in the document.
///
/// Only `.`, `?` and `!` count as punctuation; commas, quotes, dashes and the
/// like fall into `other_chars`, which is derived by subtraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub total_chars: usize,
    pub total_letters: usize,
    pub total_upper: usize,
    pub total_lower: usize,
    pub total_digits: usize,
    pub total_spaces: usize,
    pub total_punctuation: usize,
    pub other_chars: usize,
    /// Case-folded letters in first-seen order.
    pub letter_frequency: Ranking<String>,
    /// At most twelve letters, count descending.
    pub top_letters: Ranking<String>,
}

impl CharacterStats {
    /// Sum of the classified buckets; equals `total_chars` by construction.
    #[inline]
    #[must_use]
    pub const fn classified_total(&self) -> usize {
        self.total_letters
            .saturating_add(self.total_punctuation)
            .saturating_add(self.total_digits)
            .saturating_add(self.total_spaces)
            .saturating_add(self.other_chars)
    }
}
