// src/core/words.rs
use std::path::Path;

use crate::core::pass::{Accumulator, PassOutcome, run_pass};
use crate::core::ranking::FrequencyTable;
use crate::core::tokenizer::words_of;
use crate::models::WordStats;
use crate::utils::capitalize;

pub const TOP_WORDS: usize = 10;

/// Words strictly longer than this feed the LIX long-word share.
pub const LONG_WORD_THRESHOLD: usize = 6;

#[derive(Debug, Default)]
pub struct WordAccumulator {
    frequencies: FrequencyTable<String>,
    lengths_with_duplicates: Vec<usize>,
    lengths_unique: Vec<usize>,
    long_words: usize,
}

impl WordAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for WordAccumulator {
    type Output = WordStats;

    fn push_line(&mut self, line: &str) {
        for word in words_of(line) {
            let length = word.chars().count();
            self.lengths_with_duplicates.push(length);
            if length > LONG_WORD_THRESHOLD {
                self.long_words = self.long_words.saturating_add(1);
            }
            if self.frequencies.record(word) == 1 {
                self.lengths_unique.push(length);
            }
        }
    }

    fn finish(self) -> WordStats {
        let top_words = self.frequencies.top(TOP_WORDS).map_keys(|w| capitalize(&w));
        let unique_words: Vec<String> = self.frequencies.iter().map(|(w, _)| w.clone()).collect();
        let words_only_once: Vec<String> = self
            .frequencies
            .iter()
            .filter(|&(_, count)| count == 1)
            .map(|(w, _)| w.clone())
            .collect();

        if unique_words.is_empty() {
            log::warn!("no words found");
        }

        WordStats {
            total_tokens: self.lengths_with_duplicates.len(),
            unique_word_count: unique_words.len(),
            words_only_once_count: words_only_once.len(),
            words_above_length_6: self.long_words,
            word_lengths_unique: self.lengths_unique,
            word_lengths_with_duplicates: self.lengths_with_duplicates,
            top_words,
            unique_words,
            words_only_once,
        }
    }
}

/// Word frequency statistics from an independent pass over `path`.
#[must_use]
pub fn word_statistics(path: &Path) -> PassOutcome<WordStats> {
    log::debug!("word analysis pass over {}", path.display());
    run_pass(path, WordAccumulator::new())
}
