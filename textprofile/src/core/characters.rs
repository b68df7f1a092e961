// src/core/characters.rs
use std::path::Path;

use crate::core::pass::{Accumulator, PassOutcome, run_pass};
use crate::core::ranking::FrequencyTable;
use crate::core::tokenizer::is_stopper;
use crate::models::CharacterStats;

pub const TOP_LETTERS: usize = 12;

#[derive(Debug, Default)]
pub struct CharacterAccumulator {
    total: usize,
    letters: usize,
    upper: usize,
    lower: usize,
    digits: usize,
    spaces: usize,
    punctuation: usize,
    letter_frequencies: FrequencyTable<char>,
}

impl CharacterAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for CharacterAccumulator {
    type Output = CharacterStats;

    fn push_line(&mut self, line: &str) {
        for c in line.chars() {
            self.total = self.total.saturating_add(1);
            if c.is_alphabetic() {
                self.letters = self.letters.saturating_add(1);
                if c.is_uppercase() {
                    self.upper = self.upper.saturating_add(1);
                } else if c.is_lowercase() {
                    self.lower = self.lower.saturating_add(1);
                }
                self.letter_frequencies
                    .record(c.to_lowercase().next().unwrap_or(c));
            } else if c.is_numeric() {
                self.digits = self.digits.saturating_add(1);
            } else if c.is_whitespace() {
                self.spaces = self.spaces.saturating_add(1);
            } else if is_stopper(c) {
                self.punctuation = self.punctuation.saturating_add(1);
            }
        }
    }

    fn finish(self) -> CharacterStats {
        let classified = self
            .letters
            .saturating_add(self.digits)
            .saturating_add(self.spaces)
            .saturating_add(self.punctuation);

        CharacterStats {
            total_chars: self.total,
            total_letters: self.letters,
            total_upper: self.upper,
            total_lower: self.lower,
            total_digits: self.digits,
            total_spaces: self.spaces,
            total_punctuation: self.punctuation,
            other_chars: self.total.saturating_sub(classified),
            top_letters: self
                .letter_frequencies
                .top(TOP_LETTERS)
                .map_keys(String::from),
            letter_frequency: self.letter_frequencies.into_ranking().map_keys(String::from),
        }
    }
}

/// Character statistics from an independent pass over `path`.
#[must_use]
pub fn character_statistics(path: &Path) -> PassOutcome<CharacterStats> {
    log::debug!("character analysis pass over {}", path.display());
    run_pass(path, CharacterAccumulator::new())
}
