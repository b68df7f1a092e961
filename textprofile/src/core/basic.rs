// src/core/basic.rs
use std::path::Path;

use crate::core::pass::{Accumulator, PassOutcome, run_pass};
use crate::core::tokenizer::raw_word_count;
use crate::error::AnalysisError;
use crate::models::BasicStats;
use crate::utils::{ratio, round_to};

/// Line, raw word and character totals.
#[derive(Debug, Default)]
pub struct BasicAccumulator {
    lines: usize,
    words: usize,
    characters: usize,
    characters_no_spaces: usize,
}

impl BasicAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            words: 0,
            characters: 0,
            characters_no_spaces: 0,
        }
    }
}

impl Accumulator for BasicAccumulator {
    type Output = BasicStats;

    fn push_line(&mut self, line: &str) {
        self.lines = self.lines.saturating_add(1);
        self.words = self.words.saturating_add(raw_word_count(line));
        self.characters = self.characters.saturating_add(line.chars().count());
        let no_spaces = line.trim().chars().filter(|&c| c != ' ').count();
        self.characters_no_spaces = self.characters_no_spaces.saturating_add(no_spaces);
    }

    fn finish(self) -> BasicStats {
        let mut stats = BasicStats {
            total_lines: self.lines,
            total_words: self.words,
            total_characters: self.characters,
            total_characters_no_spaces: self.characters_no_spaces,
            ..BasicStats::new()
        };

        if stats.is_empty() {
            log::warn!("{}; averages reported as 0", AnalysisError::EmptyDocument);
            return stats;
        }

        stats.avg_words_per_line =
            ratio(stats.total_words, stats.total_lines).map_or(0.0, |avg| round_to(avg, 3));
        match ratio(stats.total_characters_no_spaces, stats.total_words) {
            Some(avg) => stats.avg_characters_per_word = round_to(avg, 3),
            None => log::warn!("no words found; average characters per word reported as 0"),
        }

        stats
    }
}

/// Basic statistics from an independent pass over `path`.
#[must_use]
pub fn basic_statistics(path: &Path) -> PassOutcome<BasicStats> {
    log::debug!("basic statistics pass over {}", path.display());
    run_pass(path, BasicAccumulator::new())
}
