// src/core/sentences.rs
use std::path::Path;

use crate::core::pass::{Accumulator, PassOutcome, run_pass};
use crate::core::ranking::FrequencyTable;
use crate::core::tokenizer::{SentenceSplitter, raw_word_count};
use crate::models::SentenceStats;
use crate::utils::{ratio, round_to};

pub const TOP_SENTENCE_LENGTHS: usize = 10;

/// Sentence segmentation and length statistics.
///
/// The average divides the word count of the whole document, discarded
/// fragments included, by the number of surviving sentences.
#[derive(Debug, Default)]
pub struct SentenceAccumulator {
    splitter: SentenceSplitter,
    document_words: usize,
    lengths: Vec<usize>,
    length_frequencies: FrequencyTable<usize>,
    shortest: Option<Vec<String>>,
    longest: Option<Vec<String>>,
    sentences: Vec<String>,
}

impl SentenceAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, sentence: String) {
        let words: Vec<String> = sentence.split_whitespace().map(str::to_owned).collect();
        let length = words.len();

        // Strict comparisons: the first sentence to reach an extreme keeps it.
        if self.shortest.as_ref().is_none_or(|s| length < s.len()) {
            self.shortest = Some(words.clone());
        }
        if self.longest.as_ref().is_none_or(|s| length > s.len()) {
            self.longest = Some(words);
        }

        self.lengths.push(length);
        self.length_frequencies.record(length);
        self.sentences.push(sentence);
    }
}

impl Accumulator for SentenceAccumulator {
    type Output = SentenceStats;

    fn push_line(&mut self, line: &str) {
        self.document_words = self.document_words.saturating_add(raw_word_count(line));
        for sentence in self.splitter.push_line(line) {
            self.record(sentence);
        }
    }

    fn finish(self) -> SentenceStats {
        let _discarded = self.splitter.finish();
        let sentence_count = self.lengths.len();

        let average_words_per_sentence = match ratio(self.document_words, sentence_count) {
            Some(avg) => round_to(avg, 3),
            None => {
                log::warn!("no sentences found; average words per sentence reported as 0");
                0.0
            }
        };

        SentenceStats {
            sentence_count,
            document_words: self.document_words,
            average_words_per_sentence,
            shortest_sentence: self.shortest,
            longest_sentence: self.longest,
            sentence_length_distribution: self.lengths,
            top_10_sentence_lengths: self.length_frequencies.top(TOP_SENTENCE_LENGTHS),
            sentences: self.sentences,
        }
    }
}

/// Sentence statistics from an independent pass over `path`.
#[must_use]
pub fn sentence_statistics(path: &Path) -> PassOutcome<SentenceStats> {
    log::debug!("sentence analysis pass over {}", path.display());
    run_pass(path, SentenceAccumulator::new())
}
