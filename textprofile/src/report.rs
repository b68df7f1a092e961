// src/report.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::DocumentAnalysis;
use crate::core::ranking::Ranking;
use crate::models::{BasicStats, CharacterStats, SentenceStats, WordStats};

pub mod export;
pub mod text;

pub use export::{export_file_name, export_report, render};

/// How much detail an exported report carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Rollups and top-N tables only
    #[default]
    #[serde(rename = "normal", alias = "summary")]
    #[value(name = "normal", alias = "summary")]
    Summary,
    /// Adds raw distributions, word lists and sentences
    Comprehensive,
}

impl ReportMode {
    /// Prefix of the export file name.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Summary => "normal",
            Self::Comprehensive => "comprehensive",
        }
    }

    const fn is_comprehensive(self) -> bool {
        matches!(self, Self::Comprehensive)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited plain text
    #[default]
    Txt,
    /// Pretty-printed JSON
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub mode: ReportMode,
    pub basic_statistics: BasicStats,
    pub lix_score: Option<f64>,
    pub word_analysis: WordSection,
    pub sentence_analysis: SentenceSection,
    pub character_analysis: CharacterSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSection {
    pub unique_word_count: usize,
    pub words_only_once_count: usize,
    pub words_above_length_6: usize,
    pub top_10_words: Ranking<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_lengths_unique: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_lengths_with_duplicates: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_only_once: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSection {
    pub sentence_count: usize,
    pub average_words_per_sentence: f64,
    pub top_10_sentence_lengths: Ranking<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortest_sentence: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_sentence: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_length_distribution: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSection {
    pub total_chars: usize,
    pub total_letters: usize,
    pub total_upper: usize,
    pub total_lower: usize,
    pub total_digits: usize,
    pub total_spaces: usize,
    pub total_punctuation: usize,
    pub other_chars: usize,
    pub top_12_letters: Ranking<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_frequency: Option<Ranking<String>>,
}

impl Report {
    /// Builds the exportable view of `analysis`. A pure function: the same
    /// analysis and mode always give the same report.
    #[must_use]
    pub fn assemble(source: &Path, analysis: &DocumentAnalysis, mode: ReportMode) -> Self {
        let full = mode.is_comprehensive();
        Self {
            source: source.display().to_string(),
            mode,
            basic_statistics: analysis.basic.clone(),
            lix_score: analysis.lix_score,
            word_analysis: WordSection::new(&analysis.words, full),
            sentence_analysis: SentenceSection::new(&analysis.sentences, full),
            character_analysis: CharacterSection::new(&analysis.characters, full),
        }
    }
}

impl WordSection {
    fn new(stats: &WordStats, full: bool) -> Self {
        Self {
            unique_word_count: stats.unique_word_count,
            words_only_once_count: stats.words_only_once_count,
            words_above_length_6: stats.words_above_length_6,
            top_10_words: stats.top_words.clone(),
            word_lengths_unique: full.then(|| stats.word_lengths_unique.clone()),
            word_lengths_with_duplicates: full
                .then(|| stats.word_lengths_with_duplicates.clone()),
            unique_words: full.then(|| stats.unique_words.clone()),
            words_only_once: full.then(|| stats.words_only_once.clone()),
        }
    }
}

impl SentenceSection {
    fn new(stats: &SentenceStats, full: bool) -> Self {
        Self {
            sentence_count: stats.sentence_count,
            average_words_per_sentence: stats.average_words_per_sentence,
            top_10_sentence_lengths: stats.top_10_sentence_lengths.clone(),
            shortest_sentence: full.then(|| stats.shortest_sentence.clone()).flatten(),
            longest_sentence: full.then(|| stats.longest_sentence.clone()).flatten(),
            sentence_length_distribution: full
                .then(|| stats.sentence_length_distribution.clone()),
            sentences: full.then(|| stats.sentences.clone()),
        }
    }
}

impl CharacterSection {
    fn new(stats: &CharacterStats, full: bool) -> Self {
        Self {
            total_chars: stats.total_chars,
            total_letters: stats.total_letters,
            total_upper: stats.total_upper,
            total_lower: stats.total_lower,
            total_digits: stats.total_digits,
            total_spaces: stats.total_spaces,
            total_punctuation: stats.total_punctuation,
            other_chars: stats.other_chars,
            top_12_letters: stats.top_letters.clone(),
            letter_frequency: full.then(|| stats.letter_frequency.clone()),
        }
    }
}
