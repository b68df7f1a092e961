// src/core/readability.rs
use std::fmt;
use std::path::Path;

use crate::core::analysis::analyze_document;
use crate::core::pass::PassOutcome;
use crate::error::{AnalysisError, Result};
use crate::models::{BasicStats, SentenceStats, WordStats};
use crate::utils::{ratio, round_to};

/// LIX readability: average sentence length plus the percentage of words
/// longer than six letters, rounded to one decimal.
///
/// # Errors
///
/// `AnalysisError::DivisionUndefined` when there are no sentences or no words.
#[inline]
pub fn lix(total_words: usize, sentence_count: usize, long_words: usize) -> Result<f64> {
    match (
        ratio(total_words, sentence_count),
        ratio(long_words.saturating_mul(100), total_words),
    ) {
        (Some(words_per_sentence), Some(long_share)) => {
            Ok(round_to(words_per_sentence + long_share, 1))
        }
        _ => Err(AnalysisError::DivisionUndefined { metric: "LIX" }),
    }
}

/// LIX from the three aggregates that feed it.
///
/// # Errors
///
/// `AnalysisError::DivisionUndefined` when there are no sentences or no words.
#[inline]
pub fn lix_for(basic: &BasicStats, words: &WordStats, sentences: &SentenceStats) -> Result<f64> {
    lix(
        basic.total_words,
        sentences.sentence_count,
        words.words_above_length_6,
    )
}

/// LIX of the document at `path`, `None` when undefined.
#[must_use]
pub fn readability(path: &Path) -> PassOutcome<Option<f64>> {
    analyze_document(path).map(|analysis| analysis.lix_score)
}

/// Conventional interpretation bands for LIX scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LixBand {
    VeryEasy,
    Easy,
    Medium,
    Difficult,
    VeryDifficult,
}

impl LixBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            Self::VeryEasy
        } else if score < 35.0 {
            Self::Easy
        } else if score < 45.0 {
            Self::Medium
        } else if score < 55.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }
}

impl fmt::Display for LixBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very difficult",
        };
        f.write_str(label)
    }
}
