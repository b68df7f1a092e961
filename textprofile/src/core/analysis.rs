// src/core/analysis.rs
use std::path::Path;

use crate::core::basic::BasicAccumulator;
use crate::core::characters::CharacterAccumulator;
use crate::core::pass::{Accumulator, PassOutcome, run_pass, run_text};
use crate::core::readability::lix_for;
use crate::core::sentences::SentenceAccumulator;
use crate::core::words::WordAccumulator;
use crate::models::{BasicStats, CharacterStats, SentenceStats, WordStats};

/// All four profiles of one document plus its LIX score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAnalysis {
    pub basic: BasicStats,
    pub words: WordStats,
    pub sentences: SentenceStats,
    pub characters: CharacterStats,
    pub lix_score: Option<f64>,
}

/// Feeds each line to all four accumulators in one read.
///
/// The accumulators share nothing, so the result equals four separate passes.
#[derive(Debug, Default)]
pub struct DocumentAccumulator {
    basic: BasicAccumulator,
    words: WordAccumulator,
    sentences: SentenceAccumulator,
    characters: CharacterAccumulator,
}

impl DocumentAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for DocumentAccumulator {
    type Output = DocumentAnalysis;

    fn push_line(&mut self, line: &str) {
        self.basic.push_line(line);
        self.words.push_line(line);
        self.sentences.push_line(line);
        self.characters.push_line(line);
    }

    fn finish(self) -> DocumentAnalysis {
        let basic = self.basic.finish();
        let words = self.words.finish();
        let sentences = self.sentences.finish();
        let characters = self.characters.finish();

        let lix_score = match lix_for(&basic, &words, &sentences) {
            Ok(score) => Some(score),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        };

        DocumentAnalysis {
            basic,
            words,
            sentences,
            characters,
            lix_score,
        }
    }
}

/// Every profile of `path` from a single shared pass.
#[must_use]
pub fn analyze_document(path: &Path) -> PassOutcome<DocumentAnalysis> {
    log::debug!("full analysis pass over {}", path.display());
    run_pass(path, DocumentAccumulator::new())
}

/// Every profile of an in-memory text.
#[must_use]
pub fn analyze_text(text: &str) -> DocumentAnalysis {
    run_text(text, DocumentAccumulator::new())
}
