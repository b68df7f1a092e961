// src/core.rs
pub mod analysis;
pub mod basic;
pub mod characters;
pub mod pass;
pub mod ranking;
pub mod readability;
pub mod sentences;
pub mod source;
pub mod tokenizer;
pub mod words;


pub use analysis::{DocumentAnalysis, analyze_document, analyze_text};
pub use basic::basic_statistics;
pub use characters::character_statistics;
pub use pass::{Accumulator, PassOutcome};
pub use readability::{LixBand, lix, readability};
pub use sentences::sentence_statistics;
pub use source::LineSource;
pub use words::word_statistics;
