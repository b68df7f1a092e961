// src/models.rs
pub mod basic_stats;
pub mod character_stats;
pub mod sentence_stats;
pub mod word_stats;

pub use basic_stats::BasicStats;
pub use character_stats::CharacterStats;
pub use sentence_stats::SentenceStats;
pub use word_stats::WordStats;
