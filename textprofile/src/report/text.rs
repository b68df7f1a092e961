// src/report/text.rs
use std::fmt::{Display, Write as _};

use crate::core::LixBand;
use crate::core::ranking::Ranking;
use crate::error::Result;
use crate::report::Report;

const RULE: &str = "========================================";

/// Plain-text export: one `key: value` per line, sections delimited by
/// `== name ==` headers, ranked tables indented beneath their key.
///
/// # Errors
///
/// Only fails if writing into the buffer fails.
pub fn render_text(report: &Report) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{RULE}")?;
    writeln!(out, "Text analysis report ({})", report.mode.file_stem())?;
    writeln!(out, "source: {}", report.source)?;
    writeln!(out, "{RULE}")?;

    let basic = &report.basic_statistics;
    section(&mut out, "basic statistics")?;
    writeln!(out, "total_lines: {}", basic.total_lines)?;
    writeln!(out, "total_words: {}", basic.total_words)?;
    writeln!(out, "total_characters: {}", basic.total_characters)?;
    writeln!(out, "total_characters_no_spaces: {}", basic.total_characters_no_spaces)?;
    writeln!(out, "avg_words_per_line: {}", basic.avg_words_per_line)?;
    writeln!(out, "avg_characters_per_word: {}", basic.avg_characters_per_word)?;

    section(&mut out, "lix score")?;
    match report.lix_score {
        Some(score) => writeln!(out, "lix_score: {score} ({})", LixBand::from_score(score))?,
        None => writeln!(out, "lix_score: undefined")?,
    }

    let words = &report.word_analysis;
    section(&mut out, "word analysis")?;
    writeln!(out, "unique_word_count: {}", words.unique_word_count)?;
    writeln!(out, "words_only_once_count: {}", words.words_only_once_count)?;
    writeln!(out, "words_above_length_6: {}", words.words_above_length_6)?;
    ranking(&mut out, "top_10_words", &words.top_10_words)?;
    optional_list(&mut out, "word_lengths_unique", words.word_lengths_unique.as_deref())?;
    optional_list(
        &mut out,
        "word_lengths_with_duplicates",
        words.word_lengths_with_duplicates.as_deref(),
    )?;
    optional_list(&mut out, "unique_words", words.unique_words.as_deref())?;
    optional_list(&mut out, "words_only_once", words.words_only_once.as_deref())?;

    let sentences = &report.sentence_analysis;
    section(&mut out, "sentence analysis")?;
    writeln!(out, "sentence_count: {}", sentences.sentence_count)?;
    writeln!(
        out,
        "average_words_per_sentence: {}",
        sentences.average_words_per_sentence
    )?;
    ranking(&mut out, "top_10_sentence_lengths", &sentences.top_10_sentence_lengths)?;
    if let Some(shortest) = &sentences.shortest_sentence {
        writeln!(out, "shortest_sentence: {}", shortest.join(" "))?;
    }
    if let Some(longest) = &sentences.longest_sentence {
        writeln!(out, "longest_sentence: {}", longest.join(" "))?;
    }
    optional_list(
        &mut out,
        "sentence_length_distribution",
        sentences.sentence_length_distribution.as_deref(),
    )?;
    if let Some(list) = &sentences.sentences {
        writeln!(out, "sentences:")?;
        for sentence in list {
            writeln!(out, "  {sentence}")?;
        }
    }

    let chars = &report.character_analysis;
    section(&mut out, "character analysis")?;
    writeln!(out, "total_chars: {}", chars.total_chars)?;
    writeln!(out, "total_letters: {}", chars.total_letters)?;
    writeln!(out, "total_upper: {}", chars.total_upper)?;
    writeln!(out, "total_lower: {}", chars.total_lower)?;
    writeln!(out, "total_digits: {}", chars.total_digits)?;
    writeln!(out, "total_spaces: {}", chars.total_spaces)?;
    writeln!(out, "total_punctuation: {}", chars.total_punctuation)?;
    writeln!(out, "other_chars: {}", chars.other_chars)?;
    ranking(&mut out, "top_12_letters", &chars.top_12_letters)?;
    if let Some(frequency) = &chars.letter_frequency {
        ranking(&mut out, "letter_frequency", frequency)?;
    }

    Ok(out)
}

fn section(out: &mut String, name: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "== {name} ==")
}

fn ranking<K: Display>(out: &mut String, name: &str, ranking: &Ranking<K>) -> std::fmt::Result {
    writeln!(out, "{name}:")?;
    for (key, count) in ranking.iter() {
        writeln!(out, "  {key}: {count}")?;
    }
    Ok(())
}

fn optional_list<T: Display>(out: &mut String, name: &str, items: Option<&[T]>) -> std::fmt::Result {
    if let Some(items) = items {
        let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
        writeln!(out, "{name}: {}", joined.join(", "))?;
    }
    Ok(())
}
