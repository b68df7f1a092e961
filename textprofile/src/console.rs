// src/console.rs
use std::io::{self, Write};
use std::path::Path;

use crate::chart::{self, ChartSeries};
use crate::core::ranking::Ranking;
use crate::core::{
    LixBand, PassOutcome, basic_statistics, character_statistics, readability,
    sentence_statistics, word_statistics,
};
use crate::models::{BasicStats, CharacterStats, SentenceStats, WordStats};

/// One of the four profiles a document can be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Words,
    Sentences,
    Characters,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Basic, Self::Words, Self::Sentences, Self::Characters];
}

/// Runs the pass behind `section` over `path` and prints the result,
/// followed by its charts when `chart_width` is set.
///
/// A pass that stops early is reported and its partial statistics are
/// still printed.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub fn show_section<W: Write>(
    out: &mut W,
    section: Section,
    path: &Path,
    chart_width: Option<usize>,
) -> io::Result<()> {
    let series = match section {
        Section::Basic => {
            let stats = report_failure(out, path, basic_statistics(path))?;
            let lix_score = report_failure(out, path, readability(path))?;
            print_basic(out, &stats, lix_score)?;
            vec![ChartSeries::readability(&stats, lix_score)]
        }
        Section::Words => {
            let stats = report_failure(out, path, word_statistics(path))?;
            print_words(out, &stats)?;
            vec![ChartSeries::top_words(&stats), ChartSeries::word_lengths(&stats)]
        }
        Section::Sentences => {
            let stats = report_failure(out, path, sentence_statistics(path))?;
            print_sentences(out, &stats)?;
            vec![
                ChartSeries::sentence_lengths(&stats),
                ChartSeries::top_sentence_lengths(&stats),
            ]
        }
        Section::Characters => {
            let stats = report_failure(out, path, character_statistics(path))?;
            print_characters(out, &stats)?;
            vec![
                ChartSeries::character_types(&stats),
                ChartSeries::letter_case(&stats),
                ChartSeries::top_letters(&stats),
            ]
        }
    };

    if let Some(width) = chart_width {
        for s in &series {
            let rendered = chart::render_text(s, width).map_err(io::Error::other)?;
            writeln!(out, "{rendered}")?;
        }
    }
    Ok(())
}

fn report_failure<W: Write, T>(out: &mut W, path: &Path, outcome: PassOutcome<T>) -> io::Result<T> {
    if let Some(err) = &outcome.error {
        writeln!(out, "Analysis of {} stopped early: {err}", path.display())?;
    }
    Ok(outcome.stats)
}

pub fn print_basic<W: Write>(out: &mut W, stats: &BasicStats, lix_score: Option<f64>) -> io::Result<()> {
    writeln!(out)?;
    if stats.is_empty() {
        writeln!(out, "The document is empty. Averages are reported as 0.")?;
    }
    writeln!(out, "Total Lines: {}", stats.total_lines)?;
    writeln!(out, "Total Words: {}", stats.total_words)?;
    writeln!(out, "Total Characters (with spaces): {}", stats.total_characters)?;
    writeln!(
        out,
        "Total Characters (without spaces): {}",
        stats.total_characters_no_spaces
    )?;
    writeln!(out, "Average Words per Line: {}", stats.avg_words_per_line)?;
    writeln!(out, "Average Characters per Word: {}", stats.avg_characters_per_word)?;
    match lix_score {
        Some(score) => writeln!(out, "LIX Score: {score} ({})", LixBand::from_score(score))?,
        None => writeln!(out, "LIX Score: undefined")?,
    }
    writeln!(out)
}

pub fn print_words<W: Write>(out: &mut W, stats: &WordStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Words: {}", stats.total_tokens)?;
    writeln!(out, "Unique Words: {}", stats.unique_word_count)?;
    writeln!(out, "Words Used Only Once: {}", stats.words_only_once_count)?;
    writeln!(out, "Words Longer Than 6 Letters: {}", stats.words_above_length_6)?;
    print_ranking(out, "Most Common Words", &stats.top_words)?;
    writeln!(out)
}

pub fn print_sentences<W: Write>(out: &mut W, stats: &SentenceStats) -> io::Result<()> {
    writeln!(out)?;
    if !stats.has_sentences() {
        writeln!(out, "No sentences found. Average words per sentence is reported as 0.")?;
    }
    writeln!(out, "Total Sentences: {}", stats.sentence_count)?;
    writeln!(
        out,
        "Average Words per Sentence: {}",
        stats.average_words_per_sentence
    )?;
    if let Some(shortest) = &stats.shortest_sentence {
        writeln!(out, "Shortest Sentence: {}", shortest.join(" "))?;
    }
    if let Some(longest) = &stats.longest_sentence {
        writeln!(out, "Longest Sentence: {}", longest.join(" "))?;
    }
    print_ranking(out, "Most Common Sentence Lengths", &stats.top_10_sentence_lengths)?;
    writeln!(out)
}

pub fn print_characters<W: Write>(out: &mut W, stats: &CharacterStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Characters: {}", stats.total_chars)?;
    writeln!(out, "Letters: {}", stats.total_letters)?;
    writeln!(out, "Uppercase Letters: {}", stats.total_upper)?;
    writeln!(out, "Lowercase Letters: {}", stats.total_lower)?;
    writeln!(out, "Digits: {}", stats.total_digits)?;
    writeln!(out, "Spaces: {}", stats.total_spaces)?;
    writeln!(out, "Punctuation: {}", stats.total_punctuation)?;
    writeln!(out, "Other Characters: {}", stats.other_chars)?;
    print_ranking(out, "Most Common Letters", &stats.top_letters)?;
    writeln!(out)
}

fn print_ranking<W: Write, K: std::fmt::Display>(
    out: &mut W,
    title: &str,
    ranking: &Ranking<K>,
) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    for (key, count) in ranking.iter() {
        writeln!(out, "{count:8}  {key}")?;
    }
    Ok(())
}
