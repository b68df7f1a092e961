// src/chart.rs
use std::collections::BTreeMap;
use std::fmt::{Display, Write as _};

use crate::core::LixBand;
use crate::core::ranking::Ranking;
use crate::error::Result;
use crate::models::{BasicStats, CharacterStats, SentenceStats, WordStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Histogram,
}

/// Labeled numbers handed to whatever draws charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub annotation: Option<String>,
}

impl ChartSeries {
    fn new(title: &str, kind: ChartKind) -> Self {
        Self {
            title: title.to_owned(),
            kind,
            labels: Vec::new(),
            values: Vec::new(),
            annotation: None,
        }
    }

    fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    #[must_use]
    fn annotated(mut self, annotation: String) -> Self {
        self.annotation = Some(annotation);
        self
    }

    #[must_use]
    pub fn basic(stats: &BasicStats) -> Self {
        let mut series = Self::new("Basic statistics", ChartKind::Bar);
        series.push("Lines", count(stats.total_lines));
        series.push("Words", count(stats.total_words));
        series.push("Characters (w/ spaces)", count(stats.total_characters));
        series.push("Characters (no spaces)", count(stats.total_characters_no_spaces));
        series.push("Average words per line", stats.avg_words_per_line);
        series.push("Average characters per word", stats.avg_characters_per_word);
        series
    }

    /// Bar chart of the basic totals, annotated with the LIX score.
    #[must_use]
    pub fn readability(stats: &BasicStats, lix_score: Option<f64>) -> Self {
        let series = Self::basic(stats);
        match lix_score {
            Some(score) => {
                series.annotated(format!("LIX {score} ({})", LixBand::from_score(score)))
            }
            None => series.annotated(String::from("LIX undefined")),
        }
    }

    #[must_use]
    pub fn top_words(stats: &WordStats) -> Self {
        ranked("Most common words", &stats.top_words)
    }

    #[must_use]
    pub fn word_lengths(stats: &WordStats) -> Self {
        histogram("Word length distribution", &stats.word_lengths_with_duplicates).annotated(
            format!(
                "{} unique words, {} used once",
                stats.unique_word_count, stats.words_only_once_count
            ),
        )
    }

    #[must_use]
    pub fn sentence_lengths(stats: &SentenceStats) -> Self {
        histogram(
            "Sentence length distribution",
            &stats.sentence_length_distribution,
        )
        .annotated(format!(
            "{} sentences, {} words per sentence",
            stats.sentence_count, stats.average_words_per_sentence
        ))
    }

    #[must_use]
    pub fn top_sentence_lengths(stats: &SentenceStats) -> Self {
        ranked("Most common sentence lengths", &stats.top_10_sentence_lengths)
    }

    #[must_use]
    pub fn character_types(stats: &CharacterStats) -> Self {
        let mut series = Self::new("Character types", ChartKind::Pie);
        series.push("Letters", count(stats.total_letters));
        series.push("Digits", count(stats.total_digits));
        series.push("Spaces", count(stats.total_spaces));
        series.push("Punctuation", count(stats.total_punctuation));
        series.push("Other", count(stats.other_chars));
        series
    }

    #[must_use]
    pub fn letter_case(stats: &CharacterStats) -> Self {
        let mut series = Self::new("Letter case", ChartKind::Pie);
        series.push("Uppercase", count(stats.total_upper));
        series.push("Lowercase", count(stats.total_lower));
        series
    }

    #[must_use]
    pub fn top_letters(stats: &CharacterStats) -> Self {
        ranked("Most common letters", &stats.top_letters)
    }
}

#[expect(clippy::as_conversions, reason = "Counts stay far below 2^52")]
#[expect(clippy::cast_precision_loss, reason = "Counts stay far below 2^52")]
const fn count(value: usize) -> f64 {
    value as f64
}

fn ranked<K: Display>(title: &str, ranking: &Ranking<K>) -> ChartSeries {
    let mut series = ChartSeries::new(title, ChartKind::Bar);
    for (key, value) in ranking.iter() {
        series.push(key.to_string(), count(value));
    }
    series
}

/// Buckets raw values into `value -> occurrences`, ascending.
fn histogram(title: &str, values: &[usize]) -> ChartSeries {
    let mut buckets: BTreeMap<usize, usize> = BTreeMap::new();
    for &value in values {
        let bucket = buckets.entry(value).or_insert(0);
        *bucket = bucket.saturating_add(1);
    }

    let mut series = ChartSeries::new(title, ChartKind::Histogram);
    for (value, occurrences) in buckets {
        series.push(value.to_string(), count(occurrences));
    }
    series
}

/// Draws `series` as horizontal bars, the largest value filling `width`
/// columns.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::Format`] if formatting a label fails.
pub fn render_text(series: &ChartSeries, width: usize) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", series.title)?;

    if series.values.is_empty() {
        writeln!(out, "  (no data)")?;
        return Ok(out);
    }

    let label_width = series
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.values.iter().copied().fold(0.0_f64, f64::max);

    for (label, &value) in series.labels.iter().zip(&series.values) {
        let bar = "#".repeat(bar_length(value, max, width));
        writeln!(out, "  {label:<label_width$} | {bar} {value}")?;
    }

    if let Some(annotation) = &series.annotation {
        writeln!(out, "  {annotation}")?;
    }
    Ok(out)
}

#[expect(clippy::as_conversions, reason = "Bar lengths are small and non-negative")]
#[expect(clippy::cast_possible_truncation, reason = "Bar lengths are small and non-negative")]
#[expect(clippy::cast_sign_loss, reason = "Bar lengths are small and non-negative")]
#[expect(clippy::cast_precision_loss, reason = "Chart width is small")]
fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}
