// src/utils.rs

/// Divides two counts, returning `None` when the denominator is zero.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Counts stay far below 2^52")]
#[expect(clippy::cast_precision_loss, reason = "Counts stay far below 2^52")]
pub fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

/// Rounds to `places` decimal digits, ties to even: `1.0625` gives `1.062`
/// at three places.
#[inline]
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Upper-cases the first character of a canonical word for display.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Dotfiles below the walk root. The root itself is never hidden, so a
/// session rooted in `.` or a `.tmpXXXX` test directory still lists files.
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}
