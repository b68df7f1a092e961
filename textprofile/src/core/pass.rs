// src/core/pass.rs
use std::path::Path;

use crate::core::source::LineSource;
use crate::error::{AnalysisError, Result};

/// Single-pass state fed one stripped line at a time.
pub trait Accumulator {
    type Output;

    fn push_line(&mut self, line: &str);

    fn finish(self) -> Self::Output;
}

/// Statistics from a pass, with the error that cut it short if any.
///
/// When `error` is set, `stats` covers the lines read before the failure
/// (zeroed if the file never opened).
#[derive(Debug)]
pub struct PassOutcome<T> {
    pub stats: T,
    pub error: Option<AnalysisError>,
}

impl<T> PassOutcome<T> {
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drops partial statistics in favour of the error.
    ///
    /// # Errors
    ///
    /// Returns the error that interrupted the pass, if any.
    #[inline]
    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }

    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PassOutcome<U> {
        PassOutcome {
            stats: f(self.stats),
            error: self.error,
        }
    }
}

/// Reads `path` from the start and feeds every line to `accumulator`.
///
/// Open, decode and I/O failures are logged and returned with the partial
/// statistics instead of being propagated.
pub fn run_pass<A: Accumulator>(path: &Path, mut accumulator: A) -> PassOutcome<A::Output> {
    let mut source = match LineSource::open(path) {
        Ok(source) => source,
        Err(err) => {
            log::error!("cannot start pass: {err}");
            return PassOutcome {
                stats: accumulator.finish(),
                error: Some(err),
            };
        }
    };

    for line in source.by_ref() {
        match line {
            Ok(line) => accumulator.push_line(&line),
            Err(err) => {
                log::error!("pass stopped early after {} lines: {err}", source.lines_read());
                return PassOutcome {
                    stats: accumulator.finish(),
                    error: Some(err),
                };
            }
        }
    }

    log::debug!(
        "read {} lines from {}",
        source.lines_read(),
        source.path().display()
    );
    PassOutcome {
        stats: accumulator.finish(),
        error: None,
    }
}

/// Feeds in-memory text through `accumulator`, line by line.
pub fn run_text<A: Accumulator>(text: &str, mut accumulator: A) -> A::Output {
    for line in text.lines() {
        accumulator.push_line(line);
    }
    accumulator.finish()
}
