// src/core/source.rs
use std::fs::File;
use std::io::{BufRead as _, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};

/// Forward-only line reader over a UTF-8 text file.
///
/// Holds one line at a time, so peak memory follows the longest line and not
/// the document. Line terminators (`\n`, `\r\n`) are stripped. After the first
/// error the source is exhausted; reopen the path to read again.
#[derive(Debug)]
pub struct LineSource {
    path: PathBuf,
    reader: BufReader<File>,
    line_number: usize,
    finished: bool,
}

impl LineSource {
    /// Opens `path` for a single pass.
    ///
    /// # Errors
    ///
    /// * `AnalysisError::NotFound` if the path is missing or is a directory
    /// * `AnalysisError::Io` for any other open failure
    #[inline]
    pub fn open(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Err(AnalysisError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                AnalysisError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                AnalysisError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        log::debug!("opened {} for a pass", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            line_number: 0,
            finished: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines handed out so far.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl Iterator for LineSource {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number = self.line_number.saturating_add(1);
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(source) => {
                self.finished = true;
                let line = self.line_number.saturating_add(1);
                if source.kind() == ErrorKind::InvalidData {
                    Some(Err(AnalysisError::Decode {
                        path: self.path.clone(),
                        line,
                    }))
                } else {
                    Some(Err(AnalysisError::Io {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}
