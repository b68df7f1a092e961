// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the analysis engine and the report exporter.
///
/// Pass failures (`NotFound`, `Decode`, `Io`) are returned next to partial
/// statistics rather than aborting; `EmptyDocument` and `DivisionUndefined`
/// only degrade the metric they name.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not valid UTF-8 text (line {line})", path.display())]
    Decode { path: PathBuf, line: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the document is empty")]
    EmptyDocument,

    #[error("{metric} is undefined: division by zero")]
    DivisionUndefined { metric: &'static str },

    #[error("refusing to overwrite existing export: {}", path.display())]
    ExportConflict { path: PathBuf },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render report: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
