// src/report/export.rs
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};
use crate::report::{ExportFormat, Report, ReportMode, text};

/// `{normal|comprehensive}_export.{txt|json}`
#[must_use]
pub fn export_file_name(mode: ReportMode, format: ExportFormat) -> String {
    format!("{}_export.{}", mode.file_stem(), format.extension())
}

/// Renders the full export body without touching the filesystem.
///
/// # Errors
///
/// Returns an error if JSON serialization or text formatting fails.
pub fn render(report: &Report, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut body = serde_json::to_string_pretty(report)?;
            body.push('\n');
            Ok(body)
        }
        ExportFormat::Txt => text::render_text(report),
    }
}

/// Writes `report` into `dir` under its fixed export name.
///
/// The body is rendered before the file is created, and the file is created
/// exclusively, so an existing export is never touched.
///
/// # Arguments
///
/// * `report` - The assembled report
/// * `format` - Plain text or JSON
/// * `dir` - Directory receiving the export
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written export
///
/// # Errors
///
/// * `AnalysisError::ExportConflict` if the export file already exists
/// * `AnalysisError::Io` if the file cannot be created or written; a partially
///   written file is removed
/// * Rendering errors from [`render`]
pub fn export_report(report: &Report, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(report.mode, format));
    let body = render(report, format)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                AnalysisError::ExportConflict { path: path.clone() }
            } else {
                AnalysisError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

    if let Err(source) = file.write_all(body.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&path) {
            log::warn!("could not remove partial export {}: {cleanup}", path.display());
        }
        return Err(AnalysisError::Io { path, source });
    }

    log::info!("exported {} report to {}", report.mode.file_stem(), path.display());
    Ok(path)
}
