// tests/integration_tests/export_test.rs
use super::common::{ARTICLE, create_test_file, setup_test_directory};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use textprofile::AnalysisError;
use textprofile::core::analyze_document;
use textprofile::report::{ExportFormat, Report, ReportMode, export_report};

fn article_report(temp_dir: &TempDir, mode: ReportMode) -> Result<Report> {
    let path = temp_dir.path().join("article.txt");
    let analysis = analyze_document(&path).into_result()?;
    Ok(Report::assemble(&path, &analysis, mode))
}

#[test]
fn test_json_export_round_trips() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let report = article_report(&temp_dir, ReportMode::Comprehensive)?;

    let written = export_report(&report, ExportFormat::Json, temp_dir.path())?;
    assert_eq!(written, temp_dir.path().join("comprehensive_export.json"));

    let parsed: Report = serde_json::from_str(&fs::read_to_string(&written)?)?;
    assert_eq!(parsed, report);
    assert_eq!(parsed.lix_score, Some(32.2));
    Ok(())
}

#[test]
fn test_json_sections_and_key_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let report = article_report(&temp_dir, ReportMode::Summary)?;
    let written = export_report(&report, ExportFormat::Json, temp_dir.path())?;
    let body = fs::read_to_string(written)?;

    let value: serde_json::Value = serde_json::from_str(&body)?;
    for section in [
        "basic_statistics",
        "lix_score",
        "word_analysis",
        "sentence_analysis",
        "character_analysis",
    ] {
        assert!(value.get(section).is_some(), "missing {section}");
    }
    assert!(value["word_analysis"].get("unique_words").is_none());

    let it = body.find("\"It\": 2").unwrap_or(usize::MAX);
    let words = body.find("\"Words\": 2").unwrap_or(usize::MAX);
    assert!(it < words, "ranked keys keep ranking order");
    Ok(())
}

#[test]
fn test_existing_export_is_left_untouched() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let existing = create_test_file(temp_dir.path(), "normal_export.txt", "previous results")?;
    let report = article_report(&temp_dir, ReportMode::Summary)?;

    let result = export_report(&report, ExportFormat::Txt, temp_dir.path());
    assert!(matches!(result, Err(AnalysisError::ExportConflict { .. })));
    assert_eq!(fs::read_to_string(existing)?, "previous results");
    Ok(())
}

#[test]
fn test_text_export_sections() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let report = article_report(&temp_dir, ReportMode::Comprehensive)?;
    let written = export_report(&report, ExportFormat::Txt, temp_dir.path())?;
    let body = fs::read_to_string(written)?;

    assert!(body.contains("== basic statistics ==\ntotal_lines: 5\n"));
    assert!(body.contains("lix_score: 32.2 (easy)"));
    assert!(body.contains("top_10_sentence_lengths:\n  7: 2\n  10: 1\n"));
    assert!(body.contains("  Mostly, yes.\n"));
    Ok(())
}

#[test]
fn test_same_analysis_same_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let a = create_test_file(temp_dir.path(), "a.txt", ARTICLE)?;
    let analysis = analyze_document(&a).into_result()?;

    assert_eq!(
        Report::assemble(&a, &analysis, ReportMode::Comprehensive),
        Report::assemble(&a, &analysis, ReportMode::Comprehensive)
    );
    Ok(())
}
