// tests/integration_tests/basic_stats_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use tempfile::TempDir;
use textprofile::AnalysisError;
use textprofile::core::{analyze_document, basic_statistics, readability};

#[test]
fn test_single_line_counts() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = basic_statistics(&temp_dir.path().join("short.txt")).into_result()?;

    assert_eq!(stats.total_lines, 1);
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.total_characters, 18);
    assert_eq!(stats.total_characters_no_spaces, 16);
    assert_eq!(stats.avg_words_per_line, 3.0);
    assert_eq!(stats.avg_characters_per_word, 5.333);
    Ok(())
}

#[test]
fn test_multi_line_document() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = basic_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert_eq!(stats.total_lines, 5, "blank lines still count");
    assert_eq!(stats.total_words, 36);
    assert_eq!(stats.avg_words_per_line, 7.2);
    assert!(stats.total_characters_no_spaces <= stats.total_characters);
    Ok(())
}

#[test]
fn test_empty_document_zeroes_averages() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("empty.txt");

    let stats = basic_statistics(&path).into_result()?;
    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.avg_words_per_line, 0.0);
    assert_eq!(stats.avg_characters_per_word, 0.0);

    assert_eq!(readability(&path).into_result()?, None);
    Ok(())
}

#[test]
fn test_lix_of_article() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let analysis = analyze_document(&temp_dir.path().join("article.txt")).into_result()?;

    // 36 words / 5 sentences + 9 long words * 100 / 36
    assert_eq!(analysis.words.words_above_length_6, 9);
    assert_eq!(analysis.sentences.sentence_count, 5);
    assert_eq!(analysis.lix_score, Some(32.2));
    Ok(())
}

#[test]
fn test_lix_ignores_sentence_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let forward = create_test_file(
        temp_dir.path(),
        "forward.txt",
        "Extraordinary vocabulary everywhere. Plain small words here.",
    )?;
    let reversed = create_test_file(
        temp_dir.path(),
        "reversed.txt",
        "Plain small words here. Extraordinary vocabulary everywhere.",
    )?;

    let a = readability(&forward).into_result()?;
    let b = readability(&reversed).into_result()?;
    assert!(a.is_some());
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_missing_file_degrades_to_zeroed_stats() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let outcome = basic_statistics(&temp_dir.path().join("absent.txt"));

    assert!(!outcome.is_complete());
    assert_eq!(outcome.stats.total_lines, 0);
    assert!(matches!(outcome.error, Some(AnalysisError::NotFound { .. })));
    Ok(())
}

#[test]
fn test_invalid_utf8_keeps_lines_read_so_far() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.txt");
    std::fs::write(&path, b"first good line\nsecond \xff\xfe line\n")?;

    let outcome = basic_statistics(&path);
    assert!(matches!(
        outcome.error,
        Some(AnalysisError::Decode { line: 2, .. })
    ));
    assert_eq!(outcome.stats.total_lines, 1);
    assert_eq!(outcome.stats.total_words, 3);
    Ok(())
}
