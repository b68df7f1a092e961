// tests/integration_tests/character_analysis_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use textprofile::core::character_statistics;

#[test]
fn test_letter_case_and_frequency() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = character_statistics(&temp_dir.path().join("letters.txt")).into_result()?;

    assert_eq!(stats.total_upper, 4);
    assert_eq!(stats.total_lower, 4);
    assert_eq!(stats.total_letters, 8);
    assert_eq!(
        serde_json::to_string(&stats.letter_frequency)?,
        r#"{"a":4,"b":2,"c":2}"#
    );
    Ok(())
}

#[test]
fn test_classes_partition_every_character() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = character_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert_eq!(
        stats.total_letters
            + stats.total_punctuation
            + stats.total_digits
            + stats.total_spaces
            + stats.other_chars,
        stats.total_chars
    );
    assert_eq!(stats.total_digits, 2);
    assert_eq!(stats.total_punctuation, 5, "only . ? ! count");
    assert_eq!(stats.other_chars, 2, "the two commas");
    assert_eq!(stats.total_upper, 10);
    Ok(())
}

#[test]
fn test_top_letters_are_capped_and_descending() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = character_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert_eq!(stats.top_letters.len(), 12);
    let counts: Vec<usize> = stats.top_letters.iter().map(|(_, c)| c).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(stats.letter_frequency.len() >= stats.top_letters.len());
    Ok(())
}
