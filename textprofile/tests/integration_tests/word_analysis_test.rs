// tests/integration_tests/word_analysis_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use textprofile::core::word_statistics;

#[test]
fn test_repeated_words() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = word_statistics(&temp_dir.path().join("repeat.txt")).into_result()?;

    assert_eq!(stats.unique_word_count, 3);
    assert_eq!(stats.words_only_once_count, 1);
    assert_eq!(stats.words_only_once, vec!["cc"]);

    let top: Vec<(&str, usize)> = stats.top_words.iter().map(|(w, c)| (w.as_str(), c)).collect();
    assert_eq!(top, vec![("Aa", 3), ("Bb", 2), ("Cc", 1)]);
    assert_eq!(serde_json::to_string(&stats.top_words)?, r#"{"Aa":3,"Bb":2,"Cc":1}"#);
    Ok(())
}

#[test]
fn test_article_top_words_and_ties() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = word_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert_eq!(stats.total_tokens, 35);
    assert_eq!(stats.unique_word_count, 33);
    assert_eq!(stats.words_only_once_count, 31);

    let top: Vec<&str> = stats.top_words.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(
        top,
        vec![
            "It",
            "Words",
            "Readability",
            "Formulas",
            "Estimate",
            "How",
            "Hard",
            "A",
            "Text",
            "Is"
        ],
        "ties keep first-seen order"
    );
    Ok(())
}

#[test]
fn test_counts_are_ordered() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = word_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert!(stats.words_only_once_count <= stats.unique_word_count);
    assert!(stats.unique_word_count <= stats.total_tokens);
    assert!(stats.top_words.len() <= 10);

    let counts: Vec<usize> = stats.top_words.iter().map(|(_, c)| c).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));

    assert_eq!(stats.word_lengths_with_duplicates.len(), stats.total_tokens);
    assert_eq!(stats.word_lengths_unique.len(), stats.unique_word_count);
    Ok(())
}

#[test]
fn test_digits_and_punctuation_are_dropped() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = word_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert!(stats.unique_words.iter().all(|w| w.chars().all(char::is_alphabetic)));
    assert!(stats.unique_words.contains(&String::from("mostly")));
    Ok(())
}
