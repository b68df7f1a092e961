// tests/integration_tests/sentence_analysis_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use tempfile::TempDir;
use textprofile::core::sentence_statistics;

fn words(text: &str) -> Option<Vec<String>> {
    Some(text.split_whitespace().map(str::to_owned).collect())
}

#[test]
fn test_one_word_fragment_is_not_a_sentence() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = sentence_statistics(&temp_dir.path().join("short.txt")).into_result()?;

    assert_eq!(stats.sentence_count, 1);
    assert_eq!(stats.sentences, vec!["Hello world."]);
    assert_eq!(stats.average_words_per_sentence, 3.0);
    Ok(())
}

#[test]
fn test_article_sentences() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = sentence_statistics(&temp_dir.path().join("article.txt")).into_result()?;

    assert_eq!(stats.sentence_count, 5, "the unterminated tail is dropped");
    assert_eq!(stats.sentence_length_distribution, vec![10, 7, 7, 5, 2]);
    assert_eq!(stats.average_words_per_sentence, 7.2);
    assert_eq!(stats.shortest_sentence, words("Mostly, yes."));
    assert_eq!(
        stats.longest_sentence,
        words("Readability formulas estimate how hard a text is to read.")
    );
    assert_eq!(
        serde_json::to_string(&stats.top_10_sentence_lengths)?,
        r#"{"7":2,"10":1,"5":1,"2":1}"#
    );
    Ok(())
}

#[test]
fn test_sentence_spanning_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "wrapped.txt",
        "This sentence keeps\ngoing across\nthree lines. Done now!",
    )?;

    let stats = sentence_statistics(&path).into_result()?;
    assert_eq!(
        stats.sentences,
        vec!["This sentence keeps going across three lines.", "Done now!"]
    );
    Ok(())
}

#[test]
fn test_stopper_runs_and_first_extreme_wins() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "stoppers.txt",
        "Wait... what?! First pair. Second pair.",
    )?;

    let stats = sentence_statistics(&path).into_result()?;
    assert!(stats.sentences.iter().all(|s| s.split_whitespace().count() >= 2));
    assert!(!stats.sentences.iter().any(|s| s.chars().all(|c| ".?!".contains(c))));
    assert_eq!(stats.shortest_sentence, words("First pair."));
    assert_eq!(stats.longest_sentence, words("First pair."));
    Ok(())
}

#[test]
fn test_no_sentences() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = sentence_statistics(&temp_dir.path().join("empty.txt")).into_result()?;

    assert_eq!(stats.sentence_count, 0);
    assert_eq!(stats.average_words_per_sentence, 0.0);
    assert_eq!(stats.shortest_sentence, None);
    assert!(stats.top_10_sentence_lengths.is_empty());
    Ok(())
}
