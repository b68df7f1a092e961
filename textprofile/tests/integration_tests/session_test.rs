// tests/integration_tests/session_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use std::io::Cursor;
use tempfile::TempDir;
use textprofile::config::Config;
use textprofile::session::{Command, Flow, Session};

fn session(temp_dir: &TempDir, input: &str) -> Session<Cursor<String>, Vec<u8>> {
    let config = Config {
        charts: false,
        ..Config::default()
    };
    Session::new(
        Cursor::new(input.to_owned()),
        Vec::new(),
        config,
        temp_dir.path().to_path_buf(),
    )
}

#[test]
fn test_listing_uses_pattern_and_skips_hidden() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let names: Vec<String> = session(&temp_dir, "")
        .candidates()?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(
        names,
        vec!["article.txt", "empty.txt", "letters.txt", "repeat.txt", "short.txt"]
    );
    Ok(())
}

#[test]
fn test_full_session_flow() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = session(&temp_dir, "1\nrepeat\n3\n5\n6\njson\ncomprehensive\nx\n");
    session.run()?;

    assert_eq!(
        session.document(),
        Some(temp_dir.path().join("repeat.txt").as_path())
    );
    assert!(temp_dir.path().join("comprehensive_export.json").is_file());

    let out = String::from_utf8(session.into_output())?;
    assert!(out.contains("repeat.txt : 17 bytes"));
    assert!(out.contains("Unique Words: 3\n"));
    assert!(out.contains("Uppercase Letters: 0\n"));
    assert!(out.contains("Results exported to"));
    Ok(())
}

#[test]
fn test_dispatch_without_document() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = session(&temp_dir, "");

    assert_eq!(session.dispatch(Command::Export)?, Flow::Continue);
    assert_eq!(session.dispatch(Command::Exit)?, Flow::Exit);

    let out = String::from_utf8(session.into_output())?;
    assert!(out.contains("Please load a file first."));
    Ok(())
}

#[test]
fn test_invalid_export_format_returns_to_menu() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let mut session = session(&temp_dir, "1\nshort.txt\n6\npdf\nx\n");
    session.run()?;

    let out = String::from_utf8(session.into_output())?;
    assert!(out.contains("Please enter a valid choice."));
    assert!(!temp_dir.path().join("normal_export.txt").exists());
    Ok(())
}
