// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ARTICLE: &str = "Readability formulas estimate how hard a text is to read.\n\
The LIX formula was developed in Sweden!\n\
It counts words, sentences and long words. Does it work for English?\n\
\n\
Mostly, yes. 42 percent of readers agree";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "article.txt", ARTICLE)?;
    create_test_file(temp_dir.path(), "short.txt", "Hello world. Stop!")?;
    create_test_file(temp_dir.path(), "empty.txt", "")?;
    create_test_file(temp_dir.path(), "repeat.txt", "aa bb aa cc bb aa")?;
    create_test_file(temp_dir.path(), "letters.txt", "AaAaBbCc")?;
    create_test_file(temp_dir.path(), "readme.md", "Not listed. Wrong pattern.")?;
    create_test_file(temp_dir.path(), ".draft.txt", "Hidden draft.")?;

    Ok(temp_dir)
}
