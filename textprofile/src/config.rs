// src/config.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::ReportMode;

pub const CONFIG_FILE_NAME: &str = ".textprofile.toml";

/// Settings for the session and the command line front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob matched against file names when listing loadable documents
    pub file_pattern: String,
    pub charts: bool,
    pub chart_width: usize,
    /// Where exports land; the session directory when unset
    pub export_dir: Option<PathBuf>,
    pub default_mode: ReportMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_pattern: String::from("*.txt"),
            charts: true,
            chart_width: 40,
            export_dir: None,
            default_mode: ReportMode::Summary,
        }
    }
}

impl Config {
    /// The compiled `file_pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if `file_pattern` is not a valid glob.
    pub fn pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.file_pattern)
            .with_context(|| format!("Invalid file_pattern: {}", self.file_pattern))
    }

    #[must_use]
    pub fn export_dir_or<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.export_dir.as_deref().unwrap_or(fallback)
    }
}

/// Loads the configuration from `.textprofile.toml`, starting at `dir` and
/// checking parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory
///
/// # Returns
///
/// * `Ok(Config)` from the nearest file, or the defaults when none exists
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            return load_config_file(&config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    log::debug!("no {CONFIG_FILE_NAME} found from {}, using defaults", dir.display());
    Ok(Config::default())
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// names an invalid glob.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.pattern()?;

    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
}
