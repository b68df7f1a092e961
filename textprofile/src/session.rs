// src/session.rs
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::console::{Section, show_section};
use crate::core::{LineSource, analyze_document};
use crate::error::AnalysisError;
use crate::report::{ExportFormat, Report, ReportMode, export_report};
use crate::utils::is_hidden;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    Show(Section),
    Export,
    Exit,
}

/// Menu keys, the command each selects, and the label printed for it.
pub const MENU: [(&str, Command, &str); 7] = [
    ("1", Command::Load, "Load a text file"),
    ("2", Command::Show(Section::Basic), "Display basic statistics"),
    ("3", Command::Show(Section::Words), "Show word frequency analysis"),
    ("4", Command::Show(Section::Sentences), "Display sentence analysis"),
    ("5", Command::Show(Section::Characters), "Display character analysis"),
    ("6", Command::Export, "Export results"),
    ("x", Command::Exit, "Exit programme"),
];

impl Command {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim();
        MENU.iter()
            .find(|(k, _, _)| k.eq_ignore_ascii_case(key))
            .map(|&(_, command, _)| command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A document that can be selected from the session directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub size: u64,
}

/// Interactive menu over one input and one output stream.
///
/// All state lives here: the loaded document, the directory files are
/// picked from, and the configuration.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    directory: PathBuf,
    document: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config, directory: PathBuf) -> Self {
        Self {
            input,
            output,
            config,
            directory,
            document: None,
        }
    }

    /// Loads `path` without going through the file listing.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a readable file.
    pub fn preload(&mut self, path: PathBuf) -> Result<()> {
        LineSource::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        log::info!("loaded {}", path.display());
        self.document = Some(path);
        Ok(())
    }

    #[must_use]
    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu and dispatches choices until `x` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input or output stream fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Please enter choice: ")? else {
                break;
            };

            let Some(command) = Command::parse(&choice) else {
                writeln!(self.output, "Please enter a valid choice.")?;
                continue;
            };

            if self.dispatch(command)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command against the session.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input or output stream fails.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        log::debug!("dispatching {command:?}");
        match command {
            Command::Load => self.load(),
            Command::Show(section) => {
                if let Some(path) = self.require_document()? {
                    let width = self.config.charts.then_some(self.config.chart_width);
                    show_section(&mut self.output, section, &path, width)?;
                }
                Ok(Flow::Continue)
            }
            Command::Export => self.export(),
            Command::Exit => Ok(Flow::Exit),
        }
    }

    /// Files in the session directory matching the configured pattern,
    /// hidden files excluded, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid or the directory cannot be
    /// read.
    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        let pattern = self.config.pattern()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.with_context(|| {
                format!("Failed to list directory: {}", self.directory.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !pattern.matches(name) {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(Candidate {
                name: name.to_owned(),
                size,
            });
        }

        Ok(files)
    }

    fn load(&mut self) -> Result<Flow> {
        let candidates = self.candidates()?;

        if candidates.is_empty() {
            writeln!(
                self.output,
                "No files matching {} found in {}",
                self.config.file_pattern,
                self.directory.display()
            )?;
        } else {
            writeln!(
                self.output,
                "Files in {} ({}):",
                self.directory.display(),
                self.config.file_pattern
            )?;
            for candidate in &candidates {
                writeln!(self.output, "{} : {} bytes", candidate.name, candidate.size)?;
            }
        }

        loop {
            let Some(name) = self.prompt("\nInput the name of the file (Write 'x' to cancel): ")?
            else {
                return Ok(Flow::Exit);
            };
            let name = name.trim();

            if name.eq_ignore_ascii_case("x") {
                writeln!(self.output, "\nFile selection was canceled.")?;
                return Ok(Flow::Continue);
            }

            let with_extension = format!("{name}.txt");
            let chosen = candidates
                .iter()
                .find(|c| c.name == name || c.name == with_extension);

            match chosen {
                Some(candidate) => {
                    let path = self.directory.join(&candidate.name);
                    log::info!("loaded {}", path.display());
                    self.document = Some(path);
                    writeln!(self.output, "\nFile loaded successfully!")?;
                    return Ok(Flow::Continue);
                }
                None => writeln!(
                    self.output,
                    "Please enter a valid filename from {}",
                    self.directory.display()
                )?,
            }
        }
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(path) = self.require_document()? else {
            return Ok(Flow::Continue);
        };

        let Some(answer) = self.prompt("Export format (txt/json): ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(format) = ExportFormat::from_str(answer.trim(), true) else {
            writeln!(self.output, "Please enter a valid choice.")?;
            return Ok(Flow::Continue);
        };

        let default_mode = self.config.default_mode;
        let Some(answer) = self.prompt(&format!(
            "Report mode (normal/comprehensive) [{}]: ",
            default_mode.file_stem()
        ))?
        else {
            return Ok(Flow::Exit);
        };
        let mode = match answer.trim() {
            "" => default_mode,
            value => match ReportMode::from_str(value, true) {
                Ok(mode) => mode,
                Err(_) => {
                    writeln!(self.output, "Please enter a valid choice.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let outcome = analyze_document(&path);
        if let Some(err) = outcome.error {
            writeln!(self.output, "Export aborted: {err}")?;
            return Ok(Flow::Continue);
        }

        let report = Report::assemble(&path, &outcome.stats, mode);
        let dir = self.config.export_dir_or(&self.directory).to_path_buf();
        match export_report(&report, format, &dir) {
            Ok(written) => writeln!(self.output, "Results exported to {}", written.display())?,
            Err(AnalysisError::ExportConflict { path }) => writeln!(
                self.output,
                "{} already exists; nothing was written.",
                path.display()
            )?,
            Err(err) => writeln!(self.output, "Export failed: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn require_document(&mut self) -> Result<Option<PathBuf>> {
        if self.document.is_none() {
            writeln!(self.output, "Please load a file first.")?;
        }
        Ok(self.document.clone())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for (key, _, label) in MENU {
            writeln!(self.output, "{key}. {label}")?;
        }
        Ok(())
    }

    /// Prints `message` and reads one line, `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read session input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }
}
