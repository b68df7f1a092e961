// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, load_config, load_config_file};
use crate::console::{Section, show_section};
use crate::core::{LineSource, analyze_document};
use crate::report::{ExportFormat, Report, ReportMode, export_report};
use crate::session::Session;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyse; starts the interactive session when omitted
    pub file: Option<PathBuf>,

    /// Show basic statistics and the LIX score
    #[arg(short, long)]
    pub basic: bool,

    /// Show word frequency analysis
    #[arg(short, long)]
    pub words: bool,

    /// Show sentence analysis
    #[arg(short, long)]
    pub sentences: bool,

    /// Show character analysis
    #[arg(short, long)]
    pub characters: bool,

    /// Export the full report in this format
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Report detail for exports (defaults to the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<ReportMode>,

    /// Directory files are listed from and exported to (defaults to current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Start the interactive menu, with FILE preloaded if given
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip the text charts
    #[arg(long)]
    pub no_charts: bool,

    /// Read settings from this file instead of searching for .textprofile.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn sections(&self) -> Vec<Section> {
        let chosen: Vec<Section> = [
            (self.basic, Section::Basic),
            (self.words, Section::Words),
            (self.sentences, Section::Sentences),
            (self.characters, Section::Characters),
        ]
        .into_iter()
        .filter_map(|(on, section)| on.then_some(section))
        .collect();

        if chosen.is_empty() {
            Section::ALL.to_vec()
        } else {
            chosen
        }
    }
}

/// Maps `-v` occurrences to a default filter; `RUST_LOG` still wins.
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Runs against the process's stdin and stdout.
///
/// # Errors
///
/// See [`execute`].
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(args, stdin.lock(), stdout.lock())
}

/// Analyses a file in one shot, or hands the streams to an interactive
/// session.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the file cannot
/// be opened, an export fails, or an output stream fails.
pub fn execute<R: BufRead, W: Write>(args: Args, input: R, mut output: W) -> Result<()> {
    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&directory)?,
    };
    if args.no_charts {
        config.charts = false;
    }
    if let Some(mode) = args.mode {
        config.default_mode = mode;
    }

    let file = args.file.as_ref().map(|f| directory.join(f));

    match file {
        Some(file) if !args.interactive => {
            analyze_file(&args, &file, &directory, &config, &mut output)
        }
        file => {
            let mut session = Session::new(input, output, config, directory);
            if let Some(file) = file {
                session.preload(file)?;
            }
            session.run()
        }
    }
}

fn analyze_file<W: Write>(
    args: &Args,
    file: &Path,
    directory: &Path,
    config: &Config,
    output: &mut W,
) -> Result<()> {
    LineSource::open(file).with_context(|| format!("Failed to open {}", file.display()))?;

    let width = config.charts.then_some(config.chart_width);
    for section in args.sections() {
        show_section(output, section, file, width)?;
    }

    if let Some(format) = args.export {
        let analysis = analyze_document(file)
            .into_result()
            .with_context(|| format!("Failed to analyse {}", file.display()))?;
        let report = Report::assemble(file, &analysis, config.default_mode);
        let written = export_report(&report, format, config.export_dir_or(directory))
            .with_context(|| format!("Failed to export report for {}", file.display()))?;
        writeln!(output, "Results exported to {}", written.display())?;
    }

    Ok(())
}
