// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app_controller::Controller;

mod app_controller;
mod errors;
mod file_utils;
mod transcript_processor;
mod word_counter;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subtext
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subtext - Subtitle transcripts and word frequencies
///
/// Strips timing and markup metadata from subtitle files and counts
/// total and unique word frequencies in the resulting text.
#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle transcript extraction and word frequency counting")]
#[command(long_about = "subtext resolves a text, .vtt, or .srt file into plain text and reports
its total word count and a frequency-sorted table of unique words.

EXAMPLES:
    subtext notes.txt                     # Count words in a plain text file
    subtext captions.vtt                  # Strip VTT metadata, then count
    subtext episode.srt                   # Strip SRT metadata, then count
    subtext --log-level debug captions.vtt
    subtext completions bash > subtext.bash

FILE FORMATS:
    Formats are selected purely by filename suffix, case-insensitively:
    .vtt and .srt files are normalized into transcripts, anything else is
    counted as-is.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the text or subtitle file to analyze
    #[arg(value_name = "FILE_PATH")]
    file_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is raised or lowered after argument parsing if requested
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(log_level) = &cli.log_level {
        log::set_max_level(log_level.clone().into());
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subtext", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let file_path = cli
                .file_path
                .ok_or_else(|| anyhow!("FILE_PATH is required when no subcommand is specified"))?;
            Controller::run(&file_path)
        }
    }
}
