use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::transcript_processor;
use crate::word_counter::WordCounter;

// @module: Application controller

/// Drives one invocation: resolve the file to text, then print the
/// transcript, the total word count, and the word frequency table.
pub struct Controller;

impl Controller {
    /// Run against a file path, reporting to stdout.
    pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        Self::write_report(&mut handle, path)
    }

    /// Produce the full report on the given writer.
    ///
    /// The file is read and normalized exactly once. A recognized file
    /// error (not found, unreadable) is printed as a single line in place
    /// of both the word-count and frequency sections, and the invocation
    /// still completes normally. Only faults on the output writer itself
    /// propagate as failures.
    pub fn write_report<W: Write, P: AsRef<Path>>(writer: &mut W, path: P) -> Result<()> {
        let path = path.as_ref();
        let display = path.display();

        let content = match transcript_processor::resolve_file(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("File resolution failed for {:?}", path);
                writeln!(writer, "{}", e).context("Failed to write error report")?;
                return Ok(());
            }
        };

        let total_words = WordCounter::count_total_words(&content);
        let unique_words = WordCounter::count_unique_words(&content);
        debug!(
            "Counted {} total and {} unique words in {:?}",
            total_words,
            unique_words.len(),
            path
        );

        writeln!(writer, "{}", content)?;
        writeln!(writer, "Total words in '{}': {}", display, total_words)?;
        writeln!(writer)?;
        writeln!(writer, "Word frequencies in '{}':", display)?;
        writeln!(writer, "Total unique words: {}", unique_words.len())?;
        for entry in &unique_words {
            writeln!(writer, "{}: {}", entry.word, entry.count)?;
        }

        Ok(())
    }
}
