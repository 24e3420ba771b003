/*!
 * Error types for the subtext application.
 *
 * This module contains the recognized error kinds for file access,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when resolving a file into text content.
///
/// Only two kinds are recognized; anything outside these is considered
/// unanticipated and is left to propagate as an uncaught fault. The
/// Display strings double as the user-facing error lines.
#[derive(Error, Debug)]
pub enum AppError {
    /// The target path does not exist
    #[error("Error: File '{0}' not found.")]
    NotFound(String),

    /// The path exists but cannot be read (permissions, encoding, device errors)
    #[error("Error: Unable to read file '{0}'.")]
    ReadFailure(String),
}

impl AppError {
    /// Classify an I/O error against the path that produced it.
    pub fn from_io_error(error: &io::Error, path: &Path) -> Self {
        let display = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(display),
            _ => Self::ReadFailure(display),
        }
    }
}
