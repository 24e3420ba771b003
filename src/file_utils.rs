use std::fs;
use std::path::Path;

use crate::errors::AppError;

// @module: File access utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Checks file existence - used by tests and external consumers
    #[allow(dead_code)]
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string, folding every I/O fault into one of the
    /// two recognized error kinds.
    ///
    /// A missing path becomes `NotFound`; anything else that stops the read
    /// (permissions, invalid UTF-8, device errors) becomes `ReadFailure`.
    /// The handle is scoped to the read and released before returning.
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| AppError::from_io_error(&e, path))
    }
}
