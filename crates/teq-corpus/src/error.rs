//! Error types for corpus file reading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a parallel-corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read a corpus file.
    #[error("failed to read corpus file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line was neither a comment nor a two-column sentence line.
    #[error("expected comment or two-column line at {path}:{line}")]
    Format {
        /// Path to the malformed file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
    },
}
