//! Error types for loading data.
//!
//! Substitution and reset never fail; only reading data from outside can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading data values.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, with the location of the problem.
    #[error("{origin}:{line}:{column}: {message}")]
    Json {
        /// The file path, or `<input>` for in-memory strings.
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },
}
