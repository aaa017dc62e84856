//! Error types for the `zseek` CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for `zseek-cli`.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open a compressed input file.
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the file that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to create an output file (an index, or nothing — extraction
    /// always writes to stdout, but a future non-stdout sink would land
    /// here too).
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the file that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An output path the command was about to write already exists.
    #[error("{}: file already exists", path.display())]
    OutputExists {
        /// Path to the existing file.
        path: PathBuf,
    },

    /// A `BEGIN-END` / `BEGIN-` / `-END` / `N` argument did not parse or
    /// described an empty/backwards range.
    #[error("invalid byte range {range:?}: {reason}")]
    InvalidRange {
        /// The raw range argument as given on the command line.
        range: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Command-line usage error (unrecognized flag, wrong argument count).
    #[error("{0}")]
    Usage(String),

    /// Index construction failed.
    #[error("building index for {}: {source}", path.display())]
    Build {
        /// Path to the file being indexed.
        path: PathBuf,
        /// Underlying core error.
        #[source]
        source: zseek_core::Error,
    },

    /// Extraction failed.
    #[error("extracting from {}: {source}", path.display())]
    Extract {
        /// Path to the file being read.
        path: PathBuf,
        /// Underlying core error.
        #[source]
        source: zseek_core::Error,
    },

    /// General I/O error not tied to a specific named path.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for `zseek-cli`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}
