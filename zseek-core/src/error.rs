//! Error types and result handling for index building and extraction.

use std::fmt;

pub use zseek_safe::Error as BackendError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type covering all failure modes in this crate.
#[derive(Debug)]
pub enum Error {
    /// The compressed input or an index file could not be opened.
    Open {
        /// Path or description of the resource that failed to open.
        what: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// I/O failure while reading input, writing output, or seeking.
    Io(std::io::Error),

    /// The compressed stream's content is corrupt.
    Data {
        /// Description of where the corruption was detected.
        context: &'static str,
    },

    /// An allocation needed to proceed failed.
    OutOfMemory,

    /// An index file's format is not recognized as this crate's own.
    Incompatible {
        /// Why the format was rejected (bad magic, short record, etc.).
        reason: &'static str,
    },

    /// A recoverable zlib-layer failure not covered by the variants above.
    Zlib(BackendError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { what, source } => write!(f, "failed to open {what}: {source}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Data { context } => write!(f, "corrupt compressed data: {context}"),
            Error::OutOfMemory => write!(f, "allocation failed"),
            Error::Incompatible { reason } => write!(f, "incompatible index format: {reason}"),
            Error::Zlib(err) => write!(f, "zlib error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Zlib(err) => Some(err),
            Error::Data { .. } | Error::OutOfMemory | Error::Incompatible { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::DataError => Error::Data {
                context: "zlib reported corrupt input",
            },
            BackendError::NeedDict => Error::Data {
                context: "stream requires a preset dictionary this reader cannot supply",
            },
            BackendError::MemError => Error::OutOfMemory,
            other => Error::Zlib(other),
        }
    }
}
