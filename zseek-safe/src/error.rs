//! Error types used by the safe zlib wrapper.

use std::fmt;
use std::os::raw::c_int;

/// Type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Error values returned by inflate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Stream reached `Z_STREAM_END`; treated as success by callers.
    StreamEnd,

    /// A preset dictionary is required before decoding can continue (`Z_NEED_DICT`).
    NeedDict,

    /// Memory allocation failed (`Z_MEM_ERROR`).
    MemError,

    /// No progress is possible; output buffer too small (`Z_BUF_ERROR`).
    BufError,

    /// Corrupted input (`Z_DATA_ERROR`).
    DataError,

    /// Invalid stream state or argument (`Z_STREAM_ERROR`).
    StreamError,

    /// The zlib library version in use does not match the headers used to
    /// build this wrapper (`Z_VERSION_ERROR`).
    VersionError,

    /// Fallback for error codes not known to this wrapper.
    Unknown(c_int),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StreamEnd => write!(f, "end of stream reached"),
            Error::NeedDict => write!(f, "a preset dictionary is required"),
            Error::MemError => write!(f, "memory allocation failed"),
            Error::BufError => write!(f, "no progress is possible"),
            Error::DataError => write!(f, "data is corrupt"),
            Error::StreamError => write!(f, "inconsistent stream state"),
            Error::VersionError => write!(f, "zlib version mismatch"),
            Error::Unknown(code) => write!(f, "unknown zlib error code: {code}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<c_int> for Error {
    fn from(ret: c_int) -> Error {
        match ret {
            libz_sys::Z_STREAM_END => Error::StreamEnd,
            libz_sys::Z_NEED_DICT => Error::NeedDict,
            libz_sys::Z_MEM_ERROR => Error::MemError,
            libz_sys::Z_BUF_ERROR => Error::BufError,
            libz_sys::Z_DATA_ERROR => Error::DataError,
            libz_sys::Z_STREAM_ERROR => Error::StreamError,
            libz_sys::Z_VERSION_ERROR => Error::VersionError,
            other => Error::Unknown(other),
        }
    }
}

impl Error {
    /// Return the raw zlib return code for the current variant.
    pub fn to_raw(self) -> c_int {
        match self {
            Error::StreamEnd => libz_sys::Z_STREAM_END,
            Error::NeedDict => libz_sys::Z_NEED_DICT,
            Error::MemError => libz_sys::Z_MEM_ERROR,
            Error::BufError => libz_sys::Z_BUF_ERROR,
            Error::DataError => libz_sys::Z_DATA_ERROR,
            Error::StreamError => libz_sys::Z_STREAM_ERROR,
            Error::VersionError => libz_sys::Z_VERSION_ERROR,
            Error::Unknown(code) => code,
        }
    }
}

/// Translate a raw zlib return code into a `Result`.
pub(crate) fn result_from_zlib_ret<T>(ret: c_int, value: T) -> Result<T> {
    if ret == libz_sys::Z_OK {
        Ok(value)
    } else {
        Err(ret.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_all_known_codes() {
        let cases = [
            (libz_sys::Z_STREAM_END, Error::StreamEnd),
            (libz_sys::Z_NEED_DICT, Error::NeedDict),
            (libz_sys::Z_MEM_ERROR, Error::MemError),
            (libz_sys::Z_BUF_ERROR, Error::BufError),
            (libz_sys::Z_DATA_ERROR, Error::DataError),
            (libz_sys::Z_STREAM_ERROR, Error::StreamError),
            (libz_sys::Z_VERSION_ERROR, Error::VersionError),
        ];

        for (code, expected) in cases {
            assert_eq!(Error::from(code), expected, "failed for code {code}");
        }
    }

    #[test]
    fn from_unknown_code() {
        let err = Error::from(12345);
        assert!(matches!(err, Error::Unknown(12345)));
    }

    #[test]
    fn roundtrip_all_codes() {
        let codes = [
            libz_sys::Z_STREAM_END,
            libz_sys::Z_NEED_DICT,
            libz_sys::Z_MEM_ERROR,
            libz_sys::Z_BUF_ERROR,
            libz_sys::Z_DATA_ERROR,
            libz_sys::Z_STREAM_ERROR,
            libz_sys::Z_VERSION_ERROR,
            99999,
        ];

        for code in codes {
            let err = Error::from(code);
            assert_eq!(err.to_raw(), code, "roundtrip failed for code {code}");
        }
    }

    #[test]
    fn result_from_zlib_ret_behavior() {
        let value = 7;
        assert_eq!(result_from_zlib_ret(libz_sys::Z_OK, value), Ok(value));
        assert!(matches!(
            result_from_zlib_ret::<i32>(libz_sys::Z_DATA_ERROR, value),
            Err(Error::DataError)
        ));
    }
}
