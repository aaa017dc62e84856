//! # zseek-core
//!
//! Random-access indexing and extraction for a single concatenated
//! DEFLATE-family stream (raw deflate, zlib, or gzip framed).
//!
//! This crate never compresses: it walks an already-compressed stream once
//! to record [`Index`] checkpoints ("access points") roughly every
//! [`config::SPAN`] bytes of uncompressed output, then uses those
//! checkpoints to extract arbitrary byte ranges without re-inflating from
//! the start.
//!
//! ## Quick start
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use zseek_core::config::BuildOptions;
//! use zseek_core::extractor::ByteRange;
//!
//! # fn gzip(data: &[u8]) -> Vec<u8> {
//! #     use flate2::write::GzEncoder;
//! #     use flate2::Compression;
//! #     use std::io::Write;
//! #     let mut e = GzEncoder::new(Vec::new(), Compression::default());
//! #     e.write_all(data).unwrap();
//! #     e.finish().unwrap()
//! # }
//! # fn main() -> zseek_core::Result<()> {
//! let payload = b"hello world";
//! let compressed = gzip(payload);
//!
//! let index = zseek_core::build(Cursor::new(&compressed), &BuildOptions::default())?;
//!
//! let mut out = Vec::new();
//! zseek_core::extractor::extract(Cursor::new(&compressed), &index, ByteRange::new(6, Some(5)), &mut out)?;
//! assert_eq!(out, b"world");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod codec;
pub mod config;
mod error;
pub mod extractor;
pub mod index;
pub mod session;

pub use error::{BackendError, Error, Result};
pub use extractor::ByteRange;
pub use index::{AccessPoint, Index};
pub use session::Session;

use std::io::Read;

use config::BuildOptions;

/// Build a random-access index over `reader`, scanning it once start to
/// finish.
///
/// # Errors
///
/// Returns [`Error::Data`] if the compressed stream is corrupt,
/// [`Error::Io`] if `reader` fails, and other `Error` variants for the
/// remaining zlib failure modes.
pub fn build(reader: impl Read, options: &BuildOptions) -> Result<Index> {
    builder::build_index(reader, options)
}
