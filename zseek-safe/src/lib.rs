//! Safe FFI bindings to zlib's raw inflate primitives.
//!
//! This crate provides a safe, RAII-based wrapper around the parts of zlib
//! (via `libz-sys`) that a random-access DEFLATE reader needs and that
//! `flate2`'s high-level API does not expose: stopping at block boundaries,
//! reading the leftover-bits state, priming a fresh stream with those bits,
//! and installing a preset dictionary before any input is consumed.

mod error;
mod ffi;
mod inflater;
mod stream;

pub use error::{Error, Result};
pub use inflater::{FlushMode, Inflater, Status};
