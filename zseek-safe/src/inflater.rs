//! The Inflater adapter: a safe, block-boundary-aware wrapper over raw inflate.

use std::os::raw::c_int;

use crate::error::{Error, Result};
use crate::ffi;
use crate::stream::Stream;

/// Window bits requesting automatic zlib/gzip header detection (32 + 15).
const WINDOW_BITS_AUTO: c_int = 15 + 32;
/// Window bits requesting raw deflate with no header.
const WINDOW_BITS_RAW: c_int = -15;

/// How far to drive `inflate` on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushMode {
    /// Decode as much as fits in the output buffer; used by the extractor.
    NoFlush,
    /// Stop as soon as a block boundary is reached; used by the builder to
    /// discover checkpoint-eligible positions.
    Block,
}

impl FlushMode {
    fn to_raw(self) -> c_int {
        match self {
            FlushMode::NoFlush => libz_sys::Z_NO_FLUSH,
            FlushMode::Block => libz_sys::Z_BLOCK,
        }
    }
}

/// Outcome of a single [`Inflater::inflate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Decoding can continue.
    Ok,
    /// The stream has been fully decoded.
    StreamEnd,
}

/// A single inflate session over a zlib/gzip/raw-deflate stream.
///
/// Wraps one `z_stream` through its whole lifecycle: construction selects
/// auto-detecting or raw-deflate framing, [`Inflater::inflate`] drives it,
/// and `Drop` releases the underlying zlib state.
pub struct Inflater {
    stream: Stream,
}

impl Inflater {
    /// Initialize a decoder that auto-detects zlib or gzip framing.
    ///
    /// Used by the index builder, which consumes the whole stream from its
    /// real beginning and so sees whatever header the producer wrote.
    pub fn new_auto() -> Result<Self> {
        Self::with_window_bits(WINDOW_BITS_AUTO)
    }

    /// Initialize a decoder for raw deflate data with no header.
    ///
    /// Used by the extractor, which restarts mid-stream at an access point
    /// where there is no framing left to detect.
    pub fn new_raw() -> Result<Self> {
        Self::with_window_bits(WINDOW_BITS_RAW)
    }

    fn with_window_bits(window_bits: c_int) -> Result<Self> {
        let mut stream = Stream::zeroed();
        ffi::inflate_init2(&mut stream, window_bits)?;
        Ok(Self { stream })
    }

    /// Point the decoder at the given input slice. Must be called before
    /// the next [`Inflater::inflate`] whenever new input becomes available.
    pub fn set_input(&mut self, input: &[u8]) {
        self.stream.set_next_input(input);
    }

    /// Point the decoder at the given output slice for the next
    /// [`Inflater::inflate`] call.
    pub fn set_output(&mut self, output: &mut [u8]) {
        self.stream.set_next_out(output);
    }

    /// Bytes still unconsumed in the current input slice.
    pub fn avail_in(&self) -> usize {
        self.stream.avail_in()
    }

    /// Bytes of room still left in the current output slice.
    pub fn avail_out(&self) -> usize {
        self.stream.avail_out()
    }

    /// Total input bytes consumed so far.
    pub fn total_in(&self) -> u64 {
        self.stream.total_in()
    }

    /// Total output bytes produced so far.
    pub fn total_out(&self) -> u64 {
        self.stream.total_out()
    }

    /// The raw `data_type` field from the last `inflate` call.
    ///
    /// Bit 7 (`0x80`) is set when `inflate` stopped exactly at a deflate
    /// block boundary; bit 6 (`0x40`) is set when that boundary is also the
    /// end of the stream; bits 0-2 hold the number of leftover bits (0-7)
    /// in the last byte consumed.
    pub fn data_type(&self) -> u8 {
        (self.stream.data_type() & 0xff) as u8
    }

    /// Whether the last `inflate` call stopped exactly at a block boundary.
    pub fn at_block_boundary(&self) -> bool {
        self.data_type() & 0x80 != 0
    }

    /// Whether the block boundary `inflate` stopped at is also the end of
    /// the stream.
    pub fn at_stream_end_boundary(&self) -> bool {
        self.data_type() & 0x40 != 0
    }

    /// Leftover bits (0-7) in the last byte consumed, valid once
    /// [`Inflater::at_block_boundary`] is true.
    pub fn leftover_bits(&self) -> u8 {
        self.data_type() & 0x07
    }

    /// Run one `inflate` step, consuming from the last `set_input` buffer
    /// and producing into the last `set_output` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataError`] on corrupt input, [`Error::NeedDict`] if
    /// the stream requires a preset dictionary this adapter was not given,
    /// and other `Error` variants for the remaining zlib failure modes.
    pub fn inflate(&mut self, flush: FlushMode) -> Result<Status> {
        match ffi::inflate(&mut self.stream, flush.to_raw()) {
            libz_sys::Z_OK => Ok(Status::Ok),
            libz_sys::Z_STREAM_END => Ok(Status::StreamEnd),
            other => Err(Error::from(other)),
        }
    }

    /// Inject `bits` leftover bits, right-aligned in `value`, ahead of the
    /// next input. Mirrors the access point's saved partial byte. A no-op
    /// when `bits` is zero.
    pub fn prime(&mut self, bits: u8, value: i32) -> Result<()> {
        if bits == 0 {
            return Ok(());
        }
        ffi::inflate_prime(&mut self.stream, c_int::from(bits), value as c_int)
    }

    /// Install a preset back-reference dictionary (up to 32 KiB).
    pub fn set_dictionary(&mut self, window: &[u8]) -> Result<()> {
        ffi::inflate_set_dictionary(&mut self.stream, window)
    }

    /// The last error message zlib attached to this stream, if any.
    pub fn last_message(&self) -> Option<String> {
        self.stream.message()
    }
}

impl Drop for Inflater {
    fn drop(&mut self) {
        ffi::inflate_end(&mut self.stream);
    }
}

// SAFETY: `Inflater` owns its `z_stream` outright and is never shared;
// zlib streams are not safe for concurrent access, so `Sync` is not
// implemented.
unsafe impl Send for Inflater {}
