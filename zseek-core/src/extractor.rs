//! Random-access extraction from an indexed compressed stream.

use std::io::{Read, Seek, SeekFrom, Write};

use zseek_safe::{FlushMode, Inflater, Status};

use crate::config::CHUNK;
use crate::error::Result;
use crate::index::Index;

/// A half-open uncompressed byte range to extract: `[start, start + len)`.
///
/// `len == None` means "through the end of the stream".
#[derive(Debug, Clone, Copy)]
pub struct ByteRange {
    /// First uncompressed byte offset to extract.
    pub start: u64,
    /// Number of bytes to extract, or `None` for "to end of stream".
    pub len: Option<u64>,
}

impl ByteRange {
    /// Construct a range.
    pub fn new(start: u64, len: Option<u64>) -> Self {
        Self { start, len }
    }
}

/// Extract `range` from the compressed stream in `reader`, writing the
/// recovered bytes to `out`.
///
/// Seeks to the nearest access point at or before `range.start`, primes a
/// fresh raw inflater with that point's leftover bits and dictionary
/// window, then skips forward to `range.start` before delivering bytes.
/// When `range.start` precedes the first access point (or the index has
/// none at all), returns `0` without reading or decoding anything.
///
/// Returns the number of bytes actually written, which is less than
/// `range.len()` requests only when the range runs past the end of the
/// stream (never an error).
///
/// # Errors
///
/// Returns [`crate::Error::Data`] if the compressed stream is corrupt,
/// [`crate::Error::Io`] if `reader`/`out` fail, and other `Error` variants
/// for the remaining zlib failure modes.
pub fn extract(
    mut reader: impl Read + Seek,
    index: &Index,
    range: ByteRange,
    out: &mut impl Write,
) -> Result<u64> {
    let Some(point) = index.lookup(range.start) else {
        return Ok(0);
    };
    let (mut inflater, start_pos) = open_at(&mut reader, point)?;

    let mut input = vec![0u8; CHUNK];
    let mut scratch = vec![0u8; CHUNK];
    let mut to_skip = range.start - start_pos;
    let mut delivered: u64 = 0;

    loop {
        if inflater.avail_in() == 0 {
            let n = reader.read(&mut input)?;
            if n == 0 {
                break;
            }
            inflater.set_input(&input[..n]);
        }

        loop {
            let skipping = to_skip > 0;
            let cap = if skipping {
                to_skip.min(CHUNK as u64) as usize
            } else {
                match range.len {
                    Some(total) => {
                        let remaining = total.saturating_sub(delivered);
                        if remaining == 0 {
                            return Ok(delivered);
                        }
                        remaining.min(CHUNK as u64) as usize
                    }
                    None => CHUNK,
                }
            };

            inflater.set_output(&mut scratch[..cap]);
            let out_before = inflater.total_out();
            let status = inflater.inflate(FlushMode::NoFlush)?;
            let produced = (inflater.total_out() - out_before) as usize;

            if skipping {
                to_skip -= produced as u64;
            } else if produced > 0 {
                out.write_all(&scratch[..produced])?;
                delivered += produced as u64;
            }

            if status == Status::StreamEnd {
                return Ok(delivered);
            }
            if inflater.avail_in() == 0 {
                break;
            }
        }
    }

    Ok(delivered)
}

/// Seek `reader` and initialize an inflater ready to produce bytes starting
/// at the uncompressed offset `point` corresponds to.
fn open_at(reader: &mut (impl Read + Seek), point: &crate::index::AccessPoint) -> Result<(Inflater, u64)> {
    let seek_to = point.in_offset - u64::from(point.bits != 0);
    reader.seek(SeekFrom::Start(seek_to))?;

    let mut inflater = Inflater::new_raw()?;
    if point.bits != 0 {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        let shifted = i32::from(byte[0]) >> (8 - point.bits);
        inflater.prime(point.bits, shifted)?;
    }
    inflater.set_dictionary(point.window.as_ref())?;
    Ok((inflater, point.out))
}
