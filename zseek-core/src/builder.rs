//! One-pass index builder.

use std::io::Read;

use zseek_safe::{FlushMode, Inflater, Status};

use crate::config::{BuildOptions, CHUNK, WINSIZE};
use crate::error::{Error, Result};
use crate::index::{AccessPoint, Index};

/// A fixed-capacity ring buffer tracking the most recent `WINSIZE` bytes of
/// uncompressed output without shifting already-written data.
struct RingBuffer {
    buffer: Box<[u8; WINSIZE]>,
    pos: usize,
    filled: usize,
}

impl RingBuffer {
    fn new() -> Self {
        Self {
            buffer: Box::new([0u8; WINSIZE]),
            pos: 0,
            filled: 0,
        }
    }

    fn write(&mut self, data: &[u8]) {
        if data.len() >= WINSIZE {
            self.buffer.copy_from_slice(&data[data.len() - WINSIZE..]);
            self.pos = 0;
            self.filled = WINSIZE;
            return;
        }

        let first = (WINSIZE - self.pos).min(data.len());
        self.buffer[self.pos..self.pos + first].copy_from_slice(&data[..first]);
        let remaining = &data[first..];
        if !remaining.is_empty() {
            self.buffer[..remaining.len()].copy_from_slice(remaining);
        }

        self.pos = (self.pos + data.len()) % WINSIZE;
        self.filled = (self.filled + data.len()).min(WINSIZE);
    }

    /// Linearize the ring into a flat `WINSIZE` array, oldest byte first.
    /// Near the start of the stream, when fewer than `WINSIZE` bytes have
    /// ever been written, the leading bytes stay zeroed.
    fn linearize(&self) -> Box<[u8; WINSIZE]> {
        let mut out = Box::new([0u8; WINSIZE]);
        if self.filled < WINSIZE {
            out[WINSIZE - self.filled..].copy_from_slice(&self.buffer[..self.filled]);
            return out;
        }
        let (older, newer) = self.buffer.split_at(self.pos);
        out[..older.len()].copy_from_slice(older);
        out[older.len()..].copy_from_slice(newer);
        out
    }
}

/// Build a random-access index by scanning `reader` once, start to finish.
///
/// Accepts zlib-framed, gzip-framed, or raw deflate input (auto-detected).
/// An access point is recorded at every deflate block boundary — and at
/// the boundary right after the zlib/gzip header, which is always the
/// first one recorded — that is not also the stream's own end, as long as
/// either no point has been recorded yet or at least `options.span`
/// uncompressed bytes have elapsed since the last one. Every non-empty,
/// well-formed input therefore yields at least one access point.
///
/// # Errors
///
/// Returns [`crate::Error::Data`] if the compressed stream is corrupt,
/// [`crate::Error::Io`] if `reader` fails, and other `Error` variants for
/// the remaining zlib failure modes.
pub fn build_index(mut reader: impl Read, options: &BuildOptions) -> Result<Index> {
    let mut inflater = Inflater::new_auto()?;
    let mut points = Vec::new();
    let mut window = RingBuffer::new();
    let mut input = vec![0u8; CHUNK];
    let mut last_point_out: Option<u64> = None;

    loop {
        if inflater.avail_in() == 0 {
            let n = reader.read(&mut input)?;
            if n == 0 {
                // Input ran out before the stream signalled its own end:
                // the compressed data is truncated.
                return Err(Error::Data { context: "unexpected end of input before stream end" });
            }
            inflater.set_input(&input[..n]);
        }

        loop {
            let mut scratch = [0u8; CHUNK];
            inflater.set_output(&mut scratch);
            let out_before = inflater.total_out();
            let status = inflater.inflate(FlushMode::Block)?;
            let produced = (inflater.total_out() - out_before) as usize;
            if produced > 0 {
                window.write(&scratch[..produced]);
            }

            if status == Status::StreamEnd {
                return Ok(finish(points, &inflater, options.span));
            }

            let out = inflater.total_out();
            // `data_type`'s bit 7 marks every point at which `inflate`
            // stopped exactly at a deflate block boundary; `out == 0`
            // additionally covers the boundary right after the zlib/gzip
            // header, which assures the index always has at least one
            // access point even for a single-block stream.
            let at_boundary = (inflater.at_block_boundary() || out == 0)
                && !inflater.at_stream_end_boundary();
            if at_boundary {
                let due = match last_point_out {
                    None => true,
                    Some(last) => out.saturating_sub(last) >= options.span,
                };
                if due {
                    points.push(AccessPoint {
                        out,
                        in_offset: inflater.total_in(),
                        bits: inflater.leftover_bits(),
                        window: window.linearize(),
                    });
                    last_point_out = Some(out);
                }
            }

            if inflater.avail_in() == 0 {
                break;
            }
        }
    }
}

fn finish(points: Vec<AccessPoint>, inflater: &Inflater, span: u64) -> Index {
    let mut index = Index::from_raw_parts(points, inflater.total_in(), inflater.total_out(), span);
    index.shrink_to_fit();
    index
}
