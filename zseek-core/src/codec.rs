//! On-disk format for a built [`Index`], gzip-wrapped and little-endian.
//!
//! Layout (before gzip-wrapping):
//!
//! ```text
//! magic:     [u8; 4]   = b"ZSK1"
//! total_in:  u64 LE
//! total_out: u64 LE
//! span:      u64 LE
//! count:     u64 LE
//! records[count]:
//!     out:       u64 LE
//!     in_offset: u64 LE
//!     bits:      u8
//!     window:    [u8; WINSIZE]
//! ```
//!
//! The index file itself is compressed with gzip, matching the original
//! implementation this format is descended from. Unlike that implementation
//! it is little-endian and fixed-width throughout rather than mirroring the
//! host's native `off_t`/`int` sizes, so an index built on one machine
//! reads back correctly on another.

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::config::WINSIZE;
use crate::error::{Error, Result};
use crate::index::{AccessPoint, Index};

const MAGIC: &[u8; 4] = b"ZSK1";

/// Write `index` to `writer` in the on-disk format, gzip-compressed.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if `writer` fails.
pub fn write_index(index: &Index, writer: impl Write) -> Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::new(6));

    encoder.write_all(MAGIC)?;
    encoder.write_all(&index.total_in().to_le_bytes())?;
    encoder.write_all(&index.total_out().to_le_bytes())?;
    encoder.write_all(&index.span().to_le_bytes())?;
    encoder.write_all(&(index.len() as u64).to_le_bytes())?;

    for point in index.iter() {
        encoder.write_all(&point.out.to_le_bytes())?;
        encoder.write_all(&point.in_offset.to_le_bytes())?;
        encoder.write_all(&[point.bits])?;
        encoder.write_all(point.window.as_ref())?;
    }

    encoder.finish()?;
    Ok(())
}

/// Read an index previously written by [`write_index`] back from `reader`.
///
/// # Errors
///
/// Returns [`crate::Error::Incompatible`] if the magic is missing or the
/// file is truncated mid-record, and [`crate::Error::Io`] on I/O failure.
pub fn read_index(reader: impl Read) -> Result<Index> {
    let mut decoder = GzDecoder::new(reader);

    let mut magic = [0u8; 4];
    read_exact_or_incompatible(&mut decoder, &mut magic, "truncated magic")?;
    if &magic != MAGIC {
        return Err(Error::Incompatible {
            reason: "not a ZSK1 index",
        });
    }

    let total_in = read_u64(&mut decoder)?;
    let total_out = read_u64(&mut decoder)?;
    let span = read_u64(&mut decoder)?;
    let count = read_u64(&mut decoder)?;

    let mut points = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    for _ in 0..count {
        let out = read_u64(&mut decoder)?;
        let in_offset = read_u64(&mut decoder)?;

        let mut bits = [0u8; 1];
        read_exact_or_incompatible(&mut decoder, &mut bits, "truncated record")?;

        let mut window = Box::new([0u8; WINSIZE]);
        read_exact_or_incompatible(&mut decoder, window.as_mut(), "truncated window")?;

        points.push(AccessPoint {
            out,
            in_offset,
            bits: bits[0],
            window,
        });
    }

    Ok(Index::from_raw_parts(points, total_in, total_out, span))
}

fn read_u64(reader: &mut impl Read) -> Result<u64> {
    let mut bytes = [0u8; 8];
    read_exact_or_incompatible(reader, &mut bytes, "truncated field")?;
    Ok(u64::from_le_bytes(bytes))
}

fn read_exact_or_incompatible(reader: &mut impl Read, buf: &mut [u8], reason: &'static str) -> Result<()> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            Err(Error::Incompatible { reason })
        }
        Err(err) => Err(Error::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_index;
    use crate::config::BuildOptions;
    use std::io::{Cursor, Write as _};

    fn gzip_bytes(data: &[u8]) -> Vec<u8> {
        use flate2::write::GzEncoder as Enc;
        let mut encoder = Enc::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn round_trips_through_write_and_read() {
        let mut payload = Vec::with_capacity(2 * 1024 * 1024);
        for i in 0..payload.capacity() {
            payload.push((i % 251) as u8);
        }
        let compressed = gzip_bytes(&payload);
        let options = BuildOptions { span: 128 * 1024 };
        let index = build_index(Cursor::new(&compressed), &options).unwrap();
        assert!(index.len() > 1);

        let mut bytes = Vec::new();
        write_index(&index, &mut bytes).unwrap();

        let read_back = read_index(Cursor::new(bytes)).unwrap();
        assert_eq!(read_back.len(), index.len());
        assert_eq!(read_back.total_in(), index.total_in());
        assert_eq!(read_back.total_out(), index.total_out());

        for (a, b) in index.iter().zip(read_back.iter()) {
            assert_eq!(a.out, b.out);
            assert_eq!(a.in_offset, b.in_offset);
            assert_eq!(a.bits, b.bits);
            assert_eq!(a.window, b.window);
        }
    }

    #[test]
    fn truncated_magic_is_incompatible_not_panic() {
        let result = read_index(Cursor::new(gzip_bytes(b"ab")));
        assert!(matches!(result, Err(Error::Incompatible { .. })));
    }

    #[test]
    fn wrong_magic_is_incompatible() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"GZIP");
        bytes.extend_from_slice(&0u64.to_le_bytes());
        let wrapped = gzip_bytes(&bytes);
        let result = read_index(Cursor::new(wrapped));
        assert!(matches!(result, Err(Error::Incompatible { .. })));
    }
}
