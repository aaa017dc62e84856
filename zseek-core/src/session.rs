//! A stateful `seek`/`tell`/`read` session over an indexed compressed
//! stream, for callers who don't want to build a [`crate::ByteRange`] by
//! hand on every call.

use std::io::{Read, Seek};

use crate::error::Result;
use crate::extractor::{extract, ByteRange};
use crate::index::Index;

/// A random-access session over a compressed stream and its [`Index`].
pub struct Session<'idx, R> {
    reader: R,
    index: &'idx Index,
    cursor: u64,
}

impl<'idx, R: Read + Seek> Session<'idx, R> {
    /// Open a session over `reader`, borrowing `index` for its lifetime.
    pub fn open(reader: R, index: &'idx Index) -> Self {
        Self {
            reader,
            index,
            cursor: 0,
        }
    }

    /// Set the logical read cursor to `pos`.
    pub fn seek(&mut self, pos: u64) {
        self.cursor = pos;
    }

    /// The current logical read cursor.
    pub fn tell(&self) -> u64 {
        self.cursor
    }

    /// Extract starting at the current cursor, filling as much of `buf` as
    /// the stream still has, and advance the cursor by the bytes delivered.
    ///
    /// Returns `0` once the cursor has reached or passed the end of the
    /// stream, matching `Read`'s end-of-stream convention.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Data`] if the compressed stream is corrupt,
    /// and other `Error` variants for I/O or zlib-layer failures.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut cursor = std::io::Cursor::new(Vec::with_capacity(buf.len()));
        let range = ByteRange::new(self.cursor, Some(buf.len() as u64));
        extract(&mut self.reader, self.index, range, &mut cursor)?;

        let produced = cursor.into_inner();
        buf[..produced.len()].copy_from_slice(&produced);
        self.cursor += produced.len() as u64;
        Ok(produced.len())
    }

    /// Close the session, returning the underlying reader to the caller.
    pub fn close(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_index;
    use crate::config::BuildOptions;
    use std::io::{Cursor, Write as _};

    fn gzip_bytes(data: &[u8]) -> Vec<u8> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn seek_tell_read_round_trip() {
        let payload = b"the quick brown fox jumps over the lazy dog".repeat(32);
        let compressed = gzip_bytes(&payload);
        let index = build_index(Cursor::new(&compressed), &BuildOptions::default()).unwrap();

        let mut session = Session::open(Cursor::new(&compressed), &index);
        session.seek(10);
        assert_eq!(session.tell(), 10);

        let mut buf = vec![0u8; 20];
        let n = session.read(&mut buf).unwrap();
        assert_eq!(n, 20);
        assert_eq!(&buf[..n], &payload[10..30]);
        assert_eq!(session.tell(), 30);

        let _reader = session.close();
    }
}
