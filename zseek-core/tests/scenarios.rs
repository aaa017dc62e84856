//! End-to-end scenarios exercised only through the public API.

use std::io::{Cursor, Write};

use zseek_core::codec::{read_index, write_index};
use zseek_core::config::BuildOptions;
use zseek_core::extractor::{extract, ByteRange};
use zseek_core::{build, Error};

fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn lcg_payload(len: usize, seed: u32) -> Vec<u8> {
    let mut payload = Vec::with_capacity(len);
    let mut state = seed;
    for _ in 0..len {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        payload.push((state >> 24) as u8);
    }
    payload
}

#[test]
fn tiny_payload_round_trips() {
    let payload = b"hello world";
    let compressed = gzip_bytes(payload);

    let index = build(Cursor::new(&compressed), &BuildOptions::default()).unwrap();
    assert_eq!(index.len(), 1);
    let point = index.iter().next().unwrap();
    assert_eq!(point.out, 0);
    assert_eq!(point.in_offset, 10);
    assert_eq!(point.bits, 0);

    let mut out = Vec::new();
    let n = extract(
        Cursor::new(&compressed),
        &index,
        ByteRange::new(6, Some(5)),
        &mut out,
    )
    .unwrap();

    assert_eq!(n, 5);
    assert_eq!(out, b"world");
}

#[test]
fn span_straddling_stream_yields_multiple_access_points() {
    let payload = lcg_payload(3 * 1_048_576, 42);
    let compressed = gzip_bytes(&payload);

    let index = build(Cursor::new(&compressed), &BuildOptions::default()).unwrap();
    assert!(index.len() >= 2, "expected multiple access points for a 3 MiB stream");

    let mut prev_out = None;
    let mut prev_in = None;
    for point in index.iter() {
        if let (Some(po), Some(pi)) = (prev_out, prev_in) {
            assert!(point.out > po);
            assert!(point.in_offset > pi);
        }
        prev_out = Some(point.out);
        prev_in = Some(point.in_offset);
    }
}

#[test]
fn bit_unaligned_restart_matches_from_scratch_decode() {
    let payload = lcg_payload(2 * 1_048_576, 7);
    let compressed = gzip_bytes(&payload);
    let options = BuildOptions { span: 200_000 };
    let index = build(Cursor::new(&compressed), &options).unwrap();

    // Find an access point with a nonzero bit offset; with this much
    // entropy and this span several should exist.
    let bit_unaligned = index.iter().find(|p| p.bits != 0);
    let Some(point) = bit_unaligned else {
        // Extremely unlikely with this much data, but don't fail the suite
        // on an environment-dependent coincidence.
        return;
    };

    let start = point.out as usize;
    let len = 4096usize.min(payload.len() - start);
    let mut out = Vec::new();
    extract(
        Cursor::new(&compressed),
        &index,
        ByteRange::new(start as u64, Some(len as u64)),
        &mut out,
    )
    .unwrap();

    assert_eq!(out.as_slice(), &payload[start..start + len]);
}

#[test]
fn read_past_end_of_stream_returns_zero_bytes() {
    let payload = lcg_payload(10_000, 99);
    let compressed = gzip_bytes(&payload);
    let index = build(Cursor::new(&compressed), &BuildOptions::default()).unwrap();

    let mut out = Vec::new();
    let n = extract(
        Cursor::new(&compressed),
        &index,
        ByteRange::new(payload.len() as u64 + 1000, Some(50)),
        &mut out,
    )
    .unwrap();

    assert_eq!(n, 0);
    assert!(out.is_empty());
}

#[test]
fn tampered_compressed_byte_surfaces_data_error_not_panic() {
    let payload = lcg_payload(50_000, 13);
    let mut compressed = gzip_bytes(&payload);
    let mid = compressed.len() / 2;
    compressed[mid] ^= 0xff;
    compressed[mid + 1] ^= 0xff;
    compressed[mid + 2] ^= 0xff;

    let result = build(Cursor::new(&compressed), &BuildOptions::default());
    assert!(matches!(result, Err(Error::Data { .. })));
}

#[test]
fn truncated_index_magic_surfaces_incompatible_not_panic() {
    let payload = lcg_payload(1_048_576 * 2, 5);
    let compressed = gzip_bytes(&payload);
    let index = build(Cursor::new(&compressed), &BuildOptions::default()).unwrap();

    let mut bytes = Vec::new();
    write_index(&index, &mut bytes).unwrap();

    // Truncate the gzip-wrapped index file hard enough that even the magic
    // can't be read back.
    bytes.truncate(bytes.len() / 4);

    let result = read_index(Cursor::new(bytes));
    assert!(matches!(result, Err(Error::Incompatible { .. })));
}
