//! Thin wrappers around the raw zlib FFI calls used by the safe API.

use std::os::raw::c_int;

use crate::error::{result_from_zlib_ret, Result};
use crate::stream::Stream;

/// `inflateInit2_` with the given window bits. Positive values auto-detect
/// zlib/gzip framing (with `+32`); negative values select raw deflate with
/// no header at all.
pub(crate) fn inflate_init2(stream: &mut Stream, window_bits: c_int) -> Result<()> {
    // SAFETY: `stream` owns a zeroed, not-yet-initialized `z_stream`, which
    // is the state `inflateInit2_` requires. The version string and struct
    // size tell zlib this binary was built against a compatible header.
    let ret = unsafe {
        libz_sys::inflateInit2_(
            stream.raw_mut(),
            window_bits,
            libz_sys::zlibVersion(),
            std::mem::size_of::<libz_sys::z_stream>() as c_int,
        )
    };
    result_from_zlib_ret(ret, ())
}

/// Run one `inflate` step with the given flush mode.
pub(crate) fn inflate(stream: &mut Stream, flush: c_int) -> c_int {
    // SAFETY: `stream` was initialized by a prior successful `inflate_init2`
    // and its input/output buffers were set by the caller before this call.
    unsafe { libz_sys::inflate(stream.raw_mut(), flush) }
}

/// Inject `bits` leftover bits (already right-aligned in `value`) ahead of
/// the next call to `inflate`.
pub(crate) fn inflate_prime(stream: &mut Stream, bits: c_int, value: c_int) -> Result<()> {
    // SAFETY: `stream` is initialized; zlib documents `inflatePrime` as safe
    // to call immediately after init, before any input is consumed.
    let ret = unsafe { libz_sys::inflatePrime(stream.raw_mut(), bits, value) };
    result_from_zlib_ret(ret, ())
}

/// Install a preset dictionary (back-reference window) on the stream.
pub(crate) fn inflate_set_dictionary(stream: &mut Stream, dictionary: &[u8]) -> Result<()> {
    // SAFETY: `dictionary` outlives this call; zlib copies the bytes it
    // needs internally rather than retaining the pointer.
    let ret = unsafe {
        libz_sys::inflateSetDictionary(
            stream.raw_mut(),
            dictionary.as_ptr(),
            dictionary.len() as libz_sys::uInt,
        )
    };
    result_from_zlib_ret(ret, ())
}

/// Release the resources held by an initialized stream.
pub(crate) fn inflate_end(stream: &mut Stream) {
    // SAFETY: `stream` was initialized by `inflate_init2`; this may only be
    // called once per stream, which `Inflater`'s `Drop` impl guarantees.
    unsafe {
        let _: c_int = libz_sys::inflateEnd(stream.raw_mut());
    }
}

