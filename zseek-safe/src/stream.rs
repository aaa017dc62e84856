//! Owner of a raw `z_stream` struct.

use std::mem;
use std::ptr;

/// Owns a zeroed, not-yet-initialized `z_stream`.
///
/// [`crate::Inflater`] takes one of these and runs `inflateInit2_` on it;
/// keeping the allocation separate from initialization mirrors
/// `lzma_stream`'s split between `Stream` (the raw struct) and `Decoder`
/// (the initialized, driveable wrapper).
pub(crate) struct Stream {
    inner: libz_sys::z_stream,
}

impl Stream {
    pub(crate) fn zeroed() -> Self {
        // SAFETY: a zeroed `z_stream` is the documented starting state zlib
        // expects before calling any `*Init2_` function on it.
        let inner = unsafe { mem::zeroed() };
        Self { inner }
    }

    pub(crate) fn raw_mut(&mut self) -> &mut libz_sys::z_stream {
        &mut self.inner
    }

    pub(crate) fn data_type(&self) -> i32 {
        self.inner.data_type
    }

    pub(crate) fn total_in(&self) -> u64 {
        self.inner.total_in as u64
    }

    pub(crate) fn total_out(&self) -> u64 {
        self.inner.total_out as u64
    }

    pub(crate) fn avail_in(&self) -> usize {
        self.inner.avail_in as usize
    }

    pub(crate) fn avail_out(&self) -> usize {
        self.inner.avail_out as usize
    }

    pub(crate) fn set_next_input(&mut self, input: &[u8]) {
        let next_in = if input.is_empty() {
            ptr::null()
        } else {
            input.as_ptr()
        };

        self.inner.next_in = next_in as *mut u8;
        self.inner.avail_in = input.len() as libz_sys::uInt;
    }

    pub(crate) fn set_next_out(&mut self, output: &mut [u8]) {
        let next_out = if output.is_empty() {
            ptr::null_mut()
        } else {
            output.as_mut_ptr()
        };

        self.inner.next_out = next_out;
        self.inner.avail_out = output.len() as libz_sys::uInt;
    }

    /// The last error message zlib attached to this stream, if any.
    pub(crate) fn message(&self) -> Option<String> {
        if self.inner.msg.is_null() {
            return None;
        }
        // SAFETY: `msg`, when non-null, points at a NUL-terminated string
        // owned by zlib for the lifetime of the stream.
        let c_str = unsafe { std::ffi::CStr::from_ptr(self.inner.msg) };
        Some(c_str.to_string_lossy().into_owned())
    }
}
