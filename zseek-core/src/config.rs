//! Configuration types and constants for the index builder.

/// Target spacing, in uncompressed bytes, between access points (1 MiB).
pub const SPAN: u64 = 1 << 20;

/// Size of the back-reference dictionary window carried by each access
/// point; this is DEFLATE's own maximum window size.
pub const WINSIZE: usize = 32 * 1024;

/// Size of the builder's compressed-input read buffer.
pub const CHUNK: usize = 16 * 1024;

/// Tunables for [`crate::builder::build_index`].
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Minimum uncompressed-byte spacing between access points.
    pub span: u64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { span: SPAN }
    }
}
