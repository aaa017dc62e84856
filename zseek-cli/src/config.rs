//! Configuration types for the `zseek` CLI.

use std::path::PathBuf;

/// The sidecar extension appended to an indexed file's path.
pub const INDEX_EXTENSION: &str = "idx";

/// What the CLI was asked to do, parsed out of `argv`.
#[derive(Debug, Clone)]
pub enum Command {
    /// `zseek -b FILE` — build (or rebuild) an index.
    Build { file: PathBuf },
    /// `zseek FILE BEGIN-END` / `FILE BEGIN-` / `FILE -END` / `FILE N`.
    Extract { file: PathBuf, start: u64, len: Option<u64> },
}

/// Runtime options that are not part of the command grammar itself.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Emit progress lines to stderr.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// The path an index for `file` would live at: `file` with `.idx`
/// appended to its existing name (not swapped in as a replacement
/// extension, since the compressed input commonly already ends in `.gz`).
pub fn index_path_for(file: &std::path::Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".");
    name.push(INDEX_EXTENSION);
    PathBuf::from(name)
}
