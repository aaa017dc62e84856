//! Library crate backing the `zseek` binary.
//!
//! Kept separate from `bin/zseek/main.rs` so the argument grammar and
//! command dispatch can be exercised directly in tests, the way
//! `gzip-utils` splits its `run_cli`/`process_file` logic from its thin
//! `bin/*/main.rs` entry points.

pub mod config;
pub mod error;
pub mod grammar;
pub mod run;

pub use config::{CliConfig, Command};
pub use error::{Error, Result};
pub use run::run;
