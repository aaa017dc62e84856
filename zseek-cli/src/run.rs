//! High-level command dispatch for the `zseek` binary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use zseek_core::codec::{read_index, write_index};
use zseek_core::config::BuildOptions;
use zseek_core::extractor::{extract, ByteRange};
use zseek_core::Index;

use crate::config::{index_path_for, CliConfig, Command};
use crate::error::{Error, Result};
use crate::grammar;

/// Parse `args` (excluding `argv[0]`) and run the resulting command.
pub fn run(args: &[String], config: &CliConfig) -> Result<()> {
    match grammar::parse(args)? {
        Command::Build { file } => build_command(&file, config),
        Command::Extract { file, start, len } => extract_command(&file, start, len, config),
    }
}

fn build_command(file: &Path, config: &CliConfig) -> Result<()> {
    let index = build_index_for(file, config)?;
    write_index_for(file, &index)?;
    if config.verbose {
        eprintln!("{}: wrote {} access points", file.display(), index.len());
    }
    Ok(())
}

fn extract_command(file: &Path, start: u64, len: Option<u64>, config: &CliConfig) -> Result<()> {
    let index = load_or_build_index(file, config)?;

    let input = File::open(file).map_err(|source| Error::OpenInput {
        path: file.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(input);

    let mut out = BufWriter::new(io::stdout());
    let range = ByteRange::new(start, len);
    let delivered = extract(&mut reader, &index, range, &mut out).map_err(|source| Error::Extract {
        path: file.to_path_buf(),
        source,
    })?;
    out.flush()?;

    if config.verbose {
        eprintln!("{}: extracted {delivered} bytes", file.display());
    }
    Ok(())
}

/// Load `file`'s sidecar index if present, otherwise build and persist one.
fn load_or_build_index(file: &Path, config: &CliConfig) -> Result<Index> {
    let index_path = index_path_for(file);
    if index_path.exists() {
        let index_file = File::open(&index_path).map_err(|source| Error::OpenInput {
            path: index_path.clone(),
            source,
        })?;
        match read_index(BufReader::new(index_file)) {
            Ok(index) => return Ok(index),
            Err(_) => {
                // The sidecar exists but isn't a recognizable index
                // (stale format, truncated write); fall through and
                // rebuild it rather than failing the whole command.
                if config.verbose {
                    eprintln!("{}: existing index unreadable, rebuilding", index_path.display());
                }
            }
        }
    }

    let index = build_index_for(file, config)?;
    write_index_for(file, &index)?;
    Ok(index)
}

fn build_index_for(file: &Path, config: &CliConfig) -> Result<Index> {
    let input = File::open(file).map_err(|source| Error::OpenInput {
        path: file.to_path_buf(),
        source,
    })?;
    let index = zseek_core::build(BufReader::new(input), &BuildOptions::default())
        .map_err(|source| Error::Build { path: file.to_path_buf(), source })?;
    if config.verbose {
        eprintln!("{}: indexed {} uncompressed bytes", file.display(), index.total_out());
    }
    Ok(index)
}

fn write_index_for(file: &Path, index: &Index) -> Result<()> {
    let index_path = index_path_for(file);
    let index_file = File::create(&index_path).map_err(|source| Error::CreateOutput {
        path: index_path.clone(),
        source,
    })?;
    write_index(index, BufWriter::new(index_file)).map_err(|source| Error::Build {
        path: file.to_path_buf(),
        source,
    })
}
