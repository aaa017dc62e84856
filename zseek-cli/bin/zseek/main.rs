//! Random-access reader for gzip/zlib/deflate streams.

use std::process::ExitCode;

use zseek_cli::{run, CliConfig};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CliConfig::default();

    if let Err(err) = run(&args, &config) {
        eprintln!("zseek: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
