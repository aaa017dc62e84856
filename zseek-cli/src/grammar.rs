//! Parses the five fixed argument shapes `zseek` accepts.
//!
//! ```text
//! zseek -b FILE            build an index for FILE, writing FILE.idx
//! zseek FILE BEGIN-END     extract uncompressed bytes [BEGIN, END)
//! zseek FILE BEGIN-        extract from BEGIN through end of stream
//! zseek FILE -END          extract the first END bytes
//! zseek FILE N             extract a single byte at offset N
//! ```

use std::path::PathBuf;

use crate::config::Command;
use crate::error::{Error, Result};

/// Parse `argv[1..]` into a [`Command`].
pub fn parse(args: &[String]) -> Result<Command> {
    match args {
        [flag, file] if flag == "-b" => Ok(Command::Build { file: PathBuf::from(file) }),
        [file, range] => {
            let (start, len) = parse_range(range)?;
            Ok(Command::Extract { file: PathBuf::from(file), start, len })
        }
        _ => Err(Error::Usage(
            "usage: zseek -b FILE | zseek FILE BEGIN-END | zseek FILE BEGIN- | zseek FILE -END | zseek FILE N"
                .to_string(),
        )),
    }
}

fn parse_range(range: &str) -> Result<(u64, Option<u64>)> {
    let invalid = |reason: &'static str| Error::InvalidRange { range: range.to_string(), reason };

    if let Some(end) = range.strip_prefix('-') {
        let end: u64 = end.parse().map_err(|_| invalid("END is not a valid number"))?;
        return Ok((0, Some(end)));
    }

    if let Some((begin, end)) = range.split_once('-') {
        let begin: u64 = begin.parse().map_err(|_| invalid("BEGIN is not a valid number"))?;
        if end.is_empty() {
            return Ok((begin, None));
        }
        let end: u64 = end.parse().map_err(|_| invalid("END is not a valid number"))?;
        if end <= begin {
            return Err(invalid("END must be greater than BEGIN"));
        }
        return Ok((begin, Some(end - begin)));
    }

    let offset: u64 = range.parse().map_err(|_| invalid("not a valid offset"))?;
    Ok((offset, Some(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_command() {
        let args = vec!["-b".to_string(), "data.gz".to_string()];
        match parse(&args).unwrap() {
            Command::Build { file } => assert_eq!(file, PathBuf::from("data.gz")),
            _ => panic!("expected Build"),
        }
    }

    #[test]
    fn begin_end_range() {
        assert_eq!(parse_range("10-20").unwrap(), (10, Some(10)));
    }

    #[test]
    fn begin_open_range() {
        assert_eq!(parse_range("10-").unwrap(), (10, None));
    }

    #[test]
    fn leading_end_range() {
        assert_eq!(parse_range("-20").unwrap(), (0, Some(20)));
    }

    #[test]
    fn single_offset() {
        assert_eq!(parse_range("42").unwrap(), (42, Some(1)));
    }

    #[test]
    fn backwards_range_is_rejected() {
        assert!(parse_range("20-10").is_err());
    }

    #[test]
    fn garbage_range_is_rejected() {
        assert!(parse_range("abc").is_err());
    }

    #[test]
    fn extract_command_shape() {
        let args = vec!["archive.gz".to_string(), "100-200".to_string()];
        match parse(&args).unwrap() {
            Command::Extract { file, start, len } => {
                assert_eq!(file, PathBuf::from("archive.gz"));
                assert_eq!(start, 100);
                assert_eq!(len, Some(100));
            }
            _ => panic!("expected Extract"),
        }
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        assert!(parse(&["only-one".to_string()]).is_err());
    }
}
