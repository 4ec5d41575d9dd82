//! Load trace parser
//!
//! A load trace drives the bulk-load phase of an index benchmark: one
//! record per line, shaped `INSERT <key>`. The key is everything after
//! the first space and may itself contain spaces.
//!
//! Traces at the large end run to tens of millions of lines, so the
//! parser works in a single streaming pass and never holds more than
//! one line in memory.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// The only command a load trace may contain.
const INSERT_COMMAND: &str = "INSERT";

/// Pull parser for load traces, yielding one `(line number, key)` pair
/// per record.
///
/// If you want the whole trace as a lookup table, use
/// [`KeyIndex`](crate::KeyIndex) instead of driving this directly.
#[derive(Debug)]
pub struct LoadParser<R> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> LoadParser<R> {
    /// Create a new parser from any `Read` source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Get the next record from the trace, or return `None` at EOF.
    ///
    /// Records are numbered from 0 in file order. Any malformed line
    /// aborts the scan: there is no resynchronization, and the error
    /// carries the offending line number.
    pub fn try_next(&mut self) -> Result<Option<(usize, String)>> {
        let mut buf = String::with_capacity(512);
        match self.reader.read_line(&mut buf) {
            Ok(0) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
            Ok(_) => (),
        }

        let key = parse_line(&buf, self.line_number)?;
        let record = (self.line_number, key);
        self.line_number += 1;
        Ok(Some(record))
    }
}

impl<'a> LoadParser<&'a [u8]> {
    /// Create a parser over an in-memory trace.
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl LoadParser<File> {
    /// Open a load trace on disk.
    ///
    /// Fails with [`Error::IllegalLoadFile`] before any line is read
    /// when `path` does not name an existing regular file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::IllegalLoadFile {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::new(File::open(path)?))
    }
}

/// Validate a single load trace line and extract its key.
///
/// The line is trimmed of surrounding whitespace first; the key is the
/// remainder after the FIRST space and is not trimmed again, so a
/// doubled separator keeps its second space in the key.
fn parse_line(line: &str, line_number: usize) -> Result<String> {
    let trimmed = line.trim();

    let Some(space) = trimmed.find(' ') else {
        warn!("Malformed load trace line {line_number}: {trimmed:?}");
        return Err(Error::MissingSeparator { line_number });
    };

    let (command, rest) = trimmed.split_at(space);
    if command != INSERT_COMMAND {
        warn!("Unexpected command on load trace line {line_number}: {command:?}");
        return Err(Error::UnexpectedCommand {
            line_number,
            command: command.to_string(),
        });
    }

    Ok(rest[1..].to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let mut parser = LoadParser::from_bytes(b"INSERT alice@example.com\n");

        assert_eq!(
            parser.try_next().unwrap(),
            Some((0, "alice@example.com".to_string()))
        );
        assert_eq!(parser.try_next().unwrap(), None);
    }

    #[test]
    fn test_records_numbered_in_file_order() {
        let mut parser = LoadParser::from_bytes(b"INSERT a\nINSERT b\nINSERT c\n");

        assert_eq!(parser.try_next().unwrap(), Some((0, "a".to_string())));
        assert_eq!(parser.try_next().unwrap(), Some((1, "b".to_string())));
        assert_eq!(parser.try_next().unwrap(), Some((2, "c".to_string())));
        assert_eq!(parser.try_next().unwrap(), None);
    }

    #[test]
    fn test_missing_final_newline_is_fine() {
        let mut parser = LoadParser::from_bytes(b"INSERT a\nINSERT b");

        assert_eq!(parser.try_next().unwrap(), Some((0, "a".to_string())));
        assert_eq!(parser.try_next().unwrap(), Some((1, "b".to_string())));
        assert_eq!(parser.try_next().unwrap(), None);
    }

    #[test]
    fn test_key_keeps_interior_spaces() {
        let mut parser = LoadParser::from_bytes(b"INSERT a b c\n");

        assert_eq!(parser.try_next().unwrap(), Some((0, "a b c".to_string())));
    }

    #[test]
    fn test_key_starts_after_first_space_only() {
        // A doubled separator leaves a leading space on the key.
        let mut parser = LoadParser::from_bytes(b"INSERT  spaced\n");

        assert_eq!(
            parser.try_next().unwrap(),
            Some((0, " spaced".to_string()))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let mut parser = LoadParser::from_bytes(b"  INSERT padded\t\n");

        assert_eq!(parser.try_next().unwrap(), Some((0, "padded".to_string())));
    }

    #[test]
    fn test_line_without_space_fails() {
        let mut parser = LoadParser::from_bytes(b"INSERTalice\n");

        let err = parser.try_next().unwrap_err();
        assert!(matches!(err, Error::MissingSeparator { line_number: 0 }));
    }

    #[test]
    fn test_error_reports_offending_line_number() {
        let mut parser = LoadParser::from_bytes(b"INSERT a\nINSERT b\nnospace\n");

        assert!(parser.try_next().unwrap().is_some());
        assert!(parser.try_next().unwrap().is_some());
        let err = parser.try_next().unwrap_err();
        assert!(matches!(err, Error::MissingSeparator { line_number: 2 }));
    }

    #[test]
    fn test_wrong_command_fails() {
        let mut parser = LoadParser::from_bytes(b"DELETE alice\n");

        let err = parser.try_next().unwrap_err();
        match err {
            Error::UnexpectedCommand {
                line_number,
                command,
            } => {
                assert_eq!(line_number, 0);
                assert_eq!(command, "DELETE");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_is_malformed() {
        let mut parser = LoadParser::from_bytes(b"INSERT a\n\nINSERT b\n");

        assert!(parser.try_next().unwrap().is_some());
        let err = parser.try_next().unwrap_err();
        assert!(matches!(err, Error::MissingSeparator { line_number: 1 }));
    }

    #[test]
    fn test_empty_trace_yields_no_records() {
        let mut parser = LoadParser::from_bytes(b"");

        assert_eq!(parser.try_next().unwrap(), None);
    }

    #[test]
    fn test_from_path_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_trace.dat");

        let err = LoadParser::from_path(&missing).unwrap_err();
        assert!(matches!(err, Error::IllegalLoadFile { .. }));
    }

    #[test]
    fn test_from_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = LoadParser::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, Error::IllegalLoadFile { .. }));
    }
}
