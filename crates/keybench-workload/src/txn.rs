//! Transaction trace parser
//!
//! The transaction phase of a benchmark replays a trace of operations,
//! one per line: `INSERT <key>`, `READ <key>`, `UPDATE <key>`, or
//! `SCAN <key> <range>`. Keys in a transaction trace are single
//! whitespace-delimited tokens, unlike load trace keys.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// A single operation record from a transaction trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxnOp {
    /// Insert a key into the index under test.
    Insert { key: String },
    /// Point lookup of a key.
    Read { key: String },
    /// Overwrite the value stored under a key.
    Update { key: String },
    /// Range scan of `range` entries starting at a key.
    Scan { key: String, range: usize },
}

impl TxnOp {
    /// The key this operation targets.
    pub fn key(&self) -> &str {
        match self {
            Self::Insert { key } | Self::Read { key } | Self::Update { key } => key,
            Self::Scan { key, .. } => key,
        }
    }
}

/// Pull parser for transaction traces, yielding one [`TxnOp`] per
/// record in file order.
pub struct TxnParser<R> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> TxnParser<R> {
    /// Create a new parser from any `Read` source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Get the next operation from the trace, or return `None` at EOF.
    ///
    /// Any malformed line aborts the scan with an error carrying the
    /// 0-based line number.
    pub fn try_next(&mut self) -> Result<Option<TxnOp>> {
        let mut buf = String::with_capacity(512);
        match self.reader.read_line(&mut buf) {
            Ok(0) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
            Ok(_) => (),
        }

        let op = parse_line(&buf, self.line_number)?;
        self.line_number += 1;
        Ok(Some(op))
    }

    /// Read the remaining operations into a `Vec`.
    pub fn read_ops(&mut self) -> Result<Vec<TxnOp>> {
        let mut ops = Vec::new();
        while let Some(op) = self.try_next()? {
            ops.push(op);
        }
        Ok(ops)
    }
}

impl<'a> TxnParser<&'a [u8]> {
    /// Create a parser over an in-memory trace.
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl TxnParser<File> {
    /// Open a transaction trace on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

/// Validate a single transaction trace line and build its operation.
///
/// Tokens are split on ASCII whitespace within the trimmed line, so the
/// key here is always a single token (transaction traces never carry
/// keys with embedded spaces).
fn parse_line(line: &str, line_number: usize) -> Result<TxnOp> {
    let trimmed = line.trim();
    if !trimmed.contains(' ') {
        warn!("Malformed transaction trace line {line_number}: {trimmed:?}");
        return Err(Error::MissingSeparator { line_number });
    }

    let mut tokens = trimmed.split_ascii_whitespace();
    // A trimmed line containing a space always has at least two tokens.
    let command = tokens.next().unwrap_or_default();
    let key = tokens.next().unwrap_or_default().to_string();

    match command {
        "INSERT" => Ok(TxnOp::Insert { key }),
        "READ" => Ok(TxnOp::Read { key }),
        "UPDATE" => Ok(TxnOp::Update { key }),
        "SCAN" => {
            let Some(range_token) = tokens.next() else {
                warn!("Scan without range on transaction trace line {line_number}");
                return Err(Error::MissingScanRange { line_number });
            };
            let range = range_token
                .parse()
                .map_err(|_| Error::InvalidScanRange {
                    line_number,
                    value: range_token.to_string(),
                })?;
            Ok(TxnOp::Scan { key, range })
        }
        other => {
            warn!("Unrecognized command on transaction trace line {line_number}: {other:?}");
            Err(Error::UnrecognizedCommand {
                line_number,
                command: other.to_string(),
            })
        }
    }
}

/// Parse a transaction trace held in a string.
pub fn parse_txn_str(content: &str) -> Result<Vec<TxnOp>> {
    TxnParser::from_bytes(content.as_bytes()).read_ops()
}
