//! Error types for trace parsing

use std::path::PathBuf;
use thiserror::Error;

/// Result type for trace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading load or transaction traces
#[derive(Error, Debug)]
pub enum Error {
    /// Load file path does not name an existing regular file
    #[error("Illegal load file: {}", path.display())]
    IllegalLoadFile { path: PathBuf },

    /// Line has no space between the command token and the key
    #[error("Malformed line {line_number}: missing space separator")]
    MissingSeparator { line_number: usize },

    /// Load trace line whose command token is not `INSERT`
    #[error("Malformed line {line_number}: expected INSERT command, got {command:?}")]
    UnexpectedCommand { line_number: usize, command: String },

    /// Transaction trace line whose command token is not one of the
    /// known operations
    #[error("Unrecognized command {command:?} at line {line_number}")]
    UnrecognizedCommand { line_number: usize, command: String },

    /// Scan record without a range token
    #[error("Scan command at line {line_number} is missing a range")]
    MissingScanRange { line_number: usize },

    /// Scan record whose range token is not a decimal number
    #[error("Invalid scan range {value:?} at line {line_number}")]
    InvalidScanRange { line_number: usize, value: String },

    /// IO error during trace reading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
