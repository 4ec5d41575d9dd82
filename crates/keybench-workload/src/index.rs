//! Key index built from a load trace
//!
//! The bulk-load phase of a benchmark inserts one key per trace line.
//! Replaying the transaction phase afterwards needs to know where each
//! key sits, so the index maps every key back to the 0-based line
//! number it was inserted at.

use crate::error::Result;
use crate::load::LoadParser;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// [`BTreeMap`]-based key to line number lookup table.
///
/// When you only need a single pass over the records, it's more
/// efficient to drive [`LoadParser`] directly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyIndex {
    key_to_line: BTreeMap<String, usize>,
}

impl KeyIndex {
    /// Build a `KeyIndex` by scanning a load trace from any `Read`
    /// source.
    ///
    /// A repeated key is overwritten, so the last occurrence wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_observer(reader, |_, _| {})
    }

    /// Build a `KeyIndex`, invoking `observer` once per record with
    /// `(key, line number)` in file order.
    ///
    /// The observer is a diagnostic hook; the CLI uses it to echo keys
    /// as they are scanned. Parsing behaves identically without it.
    pub fn from_reader_with_observer<R, F>(reader: R, observer: F) -> Result<Self>
    where
        R: Read,
        F: FnMut(&str, usize),
    {
        Self::drain(LoadParser::new(reader), observer)
    }

    /// Build a `KeyIndex` from a load trace on disk.
    ///
    /// Fails with [`Error::IllegalLoadFile`](crate::Error::IllegalLoadFile)
    /// before any line is read when `path` does not name an existing
    /// regular file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_observer(path, |_, _| {})
    }

    /// Build a `KeyIndex` from a load trace on disk, with a per-record
    /// observer.
    pub fn from_path_with_observer<P, F>(path: P, observer: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: FnMut(&str, usize),
    {
        let parser = LoadParser::from_path(path)?;
        Self::drain(parser, observer)
    }

    fn drain<R, F>(mut parser: LoadParser<R>, mut observer: F) -> Result<Self>
    where
        R: Read,
        F: FnMut(&str, usize),
    {
        let mut key_to_line = BTreeMap::new();

        while let Some((line_number, key)) = parser.try_next()? {
            observer(&key, line_number);
            key_to_line.insert(key, line_number);
        }

        debug!("Indexed load trace with {} entries", key_to_line.len());

        Ok(Self { key_to_line })
    }

    /// Get the line number `key` was inserted at.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.key_to_line.get(key).copied()
    }

    /// `true` if `key` appears in the trace.
    pub fn contains_key(&self, key: &str) -> bool {
        self.key_to_line.contains_key(key)
    }

    /// The number of unique keys in the index.
    pub fn len(&self) -> usize {
        self.key_to_line.len()
    }

    /// `true` if the trace contained no records.
    pub fn is_empty(&self) -> bool {
        self.key_to_line.is_empty()
    }

    /// Iterate over all `(key, line number)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.key_to_line.iter()
    }

    /// Provides direct access to the key to line number map.
    pub fn key_to_line(&self) -> &BTreeMap<String, usize> {
        &self.key_to_line
    }
}

/// Index a load trace held in a string.
pub fn index_str(content: &str) -> Result<KeyIndex> {
    KeyIndex::from_reader(content.as_bytes())
}
