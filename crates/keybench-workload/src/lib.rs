//! # keybench-workload
//!
//! Parsers for the plain-text load and transaction traces that drive
//! YCSB-style index benchmarks, plus a key index that maps every loaded
//! key back to its insertion line.
//!
//! ## Trace Formats
//!
//! A load trace holds one insert per line; the key is everything after
//! the first space:
//!
//! ```text
//! INSERT alice@example.com
//! INSERT bob@example.com
//! ```
//!
//! A transaction trace holds one operation per line; keys are single
//! tokens, and `SCAN` carries a decimal range:
//!
//! ```text
//! READ alice@example.com
//! UPDATE bob@example.com
//! SCAN alice@example.com 100
//! ```
//!
//! ## Quick Start
//!
//! ### Indexing a Load Trace
//!
//! ```rust
//! use keybench_workload::index_str;
//!
//! let trace = "INSERT alice@example.com\nINSERT bob@example.com";
//!
//! let index = index_str(trace)?;
//! assert_eq!(index.get("alice@example.com"), Some(0));
//! assert_eq!(index.get("bob@example.com"), Some(1));
//! # Ok::<(), keybench_workload::Error>(())
//! ```
//!
//! ### Replaying a Transaction Trace
//!
//! ```rust
//! use keybench_workload::{TxnOp, parse_txn_str};
//!
//! let ops = parse_txn_str("READ alice@example.com\nSCAN bob@example.com 10")?;
//!
//! assert_eq!(ops.len(), 2);
//! assert_eq!(ops[1], TxnOp::Scan {
//!     key: "bob@example.com".to_string(),
//!     range: 10,
//! });
//! # Ok::<(), keybench_workload::Error>(())
//! ```

pub mod error;
pub mod index;
pub mod load;
pub mod txn;

pub use error::{Error, Result};
pub use index::{KeyIndex, index_str};
pub use load::LoadParser;
pub use txn::{TxnOp, TxnParser, parse_txn_str};
