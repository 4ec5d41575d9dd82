//! Basic example of indexing a load trace and replaying transactions
//!
//! Run with: `cargo run --example index_load_trace`

use keybench_workload::{KeyIndex, TxnOp, parse_txn_str};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A load trace: one INSERT per line, key is everything after the
    // first space.
    let load_trace = "\
INSERT alice@example.com
INSERT bob@example.com
INSERT carol@example.com
";

    // 1. Build the key index
    let index = KeyIndex::from_reader(load_trace.as_bytes())?;
    println!("Indexed {} keys", index.len());

    // 2. Look up where a key was inserted
    if let Some(line) = index.get("bob@example.com") {
        println!("bob@example.com was inserted at line {line}");
    }

    // 3. Walk all entries (key order)
    println!("\nAll entries:");
    for (key, line) in index.iter() {
        println!("  {line:>4}  {key}");
    }

    // 4. Parse a transaction trace against the same keys
    let txn_trace = "\
READ alice@example.com
UPDATE carol@example.com
SCAN bob@example.com 50
";

    println!("\nTransaction trace:");
    for op in parse_txn_str(txn_trace)? {
        let known = index.contains_key(op.key());
        match op {
            TxnOp::Insert { key } => println!("  INSERT {key}"),
            TxnOp::Read { key } => println!("  READ   {key} (loaded: {known})"),
            TxnOp::Update { key } => println!("  UPDATE {key} (loaded: {known})"),
            TxnOp::Scan { key, range } => {
                println!("  SCAN   {key} +{range} (loaded: {known})");
            }
        }
    }

    // 5. Re-index with an observer to echo keys as they are scanned
    println!("\nScanning with observer:");
    let _ = KeyIndex::from_reader_with_observer(load_trace.as_bytes(), |key, line| {
        println!("  line {line}: {key}");
    })?;

    Ok(())
}
