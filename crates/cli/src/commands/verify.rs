// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::Path;

use relief_ledger::snapshot::decode::verify_checksum;
use relief_ledger::snapshot::decode_ledger;
use relief_ledger::verify::{snapshot_hash, to_hex};

/// Checks magic, checksum and ledger invariants. Any failure is returned as
/// an error after the verdict is printed.
pub fn run(snapshot_path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(snapshot_path)?;

    if let Err(e) = verify_checksum(&bytes) {
        println!("\n❌ CORRUPTED\n");
        println!("Reason: {}", e);
        return Err(e.into());
    }

    match decode_ledger(&bytes) {
        Ok(ledger) => {
            println!("\n✅ VERIFIED\n");
            println!("State Hash:    {}", to_hex(&ledger.state_hash()));
            println!("File Hash:     {}", to_hex(&snapshot_hash(&bytes)));
            println!("Records:       {}\n", ledger.records().len());
            Ok(())
        }
        Err(e) => {
            println!("\n❌ INCONSISTENT\n");
            println!("Reason: {}", e);
            Err(e.into())
        }
    }
}
