// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use relief_ledger::snapshot::{decode_ledger, encode_ledger};
use relief_ledger::Ledger;

use crate::errors::Result;

/// `<file name><suffix>` next to `path`. Appending keeps the sibling
/// distinct from `path` whatever extension it already has.
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Writes the encoded ledger via temp file + rename. The previous snapshot,
/// if any, is kept alongside as `<file name>.prev`.
pub fn save_snapshot(path: &Path, ledger: &Ledger) -> Result<usize> {
    let bytes = encode_ledger(ledger)?;
    let tmp_path = sibling_path(path, ".tmp");
    fs::write(&tmp_path, &bytes)?;

    // ROTATION LOGIC: Keep one previous version
    if path.exists() {
        let prev_path = sibling_path(path, ".prev");
        if let Err(e) = fs::rename(path, &prev_path) {
            tracing::warn!("Could not rotate previous snapshot {:?}: {}", path, e);
        }
    }

    fs::rename(&tmp_path, path)?;
    tracing::info!("Snapshot saved to {:?} ({} bytes)", path, bytes.len());
    Ok(bytes.len())
}

/// Reads and fully verifies a snapshot (magic, checksum, invariants).
pub fn load_snapshot(path: &Path) -> Result<Ledger> {
    let bytes = fs::read(path)?;
    let ledger = decode_ledger(&bytes)?;
    tracing::info!(
        "Snapshot restored from {:?}: {} records, counter {}",
        path,
        ledger.records().len(),
        ledger.total_records()
    );
    Ok(ledger)
}
