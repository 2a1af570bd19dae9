// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot encoding.

use crate::error::SnapshotError;
use crate::snapshot::{CHECKSUM_LEN, HEADER_LEN, MAGIC, SCHEMA_VERSION};
use crate::state::ledger::Ledger;

pub fn encode_ledger(ledger: &Ledger) -> Result<Vec<u8>, SnapshotError> {
    let body = bincode::serde::encode_to_vec(ledger.to_snapshot(), bincode::config::standard())?;

    let mut out = Vec::with_capacity(HEADER_LEN + body.len() + CHECKSUM_LEN);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
    out.extend_from_slice(&(body.len() as u64).to_le_bytes());
    out.extend_from_slice(&body);

    let checksum = blake3::hash(&out);
    out.extend_from_slice(checksum.as_bytes());
    Ok(out)
}
