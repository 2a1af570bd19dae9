// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot decoding.

use crate::error::SnapshotError;
use crate::snapshot::{LedgerSnapshot, SnapshotHeader, CHECKSUM_LEN, HEADER_LEN, MAGIC, SCHEMA_VERSION};
use crate::state::ledger::Ledger;

pub fn read_header(bytes: &[u8]) -> Result<SnapshotHeader, SnapshotError> {
    if bytes.len() < HEADER_LEN {
        return Err(SnapshotError::Truncated(bytes.len()));
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&bytes[0..4]);
    if &magic != MAGIC {
        return Err(SnapshotError::InvalidMagic);
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&bytes[4..8]);
    let version = u32::from_le_bytes(version);
    if version != SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }

    let mut body_len = [0u8; 8];
    body_len.copy_from_slice(&bytes[8..16]);

    Ok(SnapshotHeader {
        magic,
        version,
        body_len: u64::from_le_bytes(body_len),
    })
}

/// Verifies the checksum without decoding the body.
pub fn verify_checksum(bytes: &[u8]) -> Result<SnapshotHeader, SnapshotError> {
    let header = read_header(bytes)?;
    let body_len = usize::try_from(header.body_len).map_err(|_| SnapshotError::Truncated(bytes.len()))?;
    let signed_len = HEADER_LEN
        .checked_add(body_len)
        .ok_or(SnapshotError::Truncated(bytes.len()))?;
    if bytes.len() != signed_len + CHECKSUM_LEN {
        return Err(SnapshotError::Truncated(bytes.len()));
    }

    let computed = blake3::hash(&bytes[..signed_len]);
    if computed.as_bytes()[..] != bytes[signed_len..] {
        return Err(SnapshotError::ChecksumMismatch);
    }
    Ok(header)
}

/// Decodes a snapshot into a live ledger. The volunteer index is rebuilt and
/// all invariants are checked before the ledger is returned.
pub fn decode_ledger(bytes: &[u8]) -> Result<Ledger, SnapshotError> {
    let header = verify_checksum(bytes)?;
    let body = &bytes[HEADER_LEN..HEADER_LEN + header.body_len as usize];

    let (snapshot, _): (LedgerSnapshot, usize) =
        bincode::serde::decode_from_slice(body, bincode::config::standard())?;

    Ok(Ledger::from_snapshot(snapshot)?)
}
