// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic Hashing and Verification.

use crate::state::ledger::Ledger;

/// Computes the cryptographic hash of the ledger state.
///
/// **Scope**: owner, pause flag, record counter, and every visible record in
/// id order. The volunteer index is derived from the records and the event
/// journal is history, so neither is hashed.
pub fn ledger_state_hash(ledger: &Ledger) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    let owner = ledger.owner().as_str().as_bytes();
    hasher.update(&(owner.len() as u64).to_le_bytes());
    hasher.update(owner);
    hasher.update(&[ledger.is_paused() as u8]);
    hasher.update(&ledger.total_records().to_le_bytes());

    // Records (Canonical Order: By Id)
    for record in ledger.records().iter() {
        hasher.update(&record.id.0.to_le_bytes());
        hasher.update(&record.event_id.0.to_le_bytes());
        hasher.update(&record.task_id.0.to_le_bytes());

        let volunteer = record.volunteer.as_str().as_bytes();
        hasher.update(&(volunteer.len() as u64).to_le_bytes());
        hasher.update(volunteer);

        hasher.update(&record.hours.to_le_bytes());
        hasher.update(&record.start_time.to_le_bytes());
        hasher.update(&record.end_time.to_le_bytes());

        if let Some(metadata) = &record.metadata {
            hasher.update(&[1]); // Presence Marker
            hasher.update(&(metadata.len() as u64).to_le_bytes());
            hasher.update(metadata);
        } else {
            hasher.update(&[0]); // Absence Marker
        }

        hasher.update(&[record.status as u8]);
    }

    *hasher.finalize().as_bytes()
}

pub fn snapshot_hash(snapshot_bytes: &[u8]) -> [u8; 32] {
    blake3::hash(snapshot_bytes).into()
}

/// Lowercase hex rendering for logs and CLI output.
pub fn to_hex(hash: &[u8; 32]) -> String {
    blake3::Hash::from(*hash).to_hex().to_string()
}
