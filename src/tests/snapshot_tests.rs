// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{InvariantViolation, SnapshotError};
use crate::snapshot::{decode_ledger, encode_ledger, read_header, LedgerSnapshot, SCHEMA_VERSION};
use crate::state::command::LogRequest;
use crate::state::ledger::Ledger;
use crate::tests::support::{id, StubOracle, StubSink, ALICE, BOB, EVENT, OWNER, TASK};
use crate::types::enums::RecordStatus;
use crate::types::id::RecordId;

fn populated() -> Ledger {
    let mut ledger = Ledger::new(id(OWNER));
    let oracle = StubOracle::standard();
    let sink = StubSink::accepting();

    ledger.submit(&id(ALICE), &LogRequest::new(EVENT, TASK, 5, 1000, 1005), &oracle, &sink).unwrap();
    ledger
        .submit(&id(BOB), &LogRequest::new(EVENT, TASK, 3, 1000, 1003).with_metadata(b"photo:abc".to_vec()), &oracle, &sink)
        .unwrap();

    // Burn id 3
    sink.accept.set(false);
    let _ = ledger.submit(&id(ALICE), &LogRequest::new(EVENT, TASK, 2, 2000, 2002), &oracle, &sink);
    sink.accept.set(true);

    ledger.submit(&id(ALICE), &LogRequest::new(EVENT, TASK, 2, 2000, 2002), &oracle, &sink).unwrap();
    ledger.set_status(&id(OWNER), RecordId(1), RecordStatus::Verified).unwrap();
    ledger.pause(&id(OWNER)).unwrap();
    ledger
}

#[test]
fn test_snapshot_restore() {
    let ledger = populated();
    let hash_orig = ledger.state_hash();

    let bytes = encode_ledger(&ledger).unwrap();
    let restored = decode_ledger(&bytes).unwrap();

    assert_eq!(restored.state_hash(), hash_orig);
    assert_eq!(restored.total_records(), 4);
    assert!(restored.is_paused());
    assert_eq!(restored.volunteer_record_ids(&id(ALICE), EVENT), &[RecordId(1), RecordId(4)]);
    assert_eq!(restored.record(RecordId(2)).unwrap().metadata.as_deref(), Some(&b"photo:abc"[..]));
    assert_eq!(restored.journal(), ledger.journal());
}

#[test]
fn test_journal_history_carried_across_restores() {
    let ledger = populated();
    // Three admissions, one status override, one pause. The rolled-back
    // admission left nothing behind.
    assert_eq!(ledger.journal().committed_height(), 5);

    let mut restored = decode_ledger(&encode_ledger(&ledger).unwrap()).unwrap();
    restored.unpause(&id(OWNER)).unwrap();

    let again = decode_ledger(&encode_ledger(&restored).unwrap()).unwrap();
    assert_eq!(again.journal().committed_height(), 6);
    assert_eq!(&again.journal().committed()[..5], ledger.journal().committed());
    assert!(!again.journal().has_pending_buffer());
}

#[test]
fn test_header_fields() {
    let bytes = encode_ledger(&populated()).unwrap();
    let header = read_header(&bytes).unwrap();

    assert_eq!(&header.magic, b"RLDG");
    assert_eq!(header.version, SCHEMA_VERSION);
}

#[test]
fn test_corruption_is_detected() {
    let mut bytes = encode_ledger(&populated()).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0xFF;

    match decode_ledger(&bytes) {
        Err(SnapshotError::ChecksumMismatch) => (),
        other => panic!("Expected ChecksumMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_truncation_and_magic() {
    let bytes = encode_ledger(&populated()).unwrap();

    assert!(matches!(decode_ledger(&bytes[..10]), Err(SnapshotError::Truncated(10))));
    assert!(matches!(decode_ledger(&bytes[..bytes.len() - 1]), Err(SnapshotError::Truncated(_))));

    let mut bad_magic = bytes.clone();
    bad_magic[0] = b'X';
    assert!(matches!(decode_ledger(&bad_magic), Err(SnapshotError::InvalidMagic)));
}

#[test]
fn test_restore_rejects_overlapping_records() {
    let ledger = populated();
    let mut snapshot: LedgerSnapshot = ledger.to_snapshot();

    // Forge alice's second record onto her first period
    let forged = snapshot.records.iter_mut().find(|r| r.id == RecordId(4)).unwrap();
    forged.start_time = 1001;
    forged.end_time = 1004;

    match Ledger::from_snapshot(snapshot) {
        Err(InvariantViolation::Overlap(RecordId(1), RecordId(4))) => (),
        Err(e) => panic!("unexpected violation {e}"),
        Ok(_) => panic!("forged snapshot accepted"),
    }
}

#[test]
fn test_restore_rejects_ids_beyond_counter() {
    let mut snapshot = populated().to_snapshot();
    snapshot.total_records = 2;

    assert!(matches!(
        Ledger::from_snapshot(snapshot),
        Err(InvariantViolation::IdBeyondCounter(RecordId(4)))
    ));
}
