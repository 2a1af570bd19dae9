// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::LedgerError;
use crate::event::LedgerEvent;
use crate::state::command::LogRequest;
use crate::state::ledger::Ledger;
use crate::tests::support::{id, StubOracle, StubSink, ALICE, EVENT, OWNER, TASK};
use crate::types::enums::RecordStatus;
use crate::types::id::RecordId;

fn ledger_with_one_record() -> Ledger {
    let mut ledger = Ledger::new(id(OWNER));
    let oracle = StubOracle::standard();
    let sink = StubSink::accepting();
    ledger
        .submit(&id(ALICE), &LogRequest::new(EVENT, TASK, 5, 1000, 1005), &oracle, &sink)
        .unwrap();
    ledger
}

#[test]
fn test_pause_blocks_admission_until_unpaused() {
    let mut ledger = Ledger::new(id(OWNER));
    let oracle = StubOracle::standard();
    let sink = StubSink::accepting();

    assert_eq!(ledger.pause(&id(OWNER)), Ok(true));
    assert!(ledger.is_paused());

    let req = LogRequest::new(EVENT, TASK, 5, 1000, 1005);
    assert_eq!(ledger.submit(&id(ALICE), &req, &oracle, &sink), Err(LedgerError::Paused));
    assert_eq!(ledger.total_records(), 0);

    assert_eq!(ledger.unpause(&id(OWNER)), Ok(true));
    assert!(!ledger.is_paused());
    assert_eq!(ledger.submit(&id(ALICE), &req, &oracle, &sink), Ok(RecordId(1)));
}

#[test]
fn test_admin_operations_require_owner() {
    let mut ledger = ledger_with_one_record();
    let intruder = id(ALICE);

    assert_eq!(ledger.pause(&intruder), Err(LedgerError::Unauthorized));
    assert_eq!(ledger.unpause(&intruder), Err(LedgerError::Unauthorized));
    assert_eq!(
        ledger.set_status(&intruder, RecordId(1), RecordStatus::Verified),
        Err(LedgerError::Unauthorized)
    );
    assert_eq!(
        ledger.transfer_ownership(&intruder, intruder.clone()),
        Err(LedgerError::Unauthorized)
    );

    assert!(!ledger.is_paused());
    assert_eq!(ledger.owner(), &id(OWNER));
    assert_eq!(ledger.record(RecordId(1)).unwrap().status, RecordStatus::Submitted);
    assert_eq!(ledger.journal().committed_height(), 1);
}

#[test]
fn test_set_status_is_unconstrained_owner_override() {
    let mut ledger = ledger_with_one_record();
    let owner = id(OWNER);

    assert_eq!(ledger.set_status(&owner, RecordId(1), RecordStatus::Verified), Ok(true));
    assert_eq!(ledger.record(RecordId(1)).unwrap().status, RecordStatus::Verified);

    // No transition graph: the owner may move a record backwards
    assert_eq!(ledger.set_status(&owner, RecordId(1), RecordStatus::Logged), Ok(true));
    assert_eq!(ledger.record(RecordId(1)).unwrap().status, RecordStatus::Logged);

    assert_eq!(
        ledger.journal().committed().last(),
        Some(&LedgerEvent::StatusUpdated {
            record_id: RecordId(1),
            status: RecordStatus::Logged,
        })
    );
}

#[test]
fn test_set_status_on_missing_record() {
    let mut ledger = ledger_with_one_record();
    assert_eq!(
        ledger.set_status(&id(OWNER), RecordId(42), RecordStatus::Rejected),
        Err(LedgerError::InvalidTask)
    );
}

#[test]
fn test_transfer_ownership_moves_authority() {
    let mut ledger = Ledger::new(id(OWNER));
    let successor = id("coordinator");

    assert_eq!(ledger.transfer_ownership(&id(OWNER), successor.clone()), Ok(true));
    assert_eq!(ledger.owner(), &successor);

    assert_eq!(ledger.pause(&id(OWNER)), Err(LedgerError::Unauthorized));
    assert_eq!(ledger.pause(&successor), Ok(true));

    assert_eq!(
        ledger.journal().committed()[0],
        LedgerEvent::OwnershipTransferred {
            previous: id(OWNER),
            new_owner: successor,
        }
    );
}

#[test]
fn test_read_accessors_on_empty_ledger() {
    let ledger = Ledger::new(id(OWNER));

    assert!(ledger.record(RecordId(1)).is_none());
    assert!(ledger.volunteer_record_ids(&id(ALICE), EVENT).is_empty());
    assert_eq!(ledger.total_records(), 0);
    assert!(!ledger.is_paused());
    assert_eq!(ledger.owner(), &id(OWNER));
}
