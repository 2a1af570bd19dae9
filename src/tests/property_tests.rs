// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seeded random workloads: invariants must hold after every call.

use crate::config::MAX_LOGS_PER_VOLUNTEER;
use crate::error::LedgerError;
use crate::state::command::LogRequest;
use crate::state::ledger::Ledger;
use crate::tests::support::{id, StubOracle, StubSink, ALICE, BOB, EVENT, OWNER, TASK};
use crate::types::enums::RecordStatus;
use crate::types::id::{EventId, RecordId, TaskId};

/// A simple deterministic RNG for tests.
struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    fn new(seed: u64) -> Self {
        Self { state: seed, inc: 1 }
    }

    fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(6364136223846793005).wrapping_add(self.inc);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

fn oracle_two_events() -> StubOracle {
    let mut oracle = StubOracle::standard();
    oracle.post(TaskId(20), EventId(2));
    oracle.assign(TaskId(20), ALICE);
    oracle.assign(TaskId(20), BOB);
    oracle
}

fn random_request(rng: &mut Pcg32) -> LogRequest {
    let (event, task) = if rng.below(2) == 0 { (EVENT, TASK) } else { (EventId(2), TaskId(20)) };
    let start = rng.below(2_000) as u64;
    let span = 1 + rng.below(30) as u64;
    let hours = 1 + rng.below(24);
    LogRequest::new(event, task, hours, start, start + span)
}

fn run_workload(seed: u64, steps: usize) -> Ledger {
    let mut rng = Pcg32::new(seed);
    let mut ledger = Ledger::new(id(OWNER));
    let oracle = oracle_two_events();
    let sink = StubSink::accepting();

    for _ in 0..steps {
        let who = if rng.below(2) == 0 { id(ALICE) } else { id(BOB) };
        let req = random_request(&mut rng);
        sink.accept.set(rng.below(5) != 0);

        let visible_before = ledger.records().len();
        let entry_before = ledger.volunteer_record_ids(&who, req.event_id).to_vec();
        let counter_before = ledger.total_records();

        match ledger.submit(&who, &req, &oracle, &sink) {
            Ok(rid) => {
                assert_eq!(rid, RecordId(counter_before + 1));
                assert_eq!(ledger.record(rid).unwrap().status, RecordStatus::Submitted);
            }
            Err(LedgerError::IntegrationFailure) => {
                assert_eq!(ledger.records().len(), visible_before);
                assert_eq!(ledger.volunteer_record_ids(&who, req.event_id), entry_before.as_slice());
                assert_eq!(ledger.total_records(), counter_before + 1);
            }
            Err(_) => {
                assert_eq!(ledger.records().len(), visible_before);
                assert_eq!(ledger.total_records(), counter_before);
            }
        }

        ledger.check_invariants().unwrap();
    }
    ledger
}

#[test]
fn test_invariants_hold_under_random_workload() {
    for seed in [1u64, 7, 42, 1337] {
        let ledger = run_workload(seed, 400);

        for record in ledger.records().iter() {
            let ids = ledger.volunteer_record_ids(&record.volunteer, record.event_id);
            assert!(ids.len() <= MAX_LOGS_PER_VOLUNTEER);
            for other_id in ids {
                if *other_id == record.id {
                    continue;
                }
                let other = ledger.record(*other_id).unwrap();
                assert!(!record.period().overlaps(&other.period()));
            }
        }
    }
}

#[test]
fn test_same_workload_same_state_hash() {
    let a = run_workload(99, 300);
    let b = run_workload(99, 300);
    assert_eq!(a.state_hash(), b.state_hash(), "Hash must be deterministic for same workload");

    let c = run_workload(100, 300);
    assert_ne!(a.state_hash(), c.state_hash());
}
