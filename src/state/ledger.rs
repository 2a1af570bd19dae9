// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ledger State definition.
//!
//! # Admission Protocol
//! ```text
//! LogRequest
//! ↓
//! 1-10. Validate (pause, task board, bounds, quota, overlap)
//! ↓
//! Stage: allocate id, append index entry, store record as Logged
//! ↓
//! VerificationSink::submit
//! ↓
//! accepted → status Submitted, journal buffer committed
//! rejected → index entry and record removed, journal buffer discarded
//! ```
//!
//! Nothing is mutated before staging. A rolled-back admission burns its id:
//! `total_records` is never decremented, so ids are never reused.

use rustc_hash::FxHashSet;

use crate::collaborator::{Submission, TaskOracle, VerificationSink};
use crate::config::{MAX_HOURS_PER_LOG, MAX_LOGS_PER_VOLUNTEER, METADATA_MAX_LEN};
use crate::error::{InvariantViolation, LedgerError, Result};
use crate::event::LedgerEvent;
use crate::index::VolunteerIndex;
use crate::journal::EventJournal;
use crate::snapshot::LedgerSnapshot;
use crate::state::command::LogRequest;
use crate::storage::record::Record;
use crate::storage::store::RecordStore;
use crate::types::enums::RecordStatus;
use crate::types::id::{EventId, Identity, RecordId};

pub struct Ledger {
    owner: Identity,
    paused: bool,
    total_records: u64,
    records: RecordStore,
    index: VolunteerIndex,
    journal: EventJournal,
}

/// Undo information for a staged admission.
struct PendingAdmission {
    id: RecordId,
    volunteer: Identity,
    event_id: EventId,
}

impl Ledger {
    pub fn new(owner: Identity) -> Self {
        Self {
            owner,
            paused: false,
            total_records: 0,
            records: RecordStore::new(),
            index: VolunteerIndex::new(),
            journal: EventJournal::new(),
        }
    }

    // --- Read APIs ---

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn volunteer_record_ids(&self, volunteer: &Identity, event: EventId) -> &[RecordId] {
        self.index.entry(volunteer, event)
    }

    /// Ids handed out so far, including ids burned by rollbacks.
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn index(&self) -> &VolunteerIndex {
        &self.index
    }

    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    // --- Admission ---

    /// Runs the full admission pipeline for `caller`.
    ///
    /// The whole validate-stage-verify-finalize sequence runs under this one
    /// `&mut self` borrow; hosts sharing a ledger must hold their lock for
    /// the entire call.
    pub fn submit(
        &mut self,
        caller: &Identity,
        request: &LogRequest,
        oracle: &dyn TaskOracle,
        sink: &dyn VerificationSink,
    ) -> Result<RecordId> {
        if let Err(e) = self.validate(caller, request, oracle) {
            tracing::debug!(
                volunteer = %caller,
                task = request.task_id.0,
                reason = e.as_str(),
                "submission refused"
            );
            return Err(e);
        }

        let (pending, submission) = self.stage(caller, request)?;

        match sink.submit(&submission) {
            Ok(()) => {
                self.finalize(&pending);
                tracing::debug!(
                    record = pending.id.0,
                    volunteer = %caller,
                    event = request.event_id.0,
                    hours = request.hours,
                    "record admitted"
                );
                Ok(pending.id)
            }
            Err(e) => {
                tracing::warn!(record = pending.id.0, error = %e, "verification failed, rolling back");
                self.rollback(pending);
                Err(LedgerError::IntegrationFailure)
            }
        }
    }

    fn validate(&self, caller: &Identity, request: &LogRequest, oracle: &dyn TaskOracle) -> Result<()> {
        // 1. Pause gate
        if self.paused {
            return Err(LedgerError::Paused);
        }

        // 2-4. Task lookup, event consistency, closed task
        let task = oracle
            .task_details(request.task_id)
            .map_err(|_| LedgerError::InvalidTask)?;
        if task.event_id != request.event_id {
            return Err(LedgerError::InvalidTask);
        }
        if task.is_closed() {
            return Err(LedgerError::EventEnded);
        }

        // 5. Assignment
        if !oracle.is_assigned(request.task_id, caller) {
            return Err(LedgerError::NotAssigned);
        }

        // 6-8. Local bounds
        if request.hours == 0 || request.hours > MAX_HOURS_PER_LOG {
            return Err(LedgerError::InvalidHours);
        }
        let period = request.period();
        if !period.is_well_formed() {
            return Err(LedgerError::InvalidPeriod);
        }
        if let Some(metadata) = &request.metadata {
            if metadata.len() > METADATA_MAX_LEN {
                return Err(LedgerError::InvalidMetadata);
            }
        }

        // 9. Quota
        let existing = self.index.entry(caller, request.event_id);
        if existing.len() >= MAX_LOGS_PER_VOLUNTEER {
            return Err(LedgerError::MaxLogsExceeded);
        }

        // 10. Overlap against the same volunteer's records in this event
        for id in existing {
            if let Some(record) = self.records.get(*id) {
                if record.period().overlaps(&period) {
                    return Err(LedgerError::OverlappingLog);
                }
            }
        }

        Ok(())
    }

    /// Phase one: write the record and index entry provisionally.
    fn stage(&mut self, caller: &Identity, request: &LogRequest) -> Result<(PendingAdmission, Submission)> {
        let id = RecordId(self.total_records + 1);
        self.index.append(caller, request.event_id, id)?;

        let record = Record {
            id,
            event_id: request.event_id,
            task_id: request.task_id,
            volunteer: caller.clone(),
            hours: request.hours,
            start_time: request.start_time,
            end_time: request.end_time,
            metadata: request.metadata.clone(),
            status: RecordStatus::Logged,
        };
        let submission = Submission::from_record(&record);
        self.records.insert(record);
        self.total_records = id.0;

        self.journal.append_buffered(LedgerEvent::HoursLogged {
            record_id: id,
            volunteer: caller.clone(),
            event_id: request.event_id,
            task_id: request.task_id,
            hours: request.hours,
        });

        let pending = PendingAdmission {
            id,
            volunteer: caller.clone(),
            event_id: request.event_id,
        };
        Ok((pending, submission))
    }

    fn finalize(&mut self, pending: &PendingAdmission) {
        self.records.set_status(pending.id, RecordStatus::Submitted);
        self.journal.commit_buffer();
    }

    /// Compensating undo for `stage`. The counter stays advanced.
    fn rollback(&mut self, pending: PendingAdmission) {
        self.index.remove_last(&pending.volunteer, pending.event_id, pending.id);
        self.records.remove(pending.id);
        self.journal.rollback_buffer();
    }

    // --- Administration ---

    fn ensure_owner(&self, caller: &Identity) -> Result<()> {
        if *caller != self.owner {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Owner override. No transition graph is enforced: the owner can move a
    /// record to any status, including back to `Logged`.
    pub fn set_status(&mut self, caller: &Identity, id: RecordId, status: RecordStatus) -> Result<bool> {
        self.ensure_owner(caller)?;
        let previous = self
            .records
            .set_status(id, status)
            .ok_or(LedgerError::InvalidTask)?;

        tracing::info!(record = id.0, from = %previous, to = %status, "record status overridden");
        self.journal.append_committed(LedgerEvent::StatusUpdated { record_id: id, status });
        Ok(true)
    }

    pub fn pause(&mut self, caller: &Identity) -> Result<bool> {
        self.ensure_owner(caller)?;
        self.paused = true;
        tracing::info!(by = %caller, "ledger paused");
        self.journal.append_committed(LedgerEvent::Paused { by: caller.clone() });
        Ok(true)
    }

    pub fn unpause(&mut self, caller: &Identity) -> Result<bool> {
        self.ensure_owner(caller)?;
        self.paused = false;
        tracing::info!(by = %caller, "ledger unpaused");
        self.journal.append_committed(LedgerEvent::Unpaused { by: caller.clone() });
        Ok(true)
    }

    pub fn transfer_ownership(&mut self, caller: &Identity, new_owner: Identity) -> Result<bool> {
        self.ensure_owner(caller)?;
        let previous = core::mem::replace(&mut self.owner, new_owner);
        tracing::info!(from = %previous, to = %self.owner, "ownership transferred");
        self.journal.append_committed(LedgerEvent::OwnershipTransferred {
            previous,
            new_owner: self.owner.clone(),
        });
        Ok(true)
    }

    // --- Snapshot ---

    pub fn to_snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            owner: self.owner.clone(),
            paused: self.paused,
            total_records: self.total_records,
            records: self.records.iter().cloned().collect(),
            events: self.journal.committed().to_vec(),
        }
    }

    /// Rebuilds the volunteer index from the records and checks invariants.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> core::result::Result<Self, InvariantViolation> {
        let mut records = RecordStore::new();
        let mut index = VolunteerIndex::new();

        for record in snapshot.records {
            let id = record.id;
            index
                .append(&record.volunteer, record.event_id, id)
                .map_err(|_| InvariantViolation::QuotaExceeded {
                    volunteer: record.volunteer.clone(),
                    event: record.event_id,
                })?;
            if records.insert(record).is_some() {
                return Err(InvariantViolation::DuplicateIndexEntry(id));
            }
        }

        let ledger = Self {
            owner: snapshot.owner,
            paused: snapshot.paused,
            total_records: snapshot.total_records,
            records,
            index,
            journal: EventJournal::from_committed(snapshot.events),
        };
        ledger.check_invariants()?;
        Ok(ledger)
    }

    // --- Invariant Checker ---

    /// Checks consistency between the record store, the volunteer index and
    /// the record counter.
    pub fn check_invariants(&self) -> core::result::Result<(), InvariantViolation> {
        // 1. Records
        for record in self.records.iter() {
            if record.id.0 == 0 || record.id.0 > self.total_records {
                return Err(InvariantViolation::IdBeyondCounter(record.id));
            }
            let metadata_ok = record
                .metadata
                .as_ref()
                .map_or(true, |m| m.len() <= METADATA_MAX_LEN);
            if record.hours == 0
                || record.hours > MAX_HOURS_PER_LOG
                || !record.period().is_well_formed()
                || !metadata_ok
            {
                return Err(InvariantViolation::OutOfBounds(record.id));
            }
        }

        // 2. Index entries
        let mut seen: FxHashSet<RecordId> = FxHashSet::default();
        for (volunteer, event, ids) in self.index.iter() {
            if ids.len() > MAX_LOGS_PER_VOLUNTEER {
                return Err(InvariantViolation::QuotaExceeded {
                    volunteer: volunteer.clone(),
                    event,
                });
            }

            for (pos, id) in ids.iter().enumerate() {
                let record = self
                    .records
                    .get(*id)
                    .ok_or(InvariantViolation::DanglingIndexEntry(*id))?;
                if record.volunteer != *volunteer || record.event_id != event {
                    return Err(InvariantViolation::IndexMismatch(*id));
                }
                if !seen.insert(*id) {
                    return Err(InvariantViolation::DuplicateIndexEntry(*id));
                }

                let period = record.period();
                for earlier in &ids[..pos] {
                    if let Some(other) = self.records.get(*earlier) {
                        if other.period().overlaps(&period) {
                            return Err(InvariantViolation::Overlap(*earlier, *id));
                        }
                    }
                }
            }
        }

        // 3. Every record is reachable from the index
        for record in self.records.iter() {
            if !seen.contains(&record.id) {
                return Err(InvariantViolation::UnindexedRecord(record.id));
            }
        }

        Ok(())
    }

    /// BLAKE3 digest of the ledger state. See `verify::ledger_state_hash`.
    pub fn state_hash(&self) -> [u8; 32] {
        crate::verify::ledger_state_hash(self)
    }
}
