// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Event Journal
//!
//! Maintains the distinction between:
//! - **committed** = events whose state change is final
//! - **buffer** = events of an admission still waiting on verification
//!
//! Only `commit_buffer()` promotes buffered events; `rollback_buffer()`
//! discards them together with the admission that produced them.
//!
//! The committed log is the ledger's audit history. It is append-only and
//! never compacted, and every snapshot carries it in full so a restored
//! ledger keeps the complete trail of admissions and owner actions.

use crate::event::LedgerEvent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventJournal {
    committed: Vec<LedgerEvent>,
    buffer: Vec<LedgerEvent>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from previously committed events (snapshot restore).
    pub fn from_committed(events: Vec<LedgerEvent>) -> Self {
        Self {
            committed: events,
            buffer: Vec::new(),
        }
    }

    /// Buffer an event. It becomes truth only after `commit_buffer()`.
    pub fn append_buffered(&mut self, event: LedgerEvent) {
        self.buffer.push(event);
    }

    /// Append straight to the committed log (admin changes have no
    /// verification step).
    pub fn append_committed(&mut self, event: LedgerEvent) {
        self.committed.push(event);
    }

    pub fn commit_buffer(&mut self) {
        self.committed.append(&mut self.buffer);
    }

    pub fn rollback_buffer(&mut self) {
        self.buffer.clear();
    }

    pub fn committed(&self) -> &[LedgerEvent] {
        &self.committed
    }

    pub fn buffered(&self) -> &[LedgerEvent] {
        &self.buffer
    }

    pub fn committed_height(&self) -> u64 {
        self.committed.len() as u64
    }

    pub fn has_pending_buffer(&self) -> bool {
        !self.buffer.is_empty()
    }
}
