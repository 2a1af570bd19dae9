// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::id::{EventId, Identity, RecordId};

/// Admission and administration failures.
///
/// Every variant leaves ledger state exactly as it was before the call.
/// `IntegrationFailure` is the one case where the ledger ran a compensating
/// rollback on the caller's behalf.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerError {
    #[error("caller is not the ledger owner")]
    Unauthorized,
    #[error("task not found, event mismatch, or record not found")]
    InvalidTask,
    #[error("caller is not assigned to the task")]
    NotAssigned,
    #[error("hours must be between 1 and 24")]
    InvalidHours,
    #[error("ledger is paused")]
    Paused,
    #[error("verification sink rejected or was unreachable")]
    IntegrationFailure,
    #[error("work period overlaps an existing record")]
    OverlappingLog,
    #[error("task is closed")]
    EventEnded,
    #[error("metadata exceeds 256 bytes")]
    InvalidMetadata,
    #[error("work period is empty, reversed, or longer than 144 ticks")]
    InvalidPeriod,
    #[error("volunteer has reached the per-event log limit")]
    MaxLogsExceeded,
}

impl LedgerError {
    /// Stable label, used for metric tags and script output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerError::Unauthorized => "unauthorized",
            LedgerError::InvalidTask => "invalid_task",
            LedgerError::NotAssigned => "not_assigned",
            LedgerError::InvalidHours => "invalid_hours",
            LedgerError::Paused => "paused",
            LedgerError::IntegrationFailure => "integration_failure",
            LedgerError::OverlappingLog => "overlapping_log",
            LedgerError::EventEnded => "event_ended",
            LedgerError::InvalidMetadata => "invalid_metadata",
            LedgerError::InvalidPeriod => "invalid_period",
            LedgerError::MaxLogsExceeded => "max_logs_exceeded",
        }
    }
}

pub type LedgerResult<T> = core::result::Result<T, LedgerError>;
pub type Result<T> = LedgerResult<T>;

/// A structural inconsistency between the record store, the volunteer index
/// and the record counter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("index references missing record {0}")]
    DanglingIndexEntry(RecordId),
    #[error("record {0} is not indexed")]
    UnindexedRecord(RecordId),
    #[error("record {0} is indexed more than once")]
    DuplicateIndexEntry(RecordId),
    #[error("record {0} is indexed under the wrong volunteer or event")]
    IndexMismatch(RecordId),
    #[error("{volunteer} has more than 50 records in {event}")]
    QuotaExceeded { volunteer: Identity, event: EventId },
    #[error("records {0} and {1} overlap")]
    Overlap(RecordId, RecordId),
    #[error("record {0} is beyond the record counter")]
    IdBeyondCounter(RecordId),
    #[error("record {0} violates hours, period, or metadata bounds")]
    OutOfBounds(RecordId),
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid magic bytes in header")]
    InvalidMagic,
    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(u32),
    #[error("Snapshot truncated at {0} bytes")]
    Truncated(usize),
    #[error("Checksum mismatch")]
    ChecksumMismatch,
    #[error("Encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("Decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("Invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}
