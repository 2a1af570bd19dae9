// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! relief-ledger: admission ledger for volunteer work periods in crisis events.
//!
//! A record is accepted only if the task board confirms the caller's
//! assignment, the period is well formed and disjoint from the caller's
//! other records in the event, and the verification sink accepts it. A sink
//! failure rolls the admission back completely.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod index;
pub mod collaborator;
pub mod event;
pub mod journal;
pub mod state;
pub mod snapshot;
pub mod verify;

pub use collaborator::{CollaboratorError, Submission, TaskDetails, TaskOracle, VerificationSink};
pub use error::{InvariantViolation, LedgerError, SnapshotError};
pub use state::{Ledger, LogRequest};
pub use types::{EventId, Identity, RecordId, RecordStatus, TaskId, TaskStatus};

#[cfg(test)]
pub mod tests;
