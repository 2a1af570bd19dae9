// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! External collaborator contracts.
//!
//! The ledger consumes exactly two outside services: a task board that
//! answers assignment questions, and a verification sink that accepts
//! finished records. Both are passed per call as trait objects so one ledger
//! can be routed at different collaborator instances.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::record::Record;
use crate::types::enums::TaskStatus;
use crate::types::id::{EventId, Identity, TaskId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("not found")]
    NotFound,
    #[error("collaborator unreachable: {0}")]
    Unreachable(String),
    #[error("rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub event_id: EventId,
    pub required_skills: Vec<String>,
    pub status: TaskStatus,
    /// Set once the task is closed.
    pub end_time: Option<u64>,
}

impl TaskDetails {
    pub fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }
}

pub trait TaskOracle {
    fn task_details(&self, task: TaskId) -> Result<TaskDetails, CollaboratorError>;
    fn is_assigned(&self, task: TaskId, identity: &Identity) -> bool;
}

/// What the verification sink receives for a freshly written record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub event_id: EventId,
    pub task_id: TaskId,
    pub volunteer: Identity,
    pub hours: u32,
    pub metadata: Option<Vec<u8>>,
}

impl Submission {
    pub fn from_record(record: &Record) -> Self {
        Self {
            event_id: record.event_id,
            task_id: record.task_id,
            volunteer: record.volunteer.clone(),
            hours: record.hours,
            metadata: record.metadata.clone(),
        }
    }
}

pub trait VerificationSink {
    fn submit(&self, submission: &Submission) -> Result<(), CollaboratorError>;
}
