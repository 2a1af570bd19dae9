// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! In-process collaborators.
//!
//! `TaskBoard` stands in for the task posting service and `ReviewSink` for
//! the multisig verification queue. Both are shared behind locks so one
//! instance can serve every caller of a `LedgerService`.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError, RwLock};

use relief_ledger::collaborator::{CollaboratorError, Submission, TaskDetails, TaskOracle, VerificationSink};
use relief_ledger::types::{EventId, Identity, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

struct TaskEntry {
    details: TaskDetails,
    assignees: HashSet<Identity>,
}

#[derive(Default)]
pub struct TaskBoard {
    tasks: RwLock<HashMap<TaskId, TaskEntry>>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts (or re-posts) an open task under `event`. Re-posting keeps the
    /// assignees but reopens the task.
    pub fn post_task(&self, task: TaskId, event: EventId, required_skills: Vec<String>) {
        let mut guard = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        let details = TaskDetails {
            event_id: event,
            required_skills,
            status: TaskStatus::Open,
            end_time: None,
        };
        match guard.get_mut(&task) {
            Some(entry) => entry.details = details,
            None => {
                guard.insert(
                    task,
                    TaskEntry {
                        details,
                        assignees: HashSet::new(),
                    },
                );
            }
        }
    }

    /// Returns `false` if the task does not exist.
    pub fn assign(&self, task: TaskId, volunteer: Identity) -> bool {
        let mut guard = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        match guard.get_mut(&task) {
            Some(entry) => {
                entry.assignees.insert(volunteer);
                if entry.details.status == TaskStatus::Open {
                    entry.details.status = TaskStatus::Assigned;
                }
                true
            }
            None => false,
        }
    }

    /// Closes the task at tick `at`. Returns `false` if the task does not exist.
    pub fn close_task(&self, task: TaskId, at: u64) -> bool {
        let mut guard = self.tasks.write().unwrap_or_else(PoisonError::into_inner);
        match guard.get_mut(&task) {
            Some(entry) => {
                entry.details.end_time = Some(at);
                entry.details.status = TaskStatus::Completed;
                true
            }
            None => false,
        }
    }
}

impl TaskOracle for TaskBoard {
    fn task_details(&self, task: TaskId) -> Result<TaskDetails, CollaboratorError> {
        let guard = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .get(&task)
            .map(|entry| entry.details.clone())
            .ok_or(CollaboratorError::NotFound)
    }

    fn is_assigned(&self, task: TaskId, identity: &Identity) -> bool {
        let guard = self.tasks.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .get(&task)
            .map_or(false, |entry| entry.assignees.contains(identity))
    }
}

/// How `ReviewSink` answers submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "tasks")]
pub enum SinkPolicy {
    AcceptAll,
    RejectAll,
    /// Fails without recording the submission, like a dropped connection.
    Unreachable,
    RejectTasks(Vec<u64>),
}

impl Default for SinkPolicy {
    fn default() -> Self {
        SinkPolicy::AcceptAll
    }
}

pub struct ReviewSink {
    policy: RwLock<SinkPolicy>,
    received: Mutex<Vec<Submission>>,
}

impl ReviewSink {
    pub fn new(policy: SinkPolicy) -> Self {
        Self {
            policy: RwLock::new(policy),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn set_policy(&self, policy: SinkPolicy) {
        *self.policy.write().unwrap_or_else(PoisonError::into_inner) = policy;
    }

    pub fn policy(&self) -> SinkPolicy {
        self.policy.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Every submission that reached the sink, accepted or not.
    pub fn received(&self) -> Vec<Submission> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for ReviewSink {
    fn default() -> Self {
        Self::new(SinkPolicy::AcceptAll)
    }
}

impl VerificationSink for ReviewSink {
    fn submit(&self, submission: &Submission) -> Result<(), CollaboratorError> {
        let policy = self.policy();
        if policy == SinkPolicy::Unreachable {
            return Err(CollaboratorError::Unreachable("review queue offline".to_string()));
        }

        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());

        match policy {
            SinkPolicy::AcceptAll => Ok(()),
            SinkPolicy::RejectAll => Err(CollaboratorError::Rejected("review queue rejects all".to_string())),
            SinkPolicy::RejectTasks(tasks) if tasks.contains(&submission.task_id.0) => {
                Err(CollaboratorError::Rejected(format!("task {} is not reviewable", submission.task_id.0)))
            }
            _ => Ok(()),
        }
    }
}
