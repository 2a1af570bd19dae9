// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! In-test collaborators.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::collaborator::{CollaboratorError, Submission, TaskDetails, TaskOracle, VerificationSink};
use crate::types::enums::TaskStatus;
use crate::types::id::{EventId, Identity, TaskId};

pub const OWNER: &str = "owner";
pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";

pub const EVENT: EventId = EventId(1);
pub const TASK: TaskId = TaskId(10);

#[derive(Default)]
pub struct StubOracle {
    tasks: HashMap<TaskId, TaskDetails>,
    assigned: HashSet<(TaskId, Identity)>,
    pub detail_calls: Cell<usize>,
}

impl StubOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// One open task in `EVENT`, with alice and bob assigned.
    pub fn standard() -> Self {
        let mut oracle = Self::new();
        oracle.post(TASK, EVENT);
        oracle.assign(TASK, ALICE);
        oracle.assign(TASK, BOB);
        oracle
    }

    pub fn post(&mut self, task: TaskId, event: EventId) {
        self.tasks.insert(
            task,
            TaskDetails {
                event_id: event,
                required_skills: vec!["first-aid".to_string()],
                status: TaskStatus::Open,
                end_time: None,
            },
        );
    }

    pub fn assign(&mut self, task: TaskId, who: &str) {
        self.assigned.insert((task, Identity::from(who)));
    }

    pub fn close(&mut self, task: TaskId, at: u64) {
        if let Some(details) = self.tasks.get_mut(&task) {
            details.end_time = Some(at);
            details.status = TaskStatus::Completed;
        }
    }
}

impl TaskOracle for StubOracle {
    fn task_details(&self, task: TaskId) -> Result<TaskDetails, CollaboratorError> {
        self.detail_calls.set(self.detail_calls.get() + 1);
        self.tasks.get(&task).cloned().ok_or(CollaboratorError::NotFound)
    }

    fn is_assigned(&self, task: TaskId, identity: &Identity) -> bool {
        self.assigned.contains(&(task, identity.clone()))
    }
}

pub struct StubSink {
    pub accept: Cell<bool>,
    pub received: RefCell<Vec<Submission>>,
}

impl StubSink {
    pub fn accepting() -> Self {
        Self {
            accept: Cell::new(true),
            received: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        let sink = Self::accepting();
        sink.accept.set(false);
        sink
    }
}

impl VerificationSink for StubSink {
    fn submit(&self, submission: &Submission) -> Result<(), CollaboratorError> {
        self.received.borrow_mut().push(submission.clone());
        if self.accept.get() {
            Ok(())
        } else {
            Err(CollaboratorError::Unreachable("sink offline".to_string()))
        }
    }
}

pub fn id(raw: &str) -> Identity {
    Identity::from(raw)
}
