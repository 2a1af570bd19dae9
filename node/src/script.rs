// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Scripted workloads.
//!
//! A script is a JSON document listing steps against the task board, the
//! review sink and the ledger. Steps run in order; a refused step is
//! recorded and the run continues.

use std::path::Path;
use std::sync::Arc;

use relief_ledger::error::LedgerError;
use relief_ledger::types::{EventId, Identity, RecordId, RecordStatus, TaskId};
use relief_ledger::LogRequest;
use serde::{Deserialize, Serialize};

use crate::collaborators::{ReviewSink, SinkPolicy, TaskBoard};
use crate::errors::Result;
use crate::service::LedgerService;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Owner for a fresh ledger. Ignored when a snapshot is restored.
    #[serde(default)]
    pub owner: Option<String>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    PostTask {
        task: u64,
        event: u64,
        #[serde(default)]
        skills: Vec<String>,
    },
    Assign {
        task: u64,
        volunteer: String,
    },
    CloseTask {
        task: u64,
        at: u64,
    },
    Submit {
        caller: String,
        event: u64,
        task: u64,
        hours: u32,
        start: u64,
        end: u64,
        #[serde(default)]
        metadata: Option<String>,
    },
    SetStatus {
        caller: String,
        record: u64,
        status: RecordStatus,
    },
    Pause {
        caller: String,
    },
    Unpause {
        caller: String,
    },
    TransferOwnership {
        caller: String,
        new_owner: String,
    },
    SetSink {
        policy: SinkPolicy,
    },
}

impl Step {
    pub fn op(&self) -> &'static str {
        match self {
            Step::PostTask { .. } => "post_task",
            Step::Assign { .. } => "assign",
            Step::CloseTask { .. } => "close_task",
            Step::Submit { .. } => "submit",
            Step::SetStatus { .. } => "set_status",
            Step::Pause { .. } => "pause",
            Step::Unpause { .. } => "unpause",
            Step::TransferOwnership { .. } => "transfer_ownership",
            Step::SetSink { .. } => "set_sink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Admitted(RecordId),
    Refused(LedgerError),
}

impl Outcome {
    pub fn label(&self) -> String {
        match self {
            Outcome::Applied => "ok".to_string(),
            Outcome::Admitted(id) => format!("admitted #{}", id.0),
            Outcome::Refused(e) => format!("refused: {}", e.as_str()),
        }
    }

    pub fn is_refused(&self) -> bool {
        matches!(self, Outcome::Refused(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: usize,
    pub op: &'static str,
    pub outcome: Outcome,
}

pub struct ScriptRunner {
    service: LedgerService,
    board: Arc<TaskBoard>,
    sink: Arc<ReviewSink>,
}

impl ScriptRunner {
    pub fn new(service: LedgerService, board: Arc<TaskBoard>, sink: Arc<ReviewSink>) -> Self {
        Self { service, board, sink }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    pub async fn run(&self, script: &Script) -> Vec<StepOutcome> {
        let mut outcomes = Vec::with_capacity(script.steps.len());
        for (i, step) in script.steps.iter().enumerate() {
            let outcome = self.apply(step).await;
            if let Outcome::Refused(e) = &outcome {
                tracing::debug!("Step {} ({}) refused: {}", i, step.op(), e);
            }
            outcomes.push(StepOutcome {
                step: i,
                op: step.op(),
                outcome,
            });
        }
        outcomes
    }

    pub async fn apply(&self, step: &Step) -> Outcome {
        match step {
            Step::PostTask { task, event, skills } => {
                self.board.post_task(TaskId(*task), EventId(*event), skills.clone());
                Outcome::Applied
            }
            Step::Assign { task, volunteer } => {
                if self.board.assign(TaskId(*task), Identity::new(volunteer.clone())) {
                    Outcome::Applied
                } else {
                    Outcome::Refused(LedgerError::InvalidTask)
                }
            }
            Step::CloseTask { task, at } => {
                if self.board.close_task(TaskId(*task), *at) {
                    Outcome::Applied
                } else {
                    Outcome::Refused(LedgerError::InvalidTask)
                }
            }
            Step::Submit {
                caller,
                event,
                task,
                hours,
                start,
                end,
                metadata,
            } => {
                let mut request = LogRequest::new(EventId(*event), TaskId(*task), *hours, *start, *end);
                if let Some(meta) = metadata {
                    request = request.with_metadata(meta.as_bytes().to_vec());
                }
                let caller = Identity::new(caller.clone());
                match self
                    .service
                    .submit(&caller, &request, self.board.as_ref(), self.sink.as_ref())
                    .await
                {
                    Ok(id) => Outcome::Admitted(id),
                    Err(e) => Outcome::Refused(e),
                }
            }
            Step::SetStatus { caller, record, status } => {
                let caller = Identity::new(caller.clone());
                admin(self.service.set_status(&caller, RecordId(*record), *status).await)
            }
            Step::Pause { caller } => admin(self.service.pause(&Identity::new(caller.clone())).await),
            Step::Unpause { caller } => admin(self.service.unpause(&Identity::new(caller.clone())).await),
            Step::TransferOwnership { caller, new_owner } => {
                let caller = Identity::new(caller.clone());
                admin(
                    self.service
                        .transfer_ownership(&caller, Identity::new(new_owner.clone()))
                        .await,
                )
            }
            Step::SetSink { policy } => {
                self.sink.set_policy(policy.clone());
                Outcome::Applied
            }
        }
    }
}

fn admin(result: std::result::Result<bool, LedgerError>) -> Outcome {
    match result {
        Ok(_) => Outcome::Applied,
        Err(e) => Outcome::Refused(e),
    }
}
