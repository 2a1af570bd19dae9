// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Inbound request definitions.

use serde::{Deserialize, Serialize};

use crate::storage::record::WorkPeriod;
use crate::types::id::{EventId, TaskId};

/// A volunteer's claim of hours worked on a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    pub event_id: EventId,
    pub task_id: TaskId,
    pub hours: u32,
    pub start_time: u64,
    pub end_time: u64,
    #[serde(default)]
    pub metadata: Option<Vec<u8>>,
}

impl LogRequest {
    pub fn new(event_id: EventId, task_id: TaskId, hours: u32, start_time: u64, end_time: u64) -> Self {
        Self {
            event_id,
            task_id,
            hours,
            start_time,
            end_time,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<Vec<u8>>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn period(&self) -> WorkPeriod {
        WorkPeriod::new(self.start_time, self.end_time)
    }
}
