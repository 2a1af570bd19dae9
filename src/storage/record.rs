// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record definition.

use serde::{Deserialize, Serialize};

use crate::config::LOG_PERIOD_BLOCKS;
use crate::types::enums::RecordStatus;
use crate::types::id::{EventId, Identity, RecordId, TaskId};

/// Half-open span `[start, end)` on the host clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPeriod {
    pub start: u64,
    pub end: u64,
}

impl WorkPeriod {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Non-empty and no longer than `LOG_PERIOD_BLOCKS`.
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start && self.end - self.start <= LOG_PERIOD_BLOCKS
    }

    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &WorkPeriod) -> bool {
        !(self.start >= other.end || self.end <= other.start)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub event_id: EventId,
    pub task_id: TaskId,
    pub volunteer: Identity,
    pub hours: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub metadata: Option<Vec<u8>>,
    pub status: RecordStatus,
}

impl Record {
    pub fn period(&self) -> WorkPeriod {
        WorkPeriod::new(self.start_time, self.end_time)
    }
}
