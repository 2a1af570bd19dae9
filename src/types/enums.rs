// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record and task status enums.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle of a logged work period.
///
/// The ledger itself only ever moves `Logged -> Submitted`. Anything past
/// that is set by the owner through `Ledger::set_status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RecordStatus {
    Logged = 0,
    Submitted = 1,
    Verified = 2,
    Rejected = 3,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Logged => "logged",
            RecordStatus::Submitted => "submitted",
            RecordStatus::Verified => "verified",
            RecordStatus::Rejected => "rejected",
        }
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Logged
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task state as reported by the task board. Informational only: admission
/// keys off `TaskDetails::end_time`, not this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TaskStatus {
    Open = 0,
    Assigned = 1,
    Completed = 2,
    Cancelled = 3,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Open
    }
}
