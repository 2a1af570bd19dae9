// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod id;
pub mod enums;

pub use enums::{RecordStatus, TaskStatus};
pub use id::{EventId, Identity, RecordId, TaskId};
