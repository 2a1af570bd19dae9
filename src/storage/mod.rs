// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod record;
pub mod store;

pub use record::{Record, WorkPeriod};
pub use store::RecordStore;
