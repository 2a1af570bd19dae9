// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.
//!
//! These are part of the ledger's external contract and are not tunable.

/// Upper bound (inclusive) on `hours` for a single log.
pub const MAX_HOURS_PER_LOG: u32 = 24;

/// Maximum number of accepted records per (volunteer, event).
pub const MAX_LOGS_PER_VOLUNTEER: usize = 50;

/// Maximum size in bytes for record metadata.
pub const METADATA_MAX_LEN: usize = 256;

/// Maximum span of a work period, in clock ticks.
pub const LOG_PERIOD_BLOCKS: u64 = 144;
