// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ledger snapshots.
//!
//! Layout: `[MAGIC "RLDG"][SCHEMA_VERSION u32][BODY_LEN u64][BODY][BLAKE3 32B]`
//! where BODY is the bincode (serde, standard config) encoding of
//! `LedgerSnapshot` and the checksum covers everything before it.

use serde::{Deserialize, Serialize};

use crate::event::LedgerEvent;
use crate::storage::record::Record;
use crate::types::id::Identity;

pub mod encode;
pub mod decode;

pub const MAGIC: &[u8; 4] = b"RLDG";
pub const SCHEMA_VERSION: u32 = 1;
pub const HEADER_LEN: usize = 4 + 4 + 8;
pub const CHECKSUM_LEN: usize = 32;

/// Exactly the persisted entities: global state, records, committed events.
/// The volunteer index is rebuilt from `records` on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub owner: Identity,
    pub paused: bool,
    pub total_records: u64,
    pub records: Vec<Record>,
    pub events: Vec<LedgerEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub body_len: u64,
}

pub use decode::{decode_ledger, read_header};
pub use encode::encode_ledger;
