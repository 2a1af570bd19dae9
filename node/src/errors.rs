// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use relief_ledger::error::{LedgerError, SnapshotError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NodeError>;
