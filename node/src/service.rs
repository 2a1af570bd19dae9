// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shared ledger service.
//!
//! One `tokio::sync::Mutex` guards the ledger. Every operation takes the
//! lock for its whole duration, so an admission's validate, stage, verify
//! and finalize steps never interleave with another call.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use relief_ledger::collaborator::{TaskOracle, VerificationSink};
use relief_ledger::error::{InvariantViolation, LedgerError};
use relief_ledger::storage::Record;
use relief_ledger::types::{EventId, Identity, RecordId, RecordStatus};
use relief_ledger::{Ledger, LogRequest};
use tokio::sync::Mutex;

use crate::config::NodeConfig;
use crate::errors::Result;
use crate::persistence;

pub type SharedLedger = Arc<Mutex<Ledger>>;

#[derive(Clone)]
pub struct LedgerService {
    ledger: SharedLedger,
}

impl LedgerService {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Restores from `cfg.snapshot_path` when that file exists, otherwise
    /// starts an empty ledger owned by `cfg.owner`.
    pub fn from_config(cfg: &NodeConfig) -> Result<Self> {
        if let Some(path) = &cfg.snapshot_path {
            if path.exists() {
                tracing::info!("Found snapshot at {:?}. Loading...", path);
                return Ok(Self::new(persistence::load_snapshot(path)?));
            }
        }
        tracing::info!("Starting empty ledger owned by {}", cfg.owner);
        Ok(Self::new(Ledger::new(Identity::new(cfg.owner.clone()))))
    }

    pub async fn submit(
        &self,
        caller: &Identity,
        request: &LogRequest,
        oracle: &(dyn TaskOracle + Sync),
        sink: &(dyn VerificationSink + Sync),
    ) -> std::result::Result<RecordId, LedgerError> {
        let started = Instant::now();
        let result = {
            let mut ledger = self.ledger.lock().await;
            ledger.submit(caller, request, oracle, sink)
        };
        metrics::histogram!("relief_submit_duration_seconds", started.elapsed().as_secs_f64());

        match &result {
            Ok(_) => metrics::counter!("relief_records_admitted_total", 1),
            Err(e) => {
                if *e == LedgerError::IntegrationFailure {
                    metrics::counter!("relief_rollbacks_total", 1);
                }
                metrics::counter!("relief_records_rejected_total", 1, "reason" => e.as_str());
            }
        }
        result
    }

    pub async fn set_status(
        &self,
        caller: &Identity,
        id: RecordId,
        status: RecordStatus,
    ) -> std::result::Result<bool, LedgerError> {
        self.ledger.lock().await.set_status(caller, id, status)
    }

    pub async fn pause(&self, caller: &Identity) -> std::result::Result<bool, LedgerError> {
        self.ledger.lock().await.pause(caller)
    }

    pub async fn unpause(&self, caller: &Identity) -> std::result::Result<bool, LedgerError> {
        self.ledger.lock().await.unpause(caller)
    }

    pub async fn transfer_ownership(
        &self,
        caller: &Identity,
        new_owner: Identity,
    ) -> std::result::Result<bool, LedgerError> {
        self.ledger.lock().await.transfer_ownership(caller, new_owner)
    }

    // --- Reads ---

    pub async fn record(&self, id: RecordId) -> Option<Record> {
        self.ledger.lock().await.record(id).cloned()
    }

    pub async fn volunteer_record_ids(&self, volunteer: &Identity, event: EventId) -> Vec<RecordId> {
        self.ledger.lock().await.volunteer_record_ids(volunteer, event).to_vec()
    }

    pub async fn total_records(&self) -> u64 {
        self.ledger.lock().await.total_records()
    }

    pub async fn is_paused(&self) -> bool {
        self.ledger.lock().await.is_paused()
    }

    pub async fn owner(&self) -> Identity {
        self.ledger.lock().await.owner().clone()
    }

    pub async fn state_hash(&self) -> [u8; 32] {
        self.ledger.lock().await.state_hash()
    }

    pub async fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        self.ledger.lock().await.check_invariants()
    }

    // --- Persistence ---

    pub async fn save_snapshot(&self, path: &Path) -> Result<usize> {
        let ledger = self.ledger.lock().await;
        persistence::save_snapshot(path, &ledger)
    }
}
