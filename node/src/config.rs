// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collaborators::SinkPolicy;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Initial owner when no snapshot is restored.
    pub owner: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Restored on startup if present. `relief run` also saves here when no
    /// `--snapshot` is given.
    pub snapshot_path: Option<PathBuf>,
    /// Behaviour of the in-process verification sink.
    pub sink: SinkPolicy,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            owner: "coordinator".to_string(),
            log_filter: "relief_node=debug,relief_ledger=debug".to_string(),
            snapshot_path: None,
            sink: SinkPolicy::AcceptAll,
        }
    }
}

impl NodeConfig {
    /// Reads a JSON config. Missing fields fall back to `Default`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}
