// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ledger events.
//!
//! Every observable state change is expressed as a `LedgerEvent` and
//! recorded in the `EventJournal`. Admission events only reach the committed
//! journal once the verification sink has accepted the record.

use serde::{Deserialize, Serialize};

use crate::types::enums::RecordStatus;
use crate::types::id::{EventId, Identity, RecordId, TaskId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A work period passed admission and verification.
    HoursLogged {
        record_id: RecordId,
        volunteer: Identity,
        event_id: EventId,
        task_id: TaskId,
        hours: u32,
    },

    /// Owner override of a record's status.
    StatusUpdated {
        record_id: RecordId,
        status: RecordStatus,
    },

    Paused {
        by: Identity,
    },

    Unpaused {
        by: Identity,
    },

    OwnershipTransferred {
        previous: Identity,
        new_owner: Identity,
    },
}

impl LedgerEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::HoursLogged { .. } => "HoursLogged",
            LedgerEvent::StatusUpdated { .. } => "StatusUpdated",
            LedgerEvent::Paused { .. } => "Paused",
            LedgerEvent::Unpaused { .. } => "Unpaused",
            LedgerEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_determinism() {
        let event = LedgerEvent::HoursLogged {
            record_id: RecordId(42),
            volunteer: Identity::from("alice"),
            event_id: EventId(1),
            task_id: TaskId(9),
            hours: 5,
        };

        let bytes1 = bincode::serde::encode_to_vec(&event, bincode::config::standard()).unwrap();
        let bytes2 = bincode::serde::encode_to_vec(&event, bincode::config::standard()).unwrap();

        assert_eq!(bytes1, bytes2, "Event serialization must be deterministic");
    }
}
