// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Per-volunteer, per-event record index.

use rustc_hash::FxHashMap;

use crate::config::MAX_LOGS_PER_VOLUNTEER;
use crate::error::{LedgerError, Result};
use crate::types::id::{EventId, Identity, RecordId};

/// Bounded, insertion-ordered list of record ids for each (volunteer, event).
///
/// Nested by identity first so lookups borrow the caller's `&Identity`
/// instead of cloning it into a tuple key. Empty entries are pruned, so a
/// rolled-back first admission leaves no trace.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VolunteerIndex {
    entries: FxHashMap<Identity, FxHashMap<EventId, Vec<RecordId>>>,
}

impl VolunteerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record ids for the pair, in admission order. Empty if none.
    pub fn entry(&self, volunteer: &Identity, event: EventId) -> &[RecordId] {
        self.entries
            .get(volunteer)
            .and_then(|events| events.get(&event))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_room(&self, volunteer: &Identity, event: EventId) -> bool {
        self.entry(volunteer, event).len() < MAX_LOGS_PER_VOLUNTEER
    }

    /// Appends `id`, refusing once the entry is at `MAX_LOGS_PER_VOLUNTEER`.
    pub(crate) fn append(&mut self, volunteer: &Identity, event: EventId, id: RecordId) -> Result<()> {
        let ids = self
            .entries
            .entry(volunteer.clone())
            .or_default()
            .entry(event)
            .or_default();
        if ids.len() >= MAX_LOGS_PER_VOLUNTEER {
            return Err(LedgerError::MaxLogsExceeded);
        }
        ids.push(id);
        Ok(())
    }

    /// Undo for `append`: pops `id` only if it is the newest entry.
    pub(crate) fn remove_last(&mut self, volunteer: &Identity, event: EventId, id: RecordId) -> bool {
        let Some(events) = self.entries.get_mut(volunteer) else {
            return false;
        };
        let Some(ids) = events.get_mut(&event) else {
            return false;
        };
        if ids.last() != Some(&id) {
            return false;
        }
        ids.pop();

        if ids.is_empty() {
            events.remove(&event);
        }
        if events.is_empty() {
            self.entries.remove(volunteer);
        }
        true
    }

    /// Iterates every non-empty entry. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, EventId, &[RecordId])> {
        self.entries.iter().flat_map(|(volunteer, events)| {
            events
                .iter()
                .map(move |(event, ids)| (volunteer, *event, ids.as_slice()))
        })
    }

    /// Total number of indexed ids across all entries.
    pub fn indexed_len(&self) -> usize {
        self.iter().map(|(_, _, ids)| ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
