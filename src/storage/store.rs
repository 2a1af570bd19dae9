// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record Store.

use std::collections::BTreeMap;

use crate::storage::record::Record;
use crate::types::enums::RecordStatus;
use crate::types::id::RecordId;

/// Authoritative `RecordId -> Record` map.
///
/// Keyed by a `BTreeMap` so iteration is in id order, which is also
/// admission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: BTreeMap<RecordId, Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its own id. Returns the displaced record, if any.
    pub(crate) fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.id, record)
    }

    pub(crate) fn remove(&mut self, id: RecordId) -> Option<Record> {
        self.records.remove(&id)
    }

    /// Overwrites the status and returns the previous one.
    pub(crate) fn set_status(&mut self, id: RecordId, status: RecordStatus) -> Option<RecordStatus> {
        self.records
            .get_mut(&id)
            .map(|record| core::mem::replace(&mut record.status, status))
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Iterates over all records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
