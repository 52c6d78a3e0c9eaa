//! InMemoryStore - Reference store used by fixtures and tests
//!
//! One entry per record:
//! - a monotonic version counter shared by both stages
//! - an append-only version -> snapshot history
//! - a draft pointer and a live pointer into that history
//!
//! Every mutating call validates first and mutates after, so a failed call
//! leaves the store untouched. `purge_version` exists so tests can exercise
//! the purged-history failure branch of rollback.

use super::errors::{StoreError, StoreResult};
use super::versioned::VersionedStore;
use crate::record::{RecordIdentity, RecordSnapshot, Stage, VersionNumber};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
struct RecordEntry {
    next_version: u64,
    history: BTreeMap<VersionNumber, RecordSnapshot>,
    draft: Option<VersionNumber>,
    live: Option<VersionNumber>,
}

impl RecordEntry {
    fn stage(&self, stage: Stage) -> Option<VersionNumber> {
        match stage {
            Stage::Draft => self.draft,
            Stage::Live => self.live,
        }
    }

    fn stage_mut(&mut self, stage: Stage) -> &mut Option<VersionNumber> {
        match stage {
            Stage::Draft => &mut self.draft,
            Stage::Live => &mut self.live,
        }
    }
}

/// In-memory two-stage versioned record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: HashMap<RecordIdentity, RecordEntry>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the saved state for one historical version.
    ///
    /// Stage pointers are untouched: a stage left pointing at a purged
    /// version will fail subsequent state reads, and a rollback targeting it
    /// will fail `HistoryUnavailable`.
    pub fn purge_version(&mut self, record: &RecordIdentity, version: VersionNumber) {
        if let Some(entry) = self.records.get_mut(record) {
            entry.history.remove(&version);
        }
    }

    /// Returns every record the store has ever seen, in a stable order.
    pub fn known_records(&self) -> Vec<RecordIdentity> {
        let mut records: Vec<RecordIdentity> = self.records.keys().cloned().collect();
        records.sort();
        records
    }
}

impl VersionedStore for InMemoryStore {
    fn current_version(&self, record: &RecordIdentity, stage: Stage) -> Option<VersionNumber> {
        self.records.get(record).and_then(|entry| entry.stage(stage))
    }

    fn read_state(
        &self,
        record: &RecordIdentity,
        stage: Stage,
    ) -> StoreResult<Option<RecordSnapshot>> {
        let Some(entry) = self.records.get(record) else {
            return Ok(None);
        };
        let Some(version) = entry.stage(stage) else {
            return Ok(None);
        };
        let Some(snapshot) = entry.history.get(&version) else {
            return Err(StoreError::HistoryUnavailable {
                record: record.clone(),
                version,
            });
        };
        if !snapshot.verify() {
            return Err(StoreError::Corruption {
                record: record.clone(),
                version,
            });
        }
        Ok(Some(snapshot.clone()))
    }

    fn write_state(
        &mut self,
        record: &RecordIdentity,
        stage: Stage,
        mut snapshot: RecordSnapshot,
    ) -> StoreResult<VersionNumber> {
        let entry = self.records.entry(record.clone()).or_default();
        let version = if snapshot.version().is_none() {
            entry.next_version += 1;
            let allocated = VersionNumber::new(entry.next_version);
            snapshot.stamp(allocated);
            allocated
        } else {
            // Write-through of a snapshot read from another stage. Keep the
            // counter ahead of every stamped version ever written.
            let stamped = snapshot.version();
            entry.next_version = entry.next_version.max(stamped.value());
            stamped
        };
        entry.history.insert(version, snapshot);
        *entry.stage_mut(stage) = Some(version);
        Ok(version)
    }

    fn delete_from_stage(&mut self, record: &RecordIdentity, stage: Stage) -> StoreResult<()> {
        if let Some(entry) = self.records.get_mut(record) {
            *entry.stage_mut(stage) = None;
        }
        Ok(())
    }

    fn rollback_stage_to_version(
        &mut self,
        record: &RecordIdentity,
        stage: Stage,
        version: VersionNumber,
    ) -> StoreResult<VersionNumber> {
        let unavailable = || StoreError::HistoryUnavailable {
            record: record.clone(),
            version,
        };
        if version.is_none() {
            return Err(unavailable());
        }
        let Some(entry) = self.records.get_mut(record) else {
            return Err(unavailable());
        };
        if !entry.history.contains_key(&version) {
            return Err(unavailable());
        }
        *entry.stage_mut(stage) = Some(version);
        Ok(version)
    }
}
