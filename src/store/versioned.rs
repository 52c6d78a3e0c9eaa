//! VersionedStore - The store interface the change-set engine consumes
//!
//! Contract, per operation:
//! - Version reads are pure pointer lookups and never touch payload bytes.
//! - `write_state` stamps a fresh snapshot with the record's next version
//!   number; an already-stamped snapshot (read from another stage) is written
//!   through at its existing version. Either way the stage ends up pointing
//!   at that version.
//! - `delete_from_stage` clears the stage pointer only. History is retained,
//!   which is what makes a later rollback possible.
//! - `rollback_stage_to_version` re-points the stage at a historical version
//!   and fails `HistoryUnavailable`, stage untouched, if that version's saved
//!   state was purged.
//! - On any error, the store is left exactly as it was before the call.

use super::StoreResult;
use crate::record::{RecordIdentity, RecordSnapshot, Stage, VersionNumber};

/// Per-record, two-stage versioned storage.
pub trait VersionedStore {
    /// Returns the version the stage currently points at, if any.
    fn current_version(&self, record: &RecordIdentity, stage: Stage) -> Option<VersionNumber>;

    /// Reads the full saved state the stage currently points at.
    ///
    /// Verifies the snapshot checksum; a mismatch is `Corruption`.
    fn read_state(
        &self,
        record: &RecordIdentity,
        stage: Stage,
    ) -> StoreResult<Option<RecordSnapshot>>;

    /// Writes a snapshot to a stage and returns the version it was saved at.
    fn write_state(
        &mut self,
        record: &RecordIdentity,
        stage: Stage,
        snapshot: RecordSnapshot,
    ) -> StoreResult<VersionNumber>;

    /// Removes the record from a stage. History is retained.
    fn delete_from_stage(&mut self, record: &RecordIdentity, stage: Stage) -> StoreResult<()>;

    /// Re-points a stage at a historical version and returns that version.
    fn rollback_stage_to_version(
        &mut self,
        record: &RecordIdentity,
        stage: Stage,
        version: VersionNumber,
    ) -> StoreResult<VersionNumber>;
}
