//! ChangeClassifier - Live change status of a record
//!
//! Classification compares the current draft and live versions at call time.
//! It is never cached and never derived from a change item's stored
//! before/after fields; those are historical audit data and may be stale by
//! the time anyone asks.

use super::errors::{ChangeError, ChangeResult};
use crate::record::{RecordIdentity, Stage};
use crate::store::VersionedStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Change status of a record, draft relative to live.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Stages agree; nothing to publish.
    None,
    /// Exists on draft only; a publish would create it on live.
    Created,
    /// Exists on both stages at different versions.
    Modified,
    /// Exists on live only; deleted from draft, a publish would remove it
    /// from live.
    Deleted,
}

impl ChangeType {
    /// Returns the stable lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::None => "none",
            ChangeType::Created => "created",
            ChangeType::Modified => "modified",
            ChangeType::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pure classification of a record against current storage state.
pub struct ChangeClassifier;

impl ChangeClassifier {
    /// Computes the record's change status from the current stage versions.
    ///
    /// A record absent from both stages is a dangling reference and is
    /// reported as `NotFound` rather than any change status.
    pub fn classify<S: VersionedStore>(
        store: &S,
        record: &RecordIdentity,
    ) -> ChangeResult<ChangeType> {
        let draft = store.current_version(record, Stage::Draft);
        let live = store.current_version(record, Stage::Live);

        match (draft, live) {
            (None, None) => Err(ChangeError::NotFound {
                record: record.clone(),
            }),
            (Some(_), None) => Ok(ChangeType::Created),
            (None, Some(_)) => Ok(ChangeType::Deleted),
            (Some(d), Some(l)) if d == l => Ok(ChangeType::None),
            (Some(_), Some(_)) => Ok(ChangeType::Modified),
        }
    }
}
