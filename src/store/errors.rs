//! Store Error Types

use crate::record::{RecordIdentity, VersionNumber};
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a versioned record store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The saved state for a historical version has been purged; the stage
    /// it was requested for is left unmodified.
    #[error("version {version} of {record} is no longer retrievable from history")]
    HistoryUnavailable {
        /// The record whose history was consulted
        record: RecordIdentity,
        /// The version whose saved state is gone
        version: VersionNumber,
    },

    /// A snapshot failed checksum verification on read.
    #[error("checksum mismatch reading {record} at version {version}")]
    Corruption {
        /// The record whose snapshot is corrupt
        record: RecordIdentity,
        /// The version the corrupt snapshot was saved at
        version: VersionNumber,
    },

    /// Transient backend failure, propagated unchanged to the caller.
    #[error("storage backend failure: {0}")]
    Backend(String),
}
