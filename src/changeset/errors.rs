//! Change-Set Error Types
//!
//! Every failure is explicit and reported to the immediate caller; nothing
//! is retried or swallowed here. A precondition failure aborts before any
//! mutation, and a store failure leaves the change item at its pre-call
//! state.

use crate::record::{RecordIdentity, VersionNumber};
use crate::store::StoreError;
use thiserror::Error;

/// Result type for change-set operations
pub type ChangeResult<T> = Result<T, ChangeError>;

/// Errors surfaced by the change-set engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChangeError {
    /// Classification was requested for a record absent from both stages.
    #[error("record {record} is absent from both stages")]
    NotFound {
        /// The record neither stage knows about
        record: RecordIdentity,
    },

    /// The caller lacks the edit or publish capability for the operation.
    /// No mutation was performed.
    #[error("{operation} of {record} denied: missing edit or publish capability")]
    PermissionDenied {
        /// The subject record
        record: RecordIdentity,
        /// "publish" or "revert"
        operation: &'static str,
    },

    /// The item's single-shot operation has already fired. Double execution
    /// would corrupt the version bookkeeping, so this is a hard failure,
    /// never a silent no-op.
    #[error("this change item for {record} has already been {operation}")]
    AlreadyExecuted {
        /// The subject record
        record: RecordIdentity,
        /// "published" or "reverted"
        operation: &'static str,
    },

    /// Revert was attempted on an item that has no completed publish to
    /// undo.
    #[error("cannot revert {record}: the change item has not been published")]
    NotPublished {
        /// The subject record
        record: RecordIdentity,
    },

    /// The pre-publish live version is no longer retrievable from storage
    /// history. The live stage was left unmodified.
    #[error("cannot restore {record} to version {version}: history unavailable")]
    HistoryUnavailable {
        /// The subject record
        record: RecordIdentity,
        /// The purged version revert needed
        version: VersionNumber,
    },

    /// A storage-layer failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
