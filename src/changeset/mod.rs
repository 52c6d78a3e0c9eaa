//! Change-Set Engine
//!
//! Tracks and applies atomic publication of changes to records held in two
//! parallel stages (draft, live).
//!
//! - `ChangeClassifier` - computes a record's change status by comparing the
//!   current draft and live versions; always live, never cached
//! - `ChangeItem` - one record's tracked publish/revert state, with
//!   write-once before/after version bookkeeping
//! - `PublishExecutor` - copies current draft state to live, single-shot
//! - `RevertExecutor` - restores the pre-publish live state, single-shot
//! - `ChangeSet` - an ordered batch of change items
//!
//! Ordering across records (ownership, cascade) is a collaborator concern:
//! each executor touches a single record's own history, so items are safe to
//! apply in whatever order the caller chooses. Callers must serialize access
//! per record; the executors carry no optimistic-concurrency check.

mod classify;
mod errors;
mod item;
mod publish;
mod revert;
mod set;

pub use classify::{ChangeClassifier, ChangeType};
pub use errors::{ChangeError, ChangeResult};
pub use item::{ChangeItem, ItemState};
pub use publish::PublishExecutor;
pub use revert::RevertExecutor;
pub use set::ChangeSet;
