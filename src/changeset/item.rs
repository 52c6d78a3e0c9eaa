//! ChangeItem - One record's tracked publish/revert state
//!
//! State machine:
//!
//! ```text
//! Pending --publish()--> Published --revert()--> Reverted
//! ```
//!
//! - Each transition fires at most once; there is no way back.
//! - The before/after version pair is stamped by the transition that fires
//!   and is immutable until the next (single possible) transition: a revert
//!   replaces the publish-time audit pair with the revert-time pair.
//! - A pending item carries no version bookkeeping (`NONE`/`NONE`).
//!
//! The item is plain persistable data: classification is never stored on it,
//! it is recomputed from storage on every read. The before/after fields are
//! a historical audit of what an executed operation did, nothing more.

use super::errors::{ChangeError, ChangeResult};
use crate::record::{RecordIdentity, VersionNumber};
use serde::{Deserialize, Serialize};

/// Execution state of a change item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ItemState {
    /// Tracked, nothing executed yet.
    Pending,
    /// A publish has executed. `before` is the live version immediately
    /// before it (NONE if the publish created the record on live), `after`
    /// the live version it produced (NONE if it removed the record).
    Published {
        /// Live version before the publish
        before: VersionNumber,
        /// Live version after the publish
        after: VersionNumber,
    },
    /// The tracked publish has been undone. `before` is the live version
    /// immediately before the revert, `after` the restored live version
    /// (NONE if the revert removed the record from live).
    Reverted {
        /// Live version before the revert
        before: VersionNumber,
        /// Live version after the revert
        after: VersionNumber,
    },
}

impl ItemState {
    /// Returns the state name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ItemState::Pending => "pending",
            ItemState::Published { .. } => "published",
            ItemState::Reverted { .. } => "reverted",
        }
    }
}

/// One record's change tracking: identity plus execution state.
///
/// Items are independent of the record they describe and can outlive it,
/// e.g. after a published deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    record: RecordIdentity,
    state: ItemState,
}

impl ChangeItem {
    /// Tracks a record with no executed operation yet.
    pub fn new(record: RecordIdentity) -> Self {
        Self {
            record,
            state: ItemState::Pending,
        }
    }

    /// Returns the subject record's identity.
    #[inline]
    pub fn record(&self) -> &RecordIdentity {
        &self.record
    }

    /// Returns the execution state.
    #[inline]
    pub fn state(&self) -> &ItemState {
        &self.state
    }

    /// Returns the state name for logging.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// True if neither publish nor revert has executed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ItemState::Pending)
    }

    /// True once a publish or revert has executed for this item.
    #[inline]
    pub fn is_published(&self) -> bool {
        !self.is_pending()
    }

    /// True once the tracked publish has been undone.
    #[inline]
    pub fn is_reverted(&self) -> bool {
        matches!(self.state, ItemState::Reverted { .. })
    }

    /// Live version in the target stage immediately before the last executed
    /// operation; `NONE` while pending.
    pub fn version_before(&self) -> VersionNumber {
        match self.state {
            ItemState::Pending => VersionNumber::NONE,
            ItemState::Published { before, .. } | ItemState::Reverted { before, .. } => before,
        }
    }

    /// Live version in the target stage immediately after the last executed
    /// operation; `NONE` while pending or when the operation removed the
    /// record.
    pub fn version_after(&self) -> VersionNumber {
        match self.state {
            ItemState::Pending => VersionNumber::NONE,
            ItemState::Published { after, .. } | ItemState::Reverted { after, .. } => after,
        }
    }

    /// Pending -> Published. Stamps the publish-time audit pair.
    ///
    /// Executor-internal: fired only after the live-stage mutation committed.
    pub(crate) fn mark_published(
        &mut self,
        before: VersionNumber,
        after: VersionNumber,
    ) -> ChangeResult<()> {
        match self.state {
            ItemState::Pending => {
                self.state = ItemState::Published { before, after };
                Ok(())
            }
            ItemState::Published { .. } => Err(ChangeError::AlreadyExecuted {
                record: self.record.clone(),
                operation: "published",
            }),
            ItemState::Reverted { .. } => Err(ChangeError::AlreadyExecuted {
                record: self.record.clone(),
                operation: "reverted",
            }),
        }
    }

    /// Published -> Reverted. Replaces the audit pair with the revert-time
    /// pair.
    ///
    /// Executor-internal: fired only after the live-stage restoration
    /// committed.
    pub(crate) fn mark_reverted(
        &mut self,
        before: VersionNumber,
        after: VersionNumber,
    ) -> ChangeResult<()> {
        match self.state {
            ItemState::Published { .. } => {
                self.state = ItemState::Reverted { before, after };
                Ok(())
            }
            ItemState::Pending => Err(ChangeError::NotPublished {
                record: self.record.clone(),
            }),
            ItemState::Reverted { .. } => Err(ChangeError::AlreadyExecuted {
                record: self.record.clone(),
                operation: "reverted",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, RecordType};

    fn item() -> ChangeItem {
        ChangeItem::new(RecordIdentity::new(
            RecordType::new("Page"),
            RecordId::new(1),
        ))
    }

    fn v(n: u64) -> VersionNumber {
        VersionNumber::new(n)
    }

    #[test]
    fn test_new_item_is_pending_with_no_bookkeeping() {
        let item = item();
        assert!(item.is_pending());
        assert!(!item.is_published());
        assert!(!item.is_reverted());
        assert_eq!(item.version_before(), VersionNumber::NONE);
        assert_eq!(item.version_after(), VersionNumber::NONE);
    }

    #[test]
    fn test_publish_stamps_versions() {
        let mut item = item();
        item.mark_published(v(1), v(2)).unwrap();

        assert!(item.is_published());
        assert!(!item.is_reverted());
        assert_eq!(item.version_before(), v(1));
        assert_eq!(item.version_after(), v(2));
        assert_eq!(item.state_name(), "published");
    }

    #[test]
    fn test_double_publish_is_rejected() {
        let mut item = item();
        item.mark_published(v(1), v(2)).unwrap();

        let err = item.mark_published(v(2), v(3)).unwrap_err();
        assert!(matches!(
            err,
            ChangeError::AlreadyExecuted {
                operation: "published",
                ..
            }
        ));
        // Bookkeeping untouched by the failed attempt.
        assert_eq!(item.version_before(), v(1));
        assert_eq!(item.version_after(), v(2));
    }

    #[test]
    fn test_revert_requires_a_publish() {
        let mut item = item();
        let err = item.mark_reverted(v(2), v(1)).unwrap_err();
        assert!(matches!(err, ChangeError::NotPublished { .. }));
        assert!(item.is_pending());
    }

    #[test]
    fn test_revert_replaces_audit_pair() {
        let mut item = item();
        item.mark_published(v(1), v(2)).unwrap();
        item.mark_reverted(v(2), v(1)).unwrap();

        assert!(item.is_reverted());
        assert_eq!(item.version_before(), v(2));
        assert_eq!(item.version_after(), v(1));
    }

    #[test]
    fn test_double_revert_is_rejected() {
        let mut item = item();
        item.mark_published(v(1), v(2)).unwrap();
        item.mark_reverted(v(2), v(1)).unwrap();

        let err = item.mark_reverted(v(1), v(1)).unwrap_err();
        assert!(matches!(
            err,
            ChangeError::AlreadyExecuted {
                operation: "reverted",
                ..
            }
        ));
    }

    #[test]
    fn test_publish_after_revert_is_rejected() {
        let mut item = item();
        item.mark_published(v(1), v(2)).unwrap();
        item.mark_reverted(v(2), v(1)).unwrap();

        assert!(item.mark_published(v(1), v(3)).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut item = item();
        item.mark_published(VersionNumber::NONE, v(1)).unwrap();

        let encoded = serde_json::to_string(&item).unwrap();
        let decoded: ChangeItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
    }
}
