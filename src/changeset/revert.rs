//! RevertExecutor - Undoes a tracked publish on the live stage
//!
//! A revert consumes the change item's recorded publish bookkeeping:
//! - the publish created the record on live (recorded pre-publish version is
//!   `NONE`): revert removes it from live again
//! - otherwise: revert rolls live back to the recorded pre-publish version
//!
//! Guard order mirrors publish: item state first, then capability, then
//! storage. Reverting is itself a live-stage write, so it requires the same
//! capabilities as publishing. One revert per item, only after its publish,
//! never after a previous revert.
//!
//! If the pre-publish version's saved state has been purged, the call fails
//! `HistoryUnavailable` and the live stage is left exactly as it was.

use super::errors::{ChangeError, ChangeResult};
use super::item::{ChangeItem, ItemState};
use crate::observability::ChangeEvent;
use crate::permission::CapabilityCheck;
use crate::record::{Stage, VersionNumber};
use crate::store::{StoreError, VersionedStore};

/// Executes revert operations against a store on behalf of one caller.
pub struct RevertExecutor<'a, S: VersionedStore, P: CapabilityCheck> {
    store: &'a mut S,
    permissions: &'a P,
}

impl<'a, S: VersionedStore, P: CapabilityCheck> RevertExecutor<'a, S, P> {
    /// Creates an executor over a store and the caller's capabilities.
    pub fn new(store: &'a mut S, permissions: &'a P) -> Self {
        Self { store, permissions }
    }

    /// May this caller revert the item's record?
    ///
    /// Same capability shape as publishing: restoring live content is a
    /// live-stage write. Pure query, no side effects.
    pub fn can_revert(&self, item: &ChangeItem) -> bool {
        self.permissions.can_edit(item.record(), Stage::Draft)
            && self.permissions.can_publish(item.record())
    }

    /// Restores the live stage to its state immediately before the item's
    /// tracked publish.
    ///
    /// Stamps the revert-time `before` (live version the publish produced)
    /// and `after` (restored version, or `NONE` for a reverted creation)
    /// onto the item and marks it reverted.
    pub fn revert(&mut self, item: &mut ChangeItem) -> ChangeResult<()> {
        let published_before = match item.state() {
            ItemState::Pending => {
                return Err(ChangeError::NotPublished {
                    record: item.record().clone(),
                })
            }
            ItemState::Reverted { .. } => {
                return Err(ChangeError::AlreadyExecuted {
                    record: item.record().clone(),
                    operation: "reverted",
                })
            }
            ItemState::Published { before, .. } => *before,
        };
        if !self.can_revert(item) {
            ChangeEvent::RevertDenied.emit(&[("record", &item.record().to_string())]);
            return Err(ChangeError::PermissionDenied {
                record: item.record().clone(),
                operation: "revert",
            });
        }

        let record = item.record().clone();
        let before = self
            .store
            .current_version(&record, Stage::Live)
            .unwrap_or(VersionNumber::NONE);
        let draft_now = self
            .store
            .current_version(&record, Stage::Draft)
            .unwrap_or(VersionNumber::NONE);

        let after = if published_before.is_none() {
            // The tracked publish created the live copy; undo by removing it.
            if before.is_some() {
                self.store.delete_from_stage(&record, Stage::Live)?;
            }
            VersionNumber::NONE
        } else {
            self.store
                .rollback_stage_to_version(&record, Stage::Live, published_before)
                .map_err(|err| match err {
                    StoreError::HistoryUnavailable { record, version } => {
                        ChangeEvent::RevertHistoryMissing.emit(&[
                            ("record", &record.to_string()),
                            ("version", &version.to_string()),
                        ]);
                        ChangeError::HistoryUnavailable { record, version }
                    }
                    other => ChangeError::Store(other),
                })?
        };

        item.mark_reverted(before, after)?;

        ChangeEvent::RevertComplete.emit(&[
            ("draft_version", &draft_now.to_string()),
            ("record", &record.to_string()),
            ("version_after", &after.to_string()),
            ("version_before", &before.to_string()),
        ]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changeset::PublishExecutor;
    use crate::permission::{AllowAll, DenyAll};
    use crate::record::{RecordId, RecordIdentity, RecordSnapshot, RecordType};
    use crate::store::InMemoryStore;
    use serde_json::json;

    fn page(id: u64) -> RecordIdentity {
        RecordIdentity::new(RecordType::new("Page"), RecordId::new(id))
    }

    fn draft_write(store: &mut InMemoryStore, record: &RecordIdentity, foo: u64) -> VersionNumber {
        store
            .write_state(record, Stage::Draft, RecordSnapshot::new(json!({ "Foo": foo })))
            .unwrap()
    }

    fn publish(store: &mut InMemoryStore, item: &mut ChangeItem) {
        PublishExecutor::new(store, &AllowAll).publish(item).unwrap();
    }

    #[test]
    fn test_revert_of_creation_removes_live_copy() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        draft_write(&mut store, &record, 1);
        let mut item = ChangeItem::new(record.clone());
        publish(&mut store, &mut item);

        RevertExecutor::new(&mut store, &AllowAll)
            .revert(&mut item)
            .unwrap();

        assert_eq!(store.current_version(&record, Stage::Live), None);
        assert!(item.is_reverted());
        assert_eq!(item.version_after(), VersionNumber::NONE);
    }

    #[test]
    fn test_revert_of_modification_restores_prior_version() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        let v1 = draft_write(&mut store, &record, 1);
        let mut first = ChangeItem::new(record.clone());
        publish(&mut store, &mut first);

        let v2 = draft_write(&mut store, &record, 2);
        let mut second = ChangeItem::new(record.clone());
        publish(&mut store, &mut second);
        assert_eq!(store.current_version(&record, Stage::Live), Some(v2));

        RevertExecutor::new(&mut store, &AllowAll)
            .revert(&mut second)
            .unwrap();

        assert_eq!(store.current_version(&record, Stage::Live), Some(v1));
        assert_eq!(second.version_before(), v2);
        assert_eq!(second.version_after(), v1);
    }

    #[test]
    fn test_revert_of_deletion_restores_live_copy() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        let v1 = draft_write(&mut store, &record, 1);
        let mut first = ChangeItem::new(record.clone());
        publish(&mut store, &mut first);

        store.delete_from_stage(&record, Stage::Draft).unwrap();
        let mut deletion = ChangeItem::new(record.clone());
        publish(&mut store, &mut deletion);
        assert_eq!(store.current_version(&record, Stage::Live), None);

        RevertExecutor::new(&mut store, &AllowAll)
            .revert(&mut deletion)
            .unwrap();

        assert_eq!(store.current_version(&record, Stage::Live), Some(v1));
        assert_eq!(deletion.version_before(), VersionNumber::NONE);
        assert_eq!(deletion.version_after(), v1);
    }

    #[test]
    fn test_revert_with_purged_history_fails_and_leaves_live() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        let v1 = draft_write(&mut store, &record, 1);
        let mut first = ChangeItem::new(record.clone());
        publish(&mut store, &mut first);

        let v2 = draft_write(&mut store, &record, 2);
        let mut second = ChangeItem::new(record.clone());
        publish(&mut store, &mut second);

        store.purge_version(&record, v1);
        let err = RevertExecutor::new(&mut store, &AllowAll)
            .revert(&mut second)
            .unwrap_err();

        assert_eq!(
            err,
            ChangeError::HistoryUnavailable {
                record: record.clone(),
                version: v1,
            }
        );
        // Live untouched, item untouched.
        assert_eq!(store.current_version(&record, Stage::Live), Some(v2));
        assert!(!second.is_reverted());
        assert_eq!(second.version_after(), v2);
    }

    #[test]
    fn test_revert_of_pending_item_fails() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        draft_write(&mut store, &record, 1);
        let mut item = ChangeItem::new(record);

        let err = RevertExecutor::new(&mut store, &AllowAll)
            .revert(&mut item)
            .unwrap_err();
        assert!(matches!(err, ChangeError::NotPublished { .. }));
    }

    #[test]
    fn test_second_revert_fails_hard() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        draft_write(&mut store, &record, 1);
        let mut item = ChangeItem::new(record);
        publish(&mut store, &mut item);

        let mut executor = RevertExecutor::new(&mut store, &AllowAll);
        executor.revert(&mut item).unwrap();
        let err = executor.revert(&mut item).unwrap_err();

        assert!(matches!(
            err,
            ChangeError::AlreadyExecuted {
                operation: "reverted",
                ..
            }
        ));
    }

    #[test]
    fn test_denied_revert_performs_no_mutation() {
        let mut store = InMemoryStore::new();
        let record = page(1);
        let v1 = draft_write(&mut store, &record, 1);
        let mut item = ChangeItem::new(record.clone());
        publish(&mut store, &mut item);

        let err = RevertExecutor::new(&mut store, &DenyAll)
            .revert(&mut item)
            .unwrap_err();

        assert!(matches!(err, ChangeError::PermissionDenied { .. }));
        assert_eq!(store.current_version(&record, Stage::Live), Some(v1));
        assert!(!item.is_reverted());
    }
}
