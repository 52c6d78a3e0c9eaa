//! PublishExecutor - Copies a record's current draft state to live
//!
//! A publish is single-shot per change item and proceeds strictly in this
//! order:
//! 1. the item must be pending, else the call is `AlreadyExecuted`
//! 2. the capability check must pass, else `PermissionDenied`
//! 3. only then is storage touched
//!
//! The live stage receives the draft's stamped snapshot (no new version is
//! allocated), or loses the record entirely if the draft row is gone. The
//! draft stage is never mutated. The item is stamped last, so a storage
//! failure leaves it at its pre-call state; the store contract guarantees
//! the same for the stage itself.

use super::errors::{ChangeError, ChangeResult};
use super::item::ChangeItem;
use crate::observability::ChangeEvent;
use crate::permission::CapabilityCheck;
use crate::record::{Stage, VersionNumber};
use crate::store::VersionedStore;

/// Executes publish operations against a store on behalf of one caller.
pub struct PublishExecutor<'a, S: VersionedStore, P: CapabilityCheck> {
    store: &'a mut S,
    permissions: &'a P,
}

impl<'a, S: VersionedStore, P: CapabilityCheck> PublishExecutor<'a, S, P> {
    /// Creates an executor over a store and the caller's capabilities.
    pub fn new(store: &'a mut S, permissions: &'a P) -> Self {
        Self { store, permissions }
    }

    /// May this caller publish the item's record?
    ///
    /// Requires the edit capability on draft and the publish capability.
    /// Pure query, no side effects.
    pub fn can_publish(&self, item: &ChangeItem) -> bool {
        self.permissions.can_edit(item.record(), Stage::Draft)
            && self.permissions.can_publish(item.record())
    }

    /// Publishes the item's record: live takes the current draft state.
    ///
    /// - draft present: the draft snapshot is written through to live;
    ///   `after` is the resulting live version
    /// - draft absent (already deleted there): the record is removed from
    ///   live; `after` is `NONE`
    ///
    /// Stamps `before`/`after` onto the item and marks it published.
    pub fn publish(&mut self, item: &mut ChangeItem) -> ChangeResult<()> {
        if !item.is_pending() {
            return Err(ChangeError::AlreadyExecuted {
                record: item.record().clone(),
                operation: "published",
            });
        }
        if !self.can_publish(item) {
            ChangeEvent::PublishDenied.emit(&[("record", &item.record().to_string())]);
            return Err(ChangeError::PermissionDenied {
                record: item.record().clone(),
                operation: "publish",
            });
        }

        let record = item.record().clone();
        let before = self
            .store
            .current_version(&record, Stage::Live)
            .unwrap_or(VersionNumber::NONE);

        let after = match self.store.read_state(&record, Stage::Draft)? {
            Some(draft) => self.store.write_state(&record, Stage::Live, draft)?,
            None => {
                // Publishing a draft deletion: remove the live copy.
                if before.is_some() {
                    self.store.delete_from_stage(&record, Stage::Live)?;
                }
                VersionNumber::NONE
            }
        };

        item.mark_published(before, after)?;

        ChangeEvent::PublishComplete.emit(&[
            ("record", &record.to_string()),
            ("version_after", &after.to_string()),
            ("version_before", &before.to_string()),
        ]);
        Ok(())
    }
}
