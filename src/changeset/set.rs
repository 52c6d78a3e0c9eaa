//! ChangeSet - An ordered batch of change items
//!
//! A change set represents one logical multi-record change ("everything
//! needed to publish this edit"). The set itself decides nothing about
//! ordering semantics: items are applied in the order they were tracked,
//! and a dependency-resolution collaborator is expected to have chosen that
//! order. Each item operates on its own record's history, so any order is
//! safe for the executors.

use super::errors::ChangeResult;
use super::item::ChangeItem;
use super::publish::PublishExecutor;
use super::revert::RevertExecutor;
use crate::permission::CapabilityCheck;
use crate::record::RecordIdentity;
use crate::store::VersionedStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logical batch of tracked changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSet {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    items: Vec<ChangeItem>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    /// Returns the set's unique id.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the set was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the tracked items in application order.
    #[inline]
    pub fn items(&self) -> &[ChangeItem] {
        &self.items
    }

    /// Returns the number of tracked items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tracks a record, appending a pending item at the end of the order.
    ///
    /// Re-tracking is idempotent: if the record already has a pending item
    /// in this set, that item is returned instead of a duplicate. Executed
    /// items stay in the set as audit history and do not block re-tracking.
    pub fn track(&mut self, record: RecordIdentity) -> &mut ChangeItem {
        let position = self
            .items
            .iter()
            .position(|item| item.record() == &record && item.is_pending());
        let position = match position {
            Some(existing) => existing,
            None => {
                self.items.push(ChangeItem::new(record));
                self.items.len() - 1
            }
        };
        &mut self.items[position]
    }

    /// Looks up the item tracking a record, pending or executed.
    ///
    /// When a record was tracked and executed more than once, the most
    /// recently tracked item wins.
    pub fn item_for(&self, record: &RecordIdentity) -> Option<&ChangeItem> {
        self.items.iter().rev().find(|item| item.record() == record)
    }

    /// Mutable variant of [`ChangeSet::item_for`].
    pub fn item_for_mut(&mut self, record: &RecordIdentity) -> Option<&mut ChangeItem> {
        self.items
            .iter_mut()
            .rev()
            .find(|item| item.record() == record)
    }

    /// True once every tracked item has executed.
    pub fn is_fully_executed(&self) -> bool {
        self.items.iter().all(|item| item.is_published())
    }

    /// Publishes every pending item, in tracked order, stopping at the
    /// first failure. Items already executed before the failure keep their
    /// executed state.
    pub fn publish_all<S: VersionedStore, P: CapabilityCheck>(
        &mut self,
        executor: &mut PublishExecutor<'_, S, P>,
    ) -> ChangeResult<()> {
        for item in &mut self.items {
            if item.is_pending() {
                executor.publish(item)?;
            }
        }
        Ok(())
    }

    /// Reverts every published item, in tracked order, stopping at the
    /// first failure.
    pub fn revert_all<S: VersionedStore, P: CapabilityCheck>(
        &mut self,
        executor: &mut RevertExecutor<'_, S, P>,
    ) -> ChangeResult<()> {
        for item in &mut self.items {
            if !item.is_reverted() && !item.is_pending() {
                executor.revert(item)?;
            }
        }
        Ok(())
    }
}
