//! Capability predicates consumed by the publish and revert executors.

use crate::record::{RecordIdentity, Stage};

/// Capability queries for a single caller.
///
/// Implementations must be side-effect free: the executors may call these
/// any number of times, including on paths that never mutate anything.
pub trait CapabilityCheck {
    /// May the caller edit this record on the given stage?
    fn can_edit(&self, record: &RecordIdentity, stage: Stage) -> bool;

    /// May the caller publish this record?
    ///
    /// Publishing and reverting are both live-stage writes, so both
    /// executors require this capability.
    fn can_publish(&self, record: &RecordIdentity) -> bool;
}

/// Grants every capability. Fixture for tests and trusted callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl CapabilityCheck for AllowAll {
    fn can_edit(&self, _record: &RecordIdentity, _stage: Stage) -> bool {
        true
    }

    fn can_publish(&self, _record: &RecordIdentity) -> bool {
        true
    }
}

/// Denies every capability. Fixture for permission-failure paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl CapabilityCheck for DenyAll {
    fn can_edit(&self, _record: &RecordIdentity, _stage: Stage) -> bool {
        false
    }

    fn can_publish(&self, _record: &RecordIdentity) -> bool {
        false
    }
}

/// Fixed capability answers, independent of record and stage.
///
/// Useful for exercising the "edit but not publish" and "publish but not
/// edit" denial branches.
#[derive(Debug, Clone, Copy)]
pub struct StaticCapabilities {
    /// Answer for every `can_edit` query
    pub edit: bool,
    /// Answer for every `can_publish` query
    pub publish: bool,
}

impl CapabilityCheck for StaticCapabilities {
    fn can_edit(&self, _record: &RecordIdentity, _stage: Stage) -> bool {
        self.edit
    }

    fn can_publish(&self, _record: &RecordIdentity) -> bool {
        self.publish
    }
}
