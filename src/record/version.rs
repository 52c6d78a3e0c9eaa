//! VersionNumber - Per-record monotonic version
//!
//! Every write of a record allocates the next number from a single counter
//! shared by both stages. Publishing does not allocate: it writes an already
//! stamped draft version through to live, so a freshly published record holds
//! the same number on both stages.
//!
//! `0` is the sentinel for "absent from the stage". Change items use it for
//! their before/after bookkeeping; the store API uses `Option` instead and
//! never hands out version zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A record version number. Zero means "no version" (absent from a stage).
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct VersionNumber(u64);

impl VersionNumber {
    /// The "absent" sentinel.
    pub const NONE: VersionNumber = VersionNumber(0);

    /// Creates a version number with the given value.
    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if this is the "absent" sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this denotes a real version.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
