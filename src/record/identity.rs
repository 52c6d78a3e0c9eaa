//! Record Identity
//!
//! A record is identified by the pair (root storage type, id). Where the type
//! participates in a hierarchy, the caller resolves the root type BEFORE
//! constructing the identity: version numbers are tracked at the root type
//! only, so identities are flat and carry no inheritance information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a record's root storage type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    /// Creates a record type from its root type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the type name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The id of a specific record instance within its root type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a record id.
    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identity of a subject record: root type plus instance id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordIdentity {
    record_type: RecordType,
    id: RecordId,
}

impl RecordIdentity {
    /// Creates an identity from a root type and an instance id.
    pub fn new(record_type: RecordType, id: RecordId) -> Self {
        Self { record_type, id }
    }

    /// Returns the root storage type.
    #[inline]
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Returns the instance id.
    #[inline]
    pub fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.record_type, self.id)
    }
}
