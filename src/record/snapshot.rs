//! RecordSnapshot - Full record state at one version
//!
//! A snapshot is the complete saved state of a record:
//! - JSON payload (full-record writes only, no partial updates)
//! - version stamp, assigned by the store on first write
//! - CRC32 checksum over the canonical payload bytes
//!
//! A snapshot constructed by a caller is unstamped (`VersionNumber::NONE`);
//! the store stamps it when the write allocates a version. A snapshot read
//! back from a stage always carries the stamp of the version it was saved at,
//! which is what lets a publish write a draft version through to live without
//! allocating a new number.

use super::checksum::{compute_checksum, verify_checksum};
use super::VersionNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full saved state of a record at one version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    version: VersionNumber,
    payload: Value,
    checksum: u32,
}

impl RecordSnapshot {
    /// Creates an unstamped snapshot from a full record payload.
    ///
    /// The checksum is computed here, once, over the canonical payload bytes.
    pub fn new(payload: Value) -> Self {
        let checksum = compute_checksum(&canonical_bytes(&payload));
        Self {
            version: VersionNumber::NONE,
            payload,
            checksum,
        }
    }

    /// Returns the version this snapshot was saved at, or `NONE` if unstamped.
    #[inline]
    pub fn version(&self) -> VersionNumber {
        self.version
    }

    /// Returns the record payload.
    #[inline]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Returns the stored checksum.
    #[inline]
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Returns true if the stored checksum matches the payload.
    pub fn verify(&self) -> bool {
        verify_checksum(&canonical_bytes(&self.payload), self.checksum)
    }

    /// Stamps the snapshot with the version the store saved it at.
    ///
    /// Store-internal: callers never stamp snapshots themselves.
    pub(crate) fn stamp(&mut self, version: VersionNumber) {
        self.version = version;
    }
}

/// Canonical byte form of a payload, used for checksumming.
fn canonical_bytes(payload: &Value) -> Vec<u8> {
    // Serializing a Value cannot fail in practice; the display form is an
    // equally deterministic fallback.
    serde_json::to_vec(payload).unwrap_or_else(|_| payload.to_string().into_bytes())
}
