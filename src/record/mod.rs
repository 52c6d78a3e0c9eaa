//! Staged-Record Domain Types
//!
//! Defines the vocabulary shared by the store and the change-set engine:
//! - `Stage` - one of the two parallel storage areas (draft, live)
//! - `RecordType` / `RecordId` / `RecordIdentity` - flat record identity
//! - `VersionNumber` - per-record monotonic version, 0 = absent
//! - `RecordSnapshot` - full record state with checksum
//!
//! These are pure types. No storage or publication behavior lives here.

mod checksum;
mod identity;
mod snapshot;
mod stage;
mod version;

pub use checksum::{compute_checksum, verify_checksum};
pub use identity::{RecordId, RecordIdentity, RecordType};
pub use snapshot::RecordSnapshot;
pub use stage::Stage;
pub use version::VersionNumber;
