//! Versioned Record Store
//!
//! The store holds the canonical state of every record across both stages.
//!
//! # Design Principles
//!
//! - One monotonic version counter per record, shared by both stages
//! - Stages are pointers into the record's version history
//! - History is append-only; deleting from a stage clears the pointer only
//! - Checksum-verified on every state read
//! - Every mutating call applies fully or not at all
//!
//! The change-set engine consumes the `VersionedStore` trait. `InMemoryStore`
//! is the reference implementation used by fixtures and tests; a production
//! deployment supplies its own backend behind the same trait.

mod errors;
mod memory;
mod versioned;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use versioned::VersionedStore;
