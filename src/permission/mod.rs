//! Permission Collaborator
//!
//! Capability checks are injected predicates, not role hierarchies. The
//! change-set engine asks two questions and nothing more:
//! - may this caller edit the record on a stage?
//! - may this caller publish the record?
//!
//! Checks are pure queries with no side effects, and are always evaluated
//! before any mutation is attempted.

mod capability;

pub use capability::{AllowAll, CapabilityCheck, DenyAll, StaticCapabilities};
