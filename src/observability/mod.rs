//! Observability
//!
//! Structured logging for the publication engine:
//! - one JSON line per event
//! - deterministic key ordering
//! - synchronous, no buffering
//!
//! The executors emit an event for every completed, denied, or failed
//! publish and revert, carrying the record identity and the before/after
//! version bookkeeping.

mod events;
mod logger;

pub use events::ChangeEvent;
pub use logger::{Logger, Severity};
