//! stagedb - A strict, deterministic draft/live publication engine for
//! versioned records
//!
//! Records live independently in two parallel stages: an editable draft and
//! a live copy visible to consumers. This crate classifies the difference
//! between the stages, and publishes or reverts one record at a time with
//! exact, single-shot version bookkeeping.

pub mod changeset;
pub mod observability;
pub mod permission;
pub mod record;
pub mod store;
