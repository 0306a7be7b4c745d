//! tagstore validation: detect corruption introduced by external edits.
//!
//! A record store stays internally consistent through its own API, but its
//! persisted form can be edited by hand. [`validate_store`] walks a store
//! and classifies every record against three independent rule classes (key,
//! type, value), reporting each violation through a caller-supplied
//! [`ErrorReporter`] the moment it is found. Validation runs on demand; it
//! is never triggered by reads or writes.

mod engine;
mod reporter;

pub use engine::validate_store;
pub use reporter::{ErrorReporter, LogReporter, RecordingReporter, Rule, Violation};
