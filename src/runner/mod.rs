//! Checklist execution.
//!
//! [`ChecklistRunner`] resolves every entry of a checklist through the
//! [`CheckRegistry`](crate::checks::CheckRegistry) and runs it against a
//! [`Host`](crate::host::Host), collecting a [`RunSummary`].

pub mod checklist;

pub use checklist::{ChecklistRunner, RunSummary};
