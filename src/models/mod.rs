//! Data models module
//!
//! Defines the reading journal entry and the draft it is built from.

pub mod entry;

pub use entry::{Entry, EntryDraft};
